//! Domain model for SGPA submissions: grade symbols, the credit-weighted
//! calculator and the identifiers shared with the storage layer.

pub mod domain;
