pub mod sgpa_record;
