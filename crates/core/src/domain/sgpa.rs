use std::fmt;

/// Credit-weighted grade point average, rounded to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Sgpa(f64);

impl Sgpa {
    pub const ZERO: Sgpa = Sgpa(0.0);

    /// `0.0` when `total_credits` is zero; no division happens in that case.
    pub fn from_totals(weighted_sum: u64, total_credits: u64) -> Self {
        if total_credits == 0 {
            return Self::ZERO;
        }

        let raw = weighted_sum as f64 / total_credits as f64;
        Self((raw * 100.0).round() / 100.0)
    }

    /// Wraps a value read back from storage.
    pub fn from_stored(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<Sgpa> for f64 {
    fn from(value: Sgpa) -> Self {
        value.value()
    }
}

impl fmt::Display for Sgpa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
