use std::fmt::{Debug, Display, Formatter};

use serde::Serialize;

/// Percentage, where `100.0` stands for the whole.
///
/// Displays with two decimals unless the formatter asks for another precision,
/// so `format!("{:.1}", percentage)` gives `15.3%`.
#[derive(Clone, Copy, Default, PartialEq, PartialOrd, Serialize, derive_more::From)]
#[serde(transparent)]
pub struct Percentage(pub f64);

impl Percentage {
    pub const ZERO: Self = Self(0.0);

    #[must_use]
    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0.0
    }
}

impl Display for Percentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.*}%", f.precision().unwrap_or(2), self.0)
    }
}

impl Debug for Percentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
