use std::fmt::{Debug, Display, Formatter};

use serde::Serialize;

/// Philippine peso amount.
#[derive(Clone, Copy, Default, PartialEq, PartialOrd, Serialize, derive_more::From)]
#[serde(transparent)]
pub struct Pesos(pub f64);

impl Pesos {
    pub const ZERO: Self = Self(0.0);
}

impl Display for Pesos {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let centavos = (self.0.abs() * 100.0).round();
        let whole = ((centavos / 100.0).trunc() as u64).to_string();
        let fraction = (centavos % 100.0) as u64;

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i != 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        let sign = if self.0 < 0.0 && centavos != 0.0 { "-" } else { "" };
        write!(f, "{sign}₱{grouped}.{fraction:02}")
    }
}

impl Debug for Pesos {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "₱{:.2}", self.0)
    }
}
