use std::fmt::{Display, Formatter};

use crate::core::LocationParams;

/// Human-readable right-hand side of a location's net revenue line.
#[must_use]
#[derive(Copy, Clone)]
pub struct Formula(pub LocationParams);

impl Display for Formula {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let LocationParams { slope, intercept } = self.0;
        let sign = if intercept.is_sign_negative() { '-' } else { '+' };
        write!(f, "({slope} / 4) × Risk {sign} {}", intercept.abs())
    }
}
