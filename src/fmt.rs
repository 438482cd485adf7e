use std::fmt::{Display, Formatter};

use crate::core::Comparison;

/// Plain-language reading of how rain changes a location's line.
pub struct Interpretation<'a>(pub &'a Comparison);

impl Display for Interpretation<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Comparison { slope_change, intercept_change, .. } = self.0;
        if slope_change.is_negative() {
            write!(f, "Risk effectiveness decreased by {:.1} due to rain", slope_change.abs())?;
        } else {
            write!(f, "Risk effectiveness increased by {slope_change:.1} during rain")?;
        }
        f.write_str(" | ")?;
        if intercept_change.is_negative() {
            write!(f, "Base revenue dropped by {:.1} in rainy conditions", intercept_change.abs())
        } else {
            write!(f, "Base revenue rose by {intercept_change:.1} in rainy conditions")
        }
    }
}

pub const KEY_TAKEAWAYS: [&str; 4] = [
    "Negative slope change: discounts became less effective in driving revenue when it rained.",
    "Positive slope change: discounts became more effective in driving revenue when it rained.",
    "Higher intercept in rain: base revenue increased, even without discounts.",
    "Lower intercept in rain: base revenue dropped, meaning discounts may be necessary to boost sales.",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::Percentage;

    #[test]
    fn test_increase_and_unchanged() {
        let comparison = Comparison {
            location: "Luzon".to_string(),
            slope_change: Percentage(223.513_634),
            intercept_change: Percentage::ZERO,
        };
        assert_eq!(
            Interpretation(&comparison).to_string(),
            "Risk effectiveness increased by 223.5% during rain | Base revenue rose by 0.0% in rainy conditions",
        );
    }

    #[test]
    fn test_decrease() {
        let comparison = Comparison {
            location: "Luzon".to_string(),
            slope_change: Percentage(-73.69),
            intercept_change: Percentage(-91.6),
        };
        assert_eq!(
            Interpretation(&comparison).to_string(),
            "Risk effectiveness decreased by 73.7% due to rain | Base revenue dropped by 91.6% in rainy conditions",
        );
    }
}
