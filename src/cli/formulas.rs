use std::fmt::{Display, Formatter};

use crate::{core::Dataset, tables::build_formulas_table};

/// Net revenue formulas of every scenario, with the slopes taken from the dataset.
pub struct Formulas<'a>(pub &'a Dataset);

impl Display for Formulas<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Revenue Calculation Formulas")?;
        write!(f, "Net Revenue = (slope / 4) × Risk + intercept")?;
        for scenario in self.0.scenarios() {
            writeln!(f)?;
            writeln!(f)?;
            writeln!(f, "{} formulas:", scenario.kind().label())?;
            write!(f, "{}", build_formulas_table(scenario))?;
        }
        Ok(())
    }
}
