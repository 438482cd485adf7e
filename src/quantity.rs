pub mod pesos;
pub mod percentage;

pub use self::{percentage::Percentage, pesos::Pesos};
