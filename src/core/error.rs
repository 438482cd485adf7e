use thiserror::Error;

/// Failures of the formula evaluation and dataset lookups.
///
/// All of them are raised where the computation happens and are recoverable by the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid parameter: {name} must be finite, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("{operation} overflowed to a non-finite value")]
    NonFiniteResult { operation: &'static str },

    #[error("division by zero: {divisor} is zero")]
    DivisionByZero { divisor: &'static str },

    #[error("unknown scenario `{0}`, expected `raining` or `non_raining`")]
    UnknownScenario(String),

    #[error("cannot aggregate an empty set of results")]
    EmptyInput,

    #[error("location `{location}` is not defined in the {scenario} scenario")]
    UnknownLocation { scenario: &'static str, location: String },

    #[error("location `{location}` is defined twice in the {scenario} scenario")]
    DuplicateLocation { scenario: &'static str, location: String },

    #[error("the {0} scenario defines no locations")]
    EmptyScenario(&'static str),

    #[error("expected the {expected} scenario, got the {actual} one")]
    MisplacedScenario { expected: &'static str, actual: &'static str },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
