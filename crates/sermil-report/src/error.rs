use std::error::Error;
use std::fmt;

/// Failures raised while grouping and normalizing the merged records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AggregateError {
    /// No record resolved to a region, so there is nothing to normalize.
    EmptyInput,
    /// A `DISPENSA` value other than "Com dispensa" / "Sem dispensa".
    UnexpectedFlag(String),
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AggregateError::EmptyInput => write!(f, "No records with a known region to aggregate"),
            AggregateError::UnexpectedFlag(value) => {
                write!(f, "Unexpected exemption value '{}'", value)
            }
        }
    }
}

impl Error for AggregateError {}
