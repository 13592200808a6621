//! Error type for the convenience API.

use std::error::Error;
use std::fmt::{Display, Formatter};

use meishiki_time::TimeError;

/// Errors from building a reading out of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MeishikiError {
    /// The parsed values do not form a valid birth moment.
    Time(TimeError),
    /// Textual input did not match the expected format.
    Parse {
        field: &'static str,
        input: String,
        expected: &'static str,
    },
}

impl Display for MeishikiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "{e}"),
            Self::Parse {
                field,
                input,
                expected,
            } => write!(f, "cannot parse {field} '{input}': expected {expected}"),
        }
    }
}

impl Error for MeishikiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::Parse { .. } => None,
        }
    }
}

impl From<TimeError> for MeishikiError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
