use std::error;
use std::fmt::{self, Display, Formatter};

/// Error type for the veritable crate
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The postfix form could not be evaluated with a stack discipline
    MalformedExpression(String),
    /// Unknown variable during evaluation
    NameError(String),
}

impl Display for Error {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::MalformedExpression(ref message) => {
                write!(fmt, "MalformedExpression: {}", message)
            }
            Self::NameError(ref message) => write!(fmt, "NameError: {}", message),
        }
    }
}

impl error::Error for Error {}
