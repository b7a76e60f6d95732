use std::fmt;
use std::fmt::Formatter;

/// Raised when the raw forecast does not cover the index range being cleaned
#[derive(Debug, Clone, PartialEq)]
pub struct CleanError(pub String);

impl fmt::Display for CleanError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "CleanError: {}", self.0)
    }
}
