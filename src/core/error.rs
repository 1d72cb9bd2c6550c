use std::fmt;

/// Rejected user input. Recovered locally: state is left untouched and the
/// user is asked again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name was empty or only whitespace.
    EmptyName,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyName => write!(f, "name cannot be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}
