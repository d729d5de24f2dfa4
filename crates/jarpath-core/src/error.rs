//! Error type for locator parsing and resolution.

use thiserror::Error;

pub type LocatorResult<T> = Result<T, LocatorError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocatorError {
    /// A required input was missing or empty.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A `..` segment tried to climb above the archive root.
    #[error("cannot resolve {base} for path {path}")]
    UnresolvablePath { base: String, path: String },

    /// The string cannot be represented as a locator.
    #[error("invalid locator '{input}': {reason}")]
    InvalidLocator { input: String, reason: String },
}

impl LocatorError {
    pub(crate) fn invalid_locator(input: &str, reason: impl ToString) -> Self {
        LocatorError::InvalidLocator {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolvable_message_names_base_and_path() {
        let err = LocatorError::UnresolvablePath {
            base: "jar:file:/x.jar!/dir/map.tmx".to_string(),
            path: "../../outside".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cannot resolve jar:file:/x.jar!/dir/map.tmx for path ../../outside"
        );
    }

    #[test]
    fn invalid_locator_message() {
        let err = LocatorError::invalid_locator("jar:file:/x.jar", "missing !/ separator");
        assert_eq!(
            err.to_string(),
            "invalid locator 'jar:file:/x.jar': missing !/ separator"
        );
    }
}
