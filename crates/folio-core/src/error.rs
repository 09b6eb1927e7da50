#![forbid(unsafe_code)]

//! Error types for navigation and configuration.
//!
//! Neither kind is ever shown to a visitor. Navigation errors degrade to
//! "leave the active section alone"; configuration errors surface once, at
//! startup, to whoever embeds the page.

use thiserror::Error;

/// Failure of a single navigation or measurement step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// The requested id has no section in the document.
    #[error("no section with id `{0}` in the document")]
    MissingSection(String),

    /// The requested id is not one of the navigation bar's targets.
    #[error("`{0}` is not a navigation target")]
    NotNavigable(String),

    /// A measurement was requested before the element it depends on mounted.
    #[error("measurement unavailable: {0}")]
    MeasurementUnavailable(&'static str),
}

/// Failure to load or validate a [`TrackerConfig`](crate::TrackerConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// JSON parse or serialize error.
    #[error("JSON parse error: {0}")]
    Json(String),

    /// TOML parse error.
    #[error("TOML parse error: {0}")]
    Toml(String),

    /// One or more fields are out of range.
    #[error("validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_section_names_the_id() {
        let err = NavError::MissingSection("skills".into());
        assert_eq!(err.to_string(), "no section with id `skills` in the document");
        let err = NavError::NotNavigable("bar".into());
        assert_eq!(err.to_string(), "`bar` is not a navigation target");
    }

    #[test]
    fn validation_errors_are_joined() {
        let err = ConfigError::Validation(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "validation errors: a; b");
    }
}
