// Centralized error types for the user directory

use std::fmt;
use thiserror::Error;

/// Errors raised while loading seed records from the remote source
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Failed to send request to {endpoint}: {source}")]
    Request {
        endpoint: String,
        source: reqwest::Error,
    },

    #[error("User source returned error status: {0}")]
    Status(reqwest::StatusCode),

    #[error("Failed to parse user list: {0}")]
    Decode(#[source] reqwest::Error),
}

/// A single rule violated by one form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form field name (`name`, `username`, `email`)
    pub field: String,
    /// Rule code (`required`, `email`)
    pub rule: String,
    /// Human readable message
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(pub Vec<FieldError>);

impl FieldErrors {
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn for_field(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

/// Errors returned by the add-user flow. The working list is never mutated
/// when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddUserError {
    #[error("Invalid user: {0}")]
    Validation(FieldErrors),

    #[error("No user id left to assign")]
    IdSpaceExhausted,
}

impl AddUserError {
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AddUserError::Validation(errors) => Some(errors),
            AddUserError::IdSpaceExhausted => None,
        }
    }
}

/// Errors raised while parsing terminal input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}. Type 'help' for a list of commands")]
    Unknown(String),

    #[error("Missing argument for '{0}'")]
    MissingArgument(&'static str),

    #[error("Invalid sort key '{0}'. Must be one of: none, id, name, email, newest")]
    InvalidSortKey(String),

    #[error("Invalid page number: {0}")]
    InvalidPage(String),

    #[error("Invalid user id: {0}")]
    InvalidId(String),

    #[error("Expected: add <name> | <username> | <email>")]
    MalformedAdd,
}
