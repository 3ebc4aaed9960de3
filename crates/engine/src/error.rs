//! The module contains the errors the engine can throw and the registry of
//! stable error codes they resolve to.
//!
//! - [`Validation`] thrown when a request field breaks a validation rule.
//! - [`NotFound`] thrown when the requested wallet does not exist.
//! - [`ConstraintViolation`] thrown when a disallowed value reaches storage.
//!
//!  [`Validation`]: EngineError::Validation
//!  [`NotFound`]: EngineError::NotFound
//!  [`ConstraintViolation`]: EngineError::ConstraintViolation
use std::fmt;

use sea_orm::DbErr;
use thiserror::Error;

/// Stable identifiers for every failure the engine reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A request field failed validation.
    W001,
    /// The wallet does not exist.
    W003,
    /// Unexpected database or runtime failure.
    TEA001,
    /// A value the storage layer refuses to handle.
    TEA003,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 4] = [Self::W001, Self::W003, Self::TEA001, Self::TEA003];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::W001 => "W001",
            Self::W003 => "W003",
            Self::TEA001 => "TEA001",
            Self::TEA003 => "TEA003",
        }
    }

    /// Fixed, user-facing message tied to the code.
    pub fn business_message(self) -> &'static str {
        match self {
            Self::W001 => "Wallet request is invalid",
            Self::W003 => "Wallet with that id doesn't exist",
            Self::TEA001 => "Unexpected internal error",
            Self::TEA003 => "Operation rejected by the datastore constraints",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field that failed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every field error found in one request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(value: FieldError) -> Self {
        Self {
            errors: vec![value],
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("{msg}: {0}", msg = ErrorCode::W001.business_message())]
    Validation(ValidationErrors),
    /// The message is always the business message of the code.
    #[error("{}", .0.business_message())]
    NotFound(ErrorCode, i64),
    #[error("{msg}: {0}", msg = ErrorCode::TEA003.business_message())]
    ConstraintViolation(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl EngineError {
    pub fn wallet_not_found(id: i64) -> Self {
        Self::NotFound(ErrorCode::W003, id)
    }

    /// Resolve the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(_) => ErrorCode::W001,
            Self::NotFound(code, _) => *code,
            Self::ConstraintViolation(_) => ErrorCode::TEA003,
            Self::Database(_) => ErrorCode::TEA001,
        }
    }
}

impl From<FieldError> for EngineError {
    fn from(value: FieldError) -> Self {
        Self::Validation(value.into())
    }
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Validation(a), Self::Validation(b)) => a == b,
            (Self::NotFound(a, x), Self::NotFound(b, y)) => a == b && x == y,
            (Self::ConstraintViolation(a), Self::ConstraintViolation(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
