//! Domain error model.

use serde::Serialize;
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// A single field-level validation failure.
///
/// `path` names the offending field; the root path (empty string) is used for
/// body-level failures such as a non-object request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub path: String,
    pub message: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Domain-level error.
///
/// Exactly one of these kinds classifies every failed operation. Keep this
/// focused on deterministic domain failures; storage detail never lands here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input failed schema validation (one entry per violated field).
    #[error("validation failed")]
    Validation(Vec<Violation>),

    /// An identifier was invalid (not a positive integer).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The requested record is absent (never created, or deleted).
    #[error("not found")]
    NotFound,

    /// Unclassified failure; detail is logged at the boundary, never surfaced.
    #[error("internal failure: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn validation(violations: Vec<Violation>) -> Self {
        Self::Validation(violations)
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
