//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid lookups or malformed input.
///
/// Rendering itself never fails on data problems: dangling connections are
/// dropped and participant counts are clamped before they reach the domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown process step: {0}")]
    UnknownStep(String),

    #[error("unknown role: {0}")]
    UnknownRole(String),

    #[error("invalid event '{input}': {reason}")]
    InvalidEvent { input: String, reason: String },
}
