//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout CoreComply. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! Expected "no data" / "no match" / "partial failure" situations are never
//! errors in this workspace — they are ordinary values (`None`, empty lists,
//! logged-and-skipped adapter results). The variants here cover programming
//! contract violations and infrastructure failures only.

use thiserror::Error;

/// Top-level error type for the CoreComply core.
#[derive(Error, Debug)]
pub enum CcmpError {
    /// Input failed structural validation (unknown enum identifier,
    /// malformed interval, bad identifier shape).
    #[error("validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
