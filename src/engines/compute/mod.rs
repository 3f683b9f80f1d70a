//! Compute primitives for nucleotide sequence analysis
//!
//! This module provides the byte-level implementations behind the
//! sequence API: symbol counting, complements, GC content, codon
//! translation and protein discovery in translated frames.

pub mod string_ops;
pub mod translation;
pub mod orf;

/// Compute operation result type
pub type ComputeResult<T> = Result<T, ComputeError>;

/// Error types for compute operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComputeError {
    #[error("Invalid input data: {0}")]
    InvalidInput(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown codon: {0}")]
    UnknownCodon(String),
}
