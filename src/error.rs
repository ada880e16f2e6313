/// Error types for ptable
///
/// This module defines all possible errors that can occur in the application.
/// Uses thiserror for ergonomic error handling.

use crate::store::models::MAX_ATOMIC_NUMBER;
use thiserror::Error;

/// Main error type for ptable operations
#[derive(Error, Debug)]
pub enum PtableError {
    /// The slot arena could not grow to hold another record
    #[error("Memory allocation failed")]
    AllocationFailed,

    /// No element with the requested atomic number exists
    #[error("Element with atomic number {0} not found")]
    NotFound(u32),

    /// Atomic number outside the periodic-table range at the insertion
    /// entry point
    #[error("Atomic number {0} is out of range (1-118)")]
    AtomicNumberOutOfRange(u32),

    /// Input that could not be parsed
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for ptable operations
pub type Result<T> = std::result::Result<T, PtableError>;

/// Convert PtableError to a user-friendly error message
impl PtableError {
    pub fn user_message(&self) -> String {
        match self {
            PtableError::AllocationFailed => "Memory allocation failed.".to_string(),
            PtableError::NotFound(n) => {
                format!("Element with atomic number {} not found.", n)
            }
            PtableError::AtomicNumberOutOfRange(_) => {
                format!(
                    "Invalid input. Enter a valid atomic number between 1 and {}.",
                    MAX_ATOMIC_NUMBER
                )
            }
            PtableError::InvalidInput(expected) => {
                format!("Invalid input. {}.", expected)
            }
        }
    }
}
