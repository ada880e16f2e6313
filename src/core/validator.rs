// Caller-side input validation
//
// The container trusts whatever reaches it. Everything here runs at the
// prompt boundary, before a value is handed over.

use crate::error::{PtableError, Result};
use crate::store::models::MAX_ATOMIC_NUMBER;

/// Handles validation of raw prompt input
pub struct Validator;

impl Validator {
    /// Check that an atomic number lies inside the periodic-table range.
    ///
    /// Only the Add path calls this; Search and Delete accept any
    /// numeric key and report not-found instead.
    pub fn validate_atomic_number(atomic_number: u32) -> Result<u32> {
        if atomic_number == 0 || atomic_number > MAX_ATOMIC_NUMBER {
            return Err(PtableError::AtomicNumberOutOfRange(atomic_number));
        }
        Ok(atomic_number)
    }

    /// Parse and range-check an atomic number for the Add prompt.
    pub fn parse_atomic_number(input: &str) -> Result<u32> {
        Self::validate_atomic_number(Self::parse_key(input)?)
    }

    /// Parse an atomic number for the Search and Delete prompts.
    pub fn parse_key(input: &str) -> Result<u32> {
        input.trim().parse::<u32>().map_err(|_| {
            PtableError::InvalidInput("Enter a valid atomic number".to_string())
        })
    }

    /// Parse an atomic mass for the Add prompt.
    pub fn parse_mass(input: &str) -> Result<f64> {
        input.trim().parse::<f64>().map_err(|_| {
            PtableError::InvalidInput("Enter a valid atomic mass".to_string())
        })
    }
}
