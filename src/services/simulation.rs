//! The deliberately failing operation exercised by the trigger endpoint.
//!
//! The failure is modelled as an explicit error kind rather than a panic: the
//! handler propagates it with `?` into the local error boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("attempted to divide {0} by zero")]
    DivisionByZero(i64),
}

/// Integer division that reports division by zero as an error instead of
/// panicking. Called with a zero denominator by the trigger endpoint to
/// exercise the error path deterministically.
pub fn divide(numerator: i64, denominator: i64) -> Result<i64, SimulationError> {
    if denominator == 0 {
        return Err(SimulationError::DivisionByZero(numerator));
    }
    Ok(numerator / denominator)
}
