//! Equation-of-state errors.

use sw_core::SwError;
use thiserror::Error;

/// Result type for equation-of-state operations.
pub type EosResult<T> = Result<T, EosError>;

/// Errors that can occur during seawater property calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EosError {
    /// Non-physical values (negative density, pressure, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// A denominator derivative vanished; the state is outside the
    /// validity region of the formulation.
    #[error("Singular derivative {what}: state outside the formulation validity region")]
    SingularDerivative { what: &'static str },

    /// Backend (pure-water equation of state) error.
    #[error("Backend error: {message}")]
    Backend { message: String },

    /// Shared numeric error from sw-core.
    #[error(transparent)]
    Core(#[from] SwError),
}
