//! Error types.
//!
//! `AppError` is what reaches `main`: a message plus the process exit code.
//! `FitError` is the one failure the fitting stage can produce.

use thiserror::Error;

/// Exit code for invalid inputs or configuration.
pub const EXIT_INVALID_INPUT: u8 = 2;
/// Exit code for a failed least-squares fit.
pub const EXIT_FIT: u8 = 3;
/// Exit code for terminal / IO failures while rendering.
pub const EXIT_RENDER: u8 = 4;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

/// The least-squares system could not produce a unique polynomial.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    /// Fewer samples than coefficients.
    #[error("Cannot fit degree {degree}: {points} points given, at least {} required.", .degree + 1)]
    Underdetermined { degree: usize, points: usize },

    /// Enough samples, but too few distinct x-values.
    #[error("Cannot fit degree {degree}: only {distinct} distinct x-values, at least {} required.", .degree + 1)]
    RankDeficient { degree: usize, distinct: usize },

    /// The solver failed or produced non-finite coefficients.
    #[error("Least-squares system for degree {degree} is numerically singular.")]
    Singular { degree: usize },
}

impl From<FitError> for AppError {
    fn from(err: FitError) -> Self {
        AppError::new(EXIT_FIT, format!("Fit failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_error_maps_to_fit_exit_code() {
        let err: AppError = FitError::Underdetermined { degree: 5, points: 4 }.into();
        assert_eq!(err.exit_code(), EXIT_FIT);
        assert!(err.to_string().contains("at least 6 required"), "{err}");
    }
}
