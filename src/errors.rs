use thiserror::Error;

/// An error that can occur during adaptive quadrature
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QuadError {
    /// Tolerance must be a positive, finite error budget.
    #[error("Tolerance must be positive, got {0}")]
    InvalidTolerance(f64),

    /// Bounds must be finite with `lower <= upper`.
    #[error("Invalid integration bounds [{lower}, {upper}]")]
    InvalidBounds { lower: f64, upper: f64 },

    /// The integrand produced NaN or an infinite value.
    #[error("Integrand returned a non-finite value at x = {at}")]
    NonFiniteValue { at: f64 },

    /// Subdivision hit the configured depth cutoff before the local
    /// error test was satisfied.
    #[error("Maximum subdivision depth {max} exceeded")]
    DepthExceeded { max: u32 },
}
