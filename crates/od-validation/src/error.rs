//! Validation error types.

use od_spi::ClaimMappingError;
use thiserror::Error;

/// Stable code for claim-mapping failures surfaced to the pipeline.
pub const CODE_CLAIM_MAPPING: &str = "ODV-65002";

/// Errors that abort a validation call outright.
///
/// Unlike a rejection decision, these indicate the core could not reach a
/// trustworthy decision at all.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Claim dialect mapping failed; derived claims cannot be trusted.
    #[error(transparent)]
    ClaimMapping(#[from] ClaimMappingError),
}

impl ValidationError {
    /// Stable code identifying the failure class.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ClaimMapping(_) => CODE_CLAIM_MAPPING,
        }
    }
}

/// Result alias for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;
