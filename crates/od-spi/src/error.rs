//! Error taxonomy for the collaborator contracts.
//!
//! Each collaborator has its own error type so the validation core can
//! distinguish benign absence (no discovery configuration at all) from
//! infrastructure failure, which drive different decisions.

use od_model::TenantDomain;
use thiserror::Error;

/// Errors from the organization directory.
#[derive(Debug, Clone, Error)]
pub enum OrganizationLookupError {
    /// No organization is associated with the given tenant or ID.
    #[error("organization not found: {0}")]
    NotFound(String),

    /// The directory backend failed.
    #[error("organization directory failure: {0}")]
    Backend(String),
}

impl OrganizationLookupError {
    /// Creates a not-found error.
    #[must_use]
    pub fn not_found(subject: impl Into<String>) -> Self {
        Self::NotFound(subject.into())
    }

    /// Creates a backend failure error.
    #[must_use]
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// Result alias for organization directory operations.
pub type OrganizationLookupResult<T> = Result<T, OrganizationLookupError>;

/// Errors from the discovery configuration store.
#[derive(Debug, Clone, Error)]
pub enum DiscoveryConfigError {
    /// The organization has no discovery configuration at all.
    ///
    /// Benign: callers treat the feature as disabled, without surfacing an
    /// error.
    #[error("no discovery configuration found")]
    NotConfigured,

    /// The configuration store failed.
    #[error("discovery configuration store failure: {0}")]
    Store(String),
}

impl DiscoveryConfigError {
    /// Creates a store failure error.
    #[must_use]
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// Whether this is the benign "not configured" case.
    #[must_use]
    pub const fn is_not_configured(&self) -> bool {
        matches!(self, Self::NotConfigured)
    }
}

/// Error from the discovery attribute store.
#[derive(Debug, Clone, Error)]
#[error("discovery attribute lookup failed for tenant {tenant}: {message}")]
pub struct AttributeLookupError {
    /// Tenant the lookup ran under.
    pub tenant: TenantDomain,
    /// Backend failure description.
    pub message: String,
}

impl AttributeLookupError {
    /// Creates an attribute lookup error.
    #[must_use]
    pub fn new(tenant: TenantDomain, message: impl Into<String>) -> Self {
        Self {
            tenant,
            message: message.into(),
        }
    }
}

/// Error from the claim dialect mapper.
#[derive(Debug, Clone, Error)]
#[error("claim dialect mapping failed for dialect {dialect_uri}: {message}")]
pub struct ClaimMappingError {
    /// Source dialect URI the mapping was requested for.
    pub dialect_uri: String,
    /// Failure description.
    pub message: String,
}

impl ClaimMappingError {
    /// Creates a claim mapping error.
    #[must_use]
    pub fn new(dialect_uri: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            dialect_uri: dialect_uri.into(),
            message: message.into(),
        }
    }
}
