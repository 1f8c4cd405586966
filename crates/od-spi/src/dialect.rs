//! Claim dialect mapping contract.

use std::collections::HashMap;

use async_trait::async_trait;
use od_model::TenantDomain;

use crate::error::ClaimMappingError;

/// Maps claim URIs from a foreign dialect to the local dialect.
///
/// The mapping metadata is persisted elsewhere; this core only requests
/// translations for the claim URIs a federated step actually delivered.
#[async_trait]
pub trait ClaimDialectMapper: Send + Sync {
    /// Returns a local-to-remote claim URI mapping for the given remote
    /// claim URIs under the source dialect, scoped to the tenant.
    ///
    /// `use_default` falls back to the platform's default dialect mappings
    /// when the tenant carries no overrides.
    ///
    /// # Errors
    ///
    /// Fails when the mapping metadata cannot be resolved. Callers must not
    /// degrade to a partial mapping on failure.
    async fn map_to_local_dialect(
        &self,
        source_dialect_uri: &str,
        remote_claim_uris: &[String],
        tenant: &TenantDomain,
        use_default: bool,
    ) -> Result<HashMap<String, String>, ClaimMappingError>;
}
