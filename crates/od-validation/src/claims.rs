//! Claim resolution for federated authentication steps.

use std::collections::HashMap;
use std::sync::Arc;

use od_model::{AuthenticationContext, ClaimSource, NormalizedClaims, StepConfig};
use od_spi::{ClaimDialectMapper, ClaimMappingError};

/// Produces the normalized local-claim map for a completed federated step.
#[derive(Clone)]
pub struct ClaimResolver {
    dialect_mapper: Arc<dyn ClaimDialectMapper>,
}

impl ClaimResolver {
    /// Creates a resolver over the given dialect mapper.
    #[must_use]
    pub fn new(dialect_mapper: Arc<dyn ClaimDialectMapper>) -> Self {
        Self { dialect_mapper }
    }

    /// Resolves the local claim values for one completed step.
    ///
    /// The subject-attribute step is already normalized upstream, so its
    /// pre-computed unfiltered local claim map is returned as-is. Any other
    /// step is mapped explicitly, since just-in-time provisioning can
    /// consume attributes from every completed step, not only the subject
    /// step.
    ///
    /// # Errors
    ///
    /// Fails when the dialect mapper cannot translate the step's claims.
    /// Resolution is all-or-nothing: a mapping failure never degrades into a
    /// partial claim map, because a silently dropped claim could let an
    /// unverified email through.
    pub async fn resolve(
        &self,
        ctx: &AuthenticationContext,
        step: &StepConfig,
    ) -> Result<NormalizedClaims, ClaimMappingError> {
        if step.subject_attribute_step {
            return Ok(ctx.unfiltered_local_claims.clone().into());
        }

        let Some(authenticator) = &step.authenticator else {
            return Ok(NormalizedClaims::new());
        };

        let raw = &step.user_attributes;
        let claim_mapping: HashMap<String, String> =
            match ctx.external_idp.claim_source(authenticator) {
                ClaimSource::DefaultDialect { dialect_uri } => {
                    let remote_uris: Vec<String> = raw.keys().cloned().collect();
                    self.dialect_mapper
                        .map_to_local_dialect(&dialect_uri, &remote_uris, &ctx.tenant_domain, true)
                        .await?
                }
                ClaimSource::CustomMappings { mappings } => mappings
                    .iter()
                    .filter(|mapping| raw.contains_key(&mapping.remote_claim_uri))
                    .map(|mapping| {
                        (
                            mapping.local_claim_uri.clone(),
                            mapping.remote_claim_uri.clone(),
                        )
                    })
                    .collect(),
            };

        let mut local_claims = NormalizedClaims::new();
        for (local, remote) in &claim_mapping {
            if let Some(value) = raw.get(remote) {
                local_claims.insert(local.clone(), value.clone());
            }
        }
        Ok(local_claims)
    }
}
