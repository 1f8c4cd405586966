//! Authentication context handed to post-authentication handlers.
//!
//! The pipeline owns this data; handlers only ever read it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::claims::{ClaimMapping, ClaimSource};
use crate::id::TenantDomain;

/// The authenticator that completed an authentication step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepAuthenticator {
    /// A local authenticator; not subject to email-domain validation.
    Local,
    /// A federated authenticator backed by an external identity provider.
    Federated {
        /// Standard claim dialect URI advertised by the authenticator, if any.
        claim_dialect_uri: Option<String>,
    },
}

impl StepAuthenticator {
    /// Whether this authenticator is federated.
    #[must_use]
    pub const fn is_federated(&self) -> bool {
        matches!(self, Self::Federated { .. })
    }

    /// Advertised claim dialect URI, for federated authenticators.
    #[must_use]
    pub fn claim_dialect_uri(&self) -> Option<&str> {
        match self {
            Self::Local => None,
            Self::Federated { claim_dialect_uri } => claim_dialect_uri.as_deref(),
        }
    }
}

/// One completed step of the authentication sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepConfig {
    /// The authenticator that completed this step, if any.
    pub authenticator: Option<StepAuthenticator>,
    /// Whether this step's attributes become the session subject's attributes.
    pub subject_attribute_step: bool,
    /// Raw attributes collected from the IdP: remote claim URI to value.
    pub user_attributes: HashMap<String, String>,
}

impl StepConfig {
    /// Creates a step completed by a federated authenticator.
    #[must_use]
    pub fn federated(claim_dialect_uri: Option<String>) -> Self {
        Self {
            authenticator: Some(StepAuthenticator::Federated { claim_dialect_uri }),
            subject_attribute_step: false,
            user_attributes: HashMap::new(),
        }
    }

    /// Creates a step completed by a local authenticator.
    #[must_use]
    pub fn local() -> Self {
        Self {
            authenticator: Some(StepAuthenticator::Local),
            subject_attribute_step: false,
            user_attributes: HashMap::new(),
        }
    }

    /// Marks this step as the subject-attribute step.
    #[must_use]
    pub fn as_subject_attribute_step(mut self) -> Self {
        self.subject_attribute_step = true;
        self
    }

    /// Adds a raw attribute collected from the IdP.
    #[must_use]
    pub fn with_attribute(mut self, remote_claim_uri: impl Into<String>, value: impl Into<String>) -> Self {
        self.user_attributes.insert(remote_claim_uri.into(), value.into());
        self
    }
}

/// Per-IdP claim mapping configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalIdpConfig {
    /// Whether the IdP declares use of the platform's default claim dialect.
    pub use_default_dialect: bool,
    /// Explicitly configured remote-to-local claim mappings.
    pub claim_mappings: Vec<ClaimMapping>,
}

impl ExternalIdpConfig {
    /// Resolves how the claims of the given step should be translated.
    ///
    /// The default dialect applies only when the IdP opts into it and the
    /// authenticator advertises a non-blank dialect URI; in every other case
    /// the configured custom mappings are used.
    #[must_use]
    pub fn claim_source(&self, authenticator: &StepAuthenticator) -> ClaimSource {
        if self.use_default_dialect {
            if let Some(uri) = authenticator.claim_dialect_uri() {
                if !uri.trim().is_empty() {
                    return ClaimSource::DefaultDialect {
                        dialect_uri: uri.to_string(),
                    };
                }
            }
        }
        ClaimSource::CustomMappings {
            mappings: self.claim_mappings.clone(),
        }
    }
}

/// Read-only view of a finished authentication attempt.
#[derive(Debug, Clone)]
pub struct AuthenticationContext {
    /// Tenant domain the attempt ran under.
    pub tenant_domain: TenantDomain,
    /// Completed steps, in sequence order.
    pub steps: Vec<StepConfig>,
    /// External identity provider configuration for the attempt.
    pub external_idp: ExternalIdpConfig,
    /// Unfiltered local claim values computed upstream for the
    /// subject-attribute step (local claim URI to value).
    pub unfiltered_local_claims: HashMap<String, String>,
}

impl AuthenticationContext {
    /// Creates a context for the given tenant with no completed steps.
    #[must_use]
    pub fn new(tenant_domain: TenantDomain) -> Self {
        Self {
            tenant_domain,
            steps: Vec::new(),
            external_idp: ExternalIdpConfig::default(),
            unfiltered_local_claims: HashMap::new(),
        }
    }

    /// Appends a completed step.
    #[must_use]
    pub fn with_step(mut self, step: StepConfig) -> Self {
        self.steps.push(step);
        self
    }

    /// Sets the external IdP configuration.
    #[must_use]
    pub fn with_external_idp(mut self, external_idp: ExternalIdpConfig) -> Self {
        self.external_idp = external_idp;
        self
    }

    /// Sets an upstream-computed unfiltered local claim value.
    #[must_use]
    pub fn with_local_claim(mut self, claim_uri: impl Into<String>, value: impl Into<String>) -> Self {
        self.unfiltered_local_claims.insert(claim_uri.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dialect_requires_opt_in_and_dialect_uri() {
        let idp = ExternalIdpConfig {
            use_default_dialect: true,
            claim_mappings: vec![],
        };
        let authenticator = StepAuthenticator::Federated {
            claim_dialect_uri: Some("http://dialect.example/oidc".to_string()),
        };

        assert_eq!(
            idp.claim_source(&authenticator),
            ClaimSource::DefaultDialect {
                dialect_uri: "http://dialect.example/oidc".to_string()
            }
        );
    }

    #[test]
    fn blank_dialect_uri_falls_back_to_custom_mappings() {
        let mapping = ClaimMapping::new("urn:local:claim:emailAddress", "email");
        let idp = ExternalIdpConfig {
            use_default_dialect: true,
            claim_mappings: vec![mapping.clone()],
        };
        let authenticator = StepAuthenticator::Federated {
            claim_dialect_uri: Some("   ".to_string()),
        };

        assert_eq!(
            idp.claim_source(&authenticator),
            ClaimSource::CustomMappings {
                mappings: vec![mapping]
            }
        );
    }

    #[test]
    fn dialect_opt_out_uses_custom_mappings() {
        let idp = ExternalIdpConfig {
            use_default_dialect: false,
            claim_mappings: vec![],
        };
        let authenticator = StepAuthenticator::Federated {
            claim_dialect_uri: Some("http://dialect.example/oidc".to_string()),
        };

        assert!(matches!(
            idp.claim_source(&authenticator),
            ClaimSource::CustomMappings { .. }
        ));
    }

    #[test]
    fn local_authenticator_has_no_dialect() {
        assert!(StepAuthenticator::Local.claim_dialect_uri().is_none());
        assert!(!StepAuthenticator::Local.is_federated());
    }
}
