//! Claim model: canonical claim constants, normalized claim maps, and the
//! per-step claim-source resolution.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Canonical local claim URI carrying the user's email address.
pub const EMAIL_ADDRESS_CLAIM: &str = "urn:local:claim:emailAddress";

/// A configured mapping between a remote IdP claim and a local claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimMapping {
    /// Local (canonical) claim URI.
    pub local_claim_uri: String,
    /// Remote claim URI as sent by the identity provider.
    pub remote_claim_uri: String,
}

impl ClaimMapping {
    /// Creates a mapping from a remote claim URI to a local claim URI.
    #[must_use]
    pub fn new(local_claim_uri: impl Into<String>, remote_claim_uri: impl Into<String>) -> Self {
        Self {
            local_claim_uri: local_claim_uri.into(),
            remote_claim_uri: remote_claim_uri.into(),
        }
    }
}

/// How the claims of a federated step are translated to the local dialect.
///
/// Resolved once per step: either the platform's default dialect handling
/// applies (the identity provider opted in and the authenticator advertises
/// a dialect URI), or the provider's explicitly configured mappings are used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimSource {
    /// Ask the claim-dialect mapper to translate from the given dialect.
    DefaultDialect {
        /// Source dialect URI advertised by the authenticator.
        dialect_uri: String,
    },
    /// Use the identity provider's configured remote-to-local mappings.
    CustomMappings {
        /// Configured claim mappings.
        mappings: Vec<ClaimMapping>,
    },
}

/// Normalized mapping of canonical local claim URIs to values.
///
/// Built fresh per validation call; keys are unique and order is irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedClaims(HashMap<String, String>);

impl NormalizedClaims {
    /// Creates an empty claim map.
    #[must_use]
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Inserts a claim value, replacing any previous value for the URI.
    pub fn insert(&mut self, claim_uri: impl Into<String>, value: impl Into<String>) {
        self.0.insert(claim_uri.into(), value.into());
    }

    /// Gets a claim value by local claim URI.
    #[must_use]
    pub fn get(&self, claim_uri: &str) -> Option<&str> {
        self.0.get(claim_uri).map(String::as_str)
    }

    /// Gets the canonical email address claim value, if present.
    #[must_use]
    pub fn email_address(&self) -> Option<&str> {
        self.get(EMAIL_ADDRESS_CLAIM)
    }

    /// Number of claims in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map holds no claims.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, String>> for NormalizedClaims {
    fn from(claims: HashMap<String, String>) -> Self {
        Self(claims)
    }
}

impl FromIterator<(String, String)> for NormalizedClaims {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_address_accessor_reads_canonical_claim() {
        let mut claims = NormalizedClaims::new();
        assert!(claims.email_address().is_none());

        claims.insert(EMAIL_ADDRESS_CLAIM, "user@example.com");
        assert_eq!(claims.email_address(), Some("user@example.com"));
    }

    #[test]
    fn insert_replaces_previous_value() {
        let mut claims = NormalizedClaims::new();
        claims.insert("urn:local:claim:givenName", "Jane");
        claims.insert("urn:local:claim:givenName", "Joan");

        assert_eq!(claims.len(), 1);
        assert_eq!(claims.get("urn:local:claim:givenName"), Some("Joan"));
    }
}
