//! Organization discovery configuration and attributes.

use serde::{Deserialize, Serialize};

/// Discovery attribute type consulted by email-domain validation.
pub const EMAIL_DOMAIN_ATTRIBUTE_TYPE: &str = "emailDomain";

/// Config property key enabling email-domain discovery for an organization.
pub const EMAIL_DOMAIN_ENABLE_KEY: &str = "emailDomain.enable";

/// One declared discovery criterion for an organization.
///
/// Owned and persisted by the organization-configuration service; this core
/// only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryAttribute {
    /// Attribute type tag. Only `emailDomain` is consulted here.
    #[serde(rename = "type")]
    pub attribute_type: String,
    /// Registered values, in declaration order. `None` is non-restrictive.
    pub values: Option<Vec<String>>,
}

impl DiscoveryAttribute {
    /// Creates an attribute of an arbitrary type.
    #[must_use]
    pub fn new(attribute_type: impl Into<String>, values: Option<Vec<String>>) -> Self {
        Self {
            attribute_type: attribute_type.into(),
            values,
        }
    }

    /// Creates an `emailDomain` attribute with the given registered domains.
    #[must_use]
    pub fn email_domains(domains: Vec<String>) -> Self {
        Self::new(EMAIL_DOMAIN_ATTRIBUTE_TYPE, Some(domains))
    }

    /// Whether this attribute restricts email domains.
    #[must_use]
    pub fn is_email_domain(&self) -> bool {
        self.attribute_type == EMAIL_DOMAIN_ATTRIBUTE_TYPE
    }
}

/// Raw key/value configuration property from the discovery config store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigProperty {
    /// Property key.
    pub key: String,
    /// Property value.
    pub value: String,
}

impl ConfigProperty {
    /// Creates a configuration property.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Typed discovery configuration for an organization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Whether email-domain based discovery is enabled.
    pub email_domain_enabled: bool,
}

impl DiscoveryConfig {
    /// Builds the typed configuration from the store's raw property list.
    ///
    /// The first `emailDomain.enable` property wins. Unknown keys are
    /// ignored; a missing key or any value other than `true` (ASCII
    /// case-insensitive) disables the feature.
    #[must_use]
    pub fn from_properties(properties: &[ConfigProperty]) -> Self {
        let email_domain_enabled = properties
            .iter()
            .find(|property| property.key == EMAIL_DOMAIN_ENABLE_KEY)
            .map(|property| property.value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Self {
            email_domain_enabled,
        }
    }
}
