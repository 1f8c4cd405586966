//! Discovery configuration and attribute store contracts.

use async_trait::async_trait;
use od_model::{ConfigProperty, DiscoveryAttribute, TenantDomain};

use crate::error::{AttributeLookupError, DiscoveryConfigError};

/// Per-tenant discovery configuration store.
#[async_trait]
pub trait DiscoveryConfigStore: Send + Sync {
    /// Returns the ordered discovery configuration properties for a tenant.
    ///
    /// # Errors
    ///
    /// `DiscoveryConfigError::NotConfigured` when the tenant has no discovery
    /// configuration at all; `DiscoveryConfigError::Store` on backend
    /// failure.
    async fn get_discovery_configuration(
        &self,
        tenant: &TenantDomain,
    ) -> Result<Vec<ConfigProperty>, DiscoveryConfigError>;
}

/// Per-organization discovery attribute store.
#[async_trait]
pub trait DiscoveryAttributeStore: Send + Sync {
    /// Returns the discovery attributes declared by the organization that
    /// owns the tenant.
    ///
    /// `include_sub_orgs` extends the fetch to descendant organizations;
    /// email-domain validation always passes `false` so only the
    /// organization's own attributes are consulted.
    ///
    /// # Errors
    ///
    /// Fails when the attribute store is unreachable.
    async fn get_discovery_attributes(
        &self,
        tenant: &TenantDomain,
        include_sub_orgs: bool,
    ) -> Result<Vec<DiscoveryAttribute>, AttributeLookupError>;
}
