//! Feature gate: does email-domain discovery apply to this tenant at all?

use std::sync::Arc;

use od_model::{DiscoveryConfig, TenantDomain};
use od_spi::{
    DiscoveryConfigError, DiscoveryConfigStore, OrganizationDirectory, OrganizationLookupError,
};
use thiserror::Error;

/// Decides whether email-domain validation applies to a tenant.
///
/// Failures here never block a login: a tenant without discovery
/// configuration and any directory or store outage both disable the gate.
/// That trades strictness for availability, deliberately.
#[derive(Clone)]
pub struct DiscoveryFeatureGate {
    directory: Arc<dyn OrganizationDirectory>,
    config_store: Arc<dyn DiscoveryConfigStore>,
}

impl DiscoveryFeatureGate {
    /// Creates a gate over the given collaborators.
    #[must_use]
    pub fn new(
        directory: Arc<dyn OrganizationDirectory>,
        config_store: Arc<dyn DiscoveryConfigStore>,
    ) -> Self {
        Self {
            directory,
            config_store,
        }
    }

    /// Whether email-domain discovery is enabled for the tenant's
    /// organization.
    ///
    /// Primary organizations are never applicable: email domains cannot be
    /// mapped to them.
    pub async fn is_email_domain_discovery_enabled(&self, tenant: &TenantDomain) -> bool {
        match self.check(tenant).await {
            Ok(enabled) => enabled,
            Err(GateError::NotConfigured) => {
                tracing::debug!(%tenant, "no organization discovery configuration found");
                false
            }
            Err(err) => {
                tracing::error!(
                    %tenant,
                    error = %err,
                    "error while retrieving organization discovery configuration"
                );
                false
            }
        }
    }

    async fn check(&self, tenant: &TenantDomain) -> Result<bool, GateError> {
        let org = self.directory.resolve_organization_id(tenant).await?;
        if self.directory.is_primary_organization(&org).await? {
            // Email domains cannot be mapped to primary organizations.
            return Ok(false);
        }
        let primary = self.directory.get_primary_organization_id(&org).await?;
        let primary_tenant = self.directory.resolve_tenant_domain(&primary).await?;
        let properties = self
            .config_store
            .get_discovery_configuration(&primary_tenant)
            .await?;
        Ok(DiscoveryConfig::from_properties(&properties).email_domain_enabled)
    }
}

/// Internal funnel for the gate's collaborator failures.
#[derive(Debug, Error)]
enum GateError {
    #[error("no discovery configuration found")]
    NotConfigured,

    #[error(transparent)]
    Directory(#[from] OrganizationLookupError),

    #[error("discovery configuration store failure: {0}")]
    Store(String),
}

impl From<DiscoveryConfigError> for GateError {
    fn from(err: DiscoveryConfigError) -> Self {
        match err {
            DiscoveryConfigError::NotConfigured => Self::NotConfigured,
            DiscoveryConfigError::Store(msg) => Self::Store(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use od_model::{ConfigProperty, OrgId, EMAIL_DOMAIN_ENABLE_KEY};
    use od_spi::OrganizationLookupResult;

    use super::*;

    /// Directory with one tenant mapped to one organization.
    struct SingleOrgDirectory {
        tenant: TenantDomain,
        org: OrgId,
        primary: bool,
        primary_org: OrgId,
        primary_tenant: TenantDomain,
    }

    impl SingleOrgDirectory {
        fn sub_org(tenant: &str, primary_tenant: &str) -> Self {
            Self {
                tenant: TenantDomain::new(tenant),
                org: OrgId::new(),
                primary: false,
                primary_org: OrgId::new(),
                primary_tenant: TenantDomain::new(primary_tenant),
            }
        }

        fn primary_org(tenant: &str) -> Self {
            let org = OrgId::new();
            Self {
                tenant: TenantDomain::new(tenant),
                org,
                primary: true,
                primary_org: org,
                primary_tenant: TenantDomain::new(tenant),
            }
        }
    }

    #[async_trait]
    impl OrganizationDirectory for SingleOrgDirectory {
        async fn resolve_organization_id(
            &self,
            tenant: &TenantDomain,
        ) -> OrganizationLookupResult<OrgId> {
            if *tenant == self.tenant {
                Ok(self.org)
            } else {
                Err(OrganizationLookupError::not_found(tenant.as_str()))
            }
        }

        async fn is_primary_organization(&self, _org: &OrgId) -> OrganizationLookupResult<bool> {
            Ok(self.primary)
        }

        async fn get_primary_organization_id(
            &self,
            _org: &OrgId,
        ) -> OrganizationLookupResult<OrgId> {
            Ok(self.primary_org)
        }

        async fn resolve_tenant_domain(
            &self,
            _org: &OrgId,
        ) -> OrganizationLookupResult<TenantDomain> {
            Ok(self.primary_tenant.clone())
        }
    }

    /// Directory that fails every call.
    struct BrokenDirectory;

    #[async_trait]
    impl OrganizationDirectory for BrokenDirectory {
        async fn resolve_organization_id(
            &self,
            _tenant: &TenantDomain,
        ) -> OrganizationLookupResult<OrgId> {
            Err(OrganizationLookupError::backend("directory unreachable"))
        }

        async fn is_primary_organization(&self, _org: &OrgId) -> OrganizationLookupResult<bool> {
            Err(OrganizationLookupError::backend("directory unreachable"))
        }

        async fn get_primary_organization_id(
            &self,
            _org: &OrgId,
        ) -> OrganizationLookupResult<OrgId> {
            Err(OrganizationLookupError::backend("directory unreachable"))
        }

        async fn resolve_tenant_domain(
            &self,
            _org: &OrgId,
        ) -> OrganizationLookupResult<TenantDomain> {
            Err(OrganizationLookupError::backend("directory unreachable"))
        }
    }

    /// Config store serving fixed properties per tenant.
    struct FixedConfigStore {
        configs: HashMap<TenantDomain, Vec<ConfigProperty>>,
    }

    impl FixedConfigStore {
        fn with_enabled(tenant: &str, enabled: bool) -> Self {
            let mut configs = HashMap::new();
            configs.insert(
                TenantDomain::new(tenant),
                vec![ConfigProperty::new(EMAIL_DOMAIN_ENABLE_KEY, enabled.to_string())],
            );
            Self { configs }
        }

        fn empty() -> Self {
            Self {
                configs: HashMap::new(),
            }
        }
    }

    #[async_trait]
    impl DiscoveryConfigStore for FixedConfigStore {
        async fn get_discovery_configuration(
            &self,
            tenant: &TenantDomain,
        ) -> Result<Vec<ConfigProperty>, DiscoveryConfigError> {
            self.configs
                .get(tenant)
                .cloned()
                .ok_or(DiscoveryConfigError::NotConfigured)
        }
    }

    /// Config store that fails every call.
    struct BrokenConfigStore;

    #[async_trait]
    impl DiscoveryConfigStore for BrokenConfigStore {
        async fn get_discovery_configuration(
            &self,
            _tenant: &TenantDomain,
        ) -> Result<Vec<ConfigProperty>, DiscoveryConfigError> {
            Err(DiscoveryConfigError::store("connection refused"))
        }
    }

    #[tokio::test]
    async fn enabled_for_sub_org_with_enabled_config() {
        let gate = DiscoveryFeatureGate::new(
            Arc::new(SingleOrgDirectory::sub_org("sub.example", "root.example")),
            Arc::new(FixedConfigStore::with_enabled("root.example", true)),
        );

        assert!(
            gate.is_email_domain_discovery_enabled(&TenantDomain::new("sub.example"))
                .await
        );
    }

    #[tokio::test]
    async fn disabled_when_config_says_so() {
        let gate = DiscoveryFeatureGate::new(
            Arc::new(SingleOrgDirectory::sub_org("sub.example", "root.example")),
            Arc::new(FixedConfigStore::with_enabled("root.example", false)),
        );

        assert!(
            !gate
                .is_email_domain_discovery_enabled(&TenantDomain::new("sub.example"))
                .await
        );
    }

    #[tokio::test]
    async fn primary_organizations_are_never_applicable() {
        // Even with an enabled config, a primary organization skips the gate.
        let gate = DiscoveryFeatureGate::new(
            Arc::new(SingleOrgDirectory::primary_org("root.example")),
            Arc::new(FixedConfigStore::with_enabled("root.example", true)),
        );

        assert!(
            !gate
                .is_email_domain_discovery_enabled(&TenantDomain::new("root.example"))
                .await
        );
    }

    #[tokio::test]
    async fn missing_configuration_is_benign_and_disabled() {
        let gate = DiscoveryFeatureGate::new(
            Arc::new(SingleOrgDirectory::sub_org("sub.example", "root.example")),
            Arc::new(FixedConfigStore::empty()),
        );

        assert!(
            !gate
                .is_email_domain_discovery_enabled(&TenantDomain::new("sub.example"))
                .await
        );
    }

    #[tokio::test]
    async fn store_outage_disables_the_gate() {
        let gate = DiscoveryFeatureGate::new(
            Arc::new(SingleOrgDirectory::sub_org("sub.example", "root.example")),
            Arc::new(BrokenConfigStore),
        );

        assert!(
            !gate
                .is_email_domain_discovery_enabled(&TenantDomain::new("sub.example"))
                .await
        );
    }

    #[tokio::test]
    async fn directory_outage_disables_the_gate() {
        let gate = DiscoveryFeatureGate::new(
            Arc::new(BrokenDirectory),
            Arc::new(FixedConfigStore::with_enabled("root.example", true)),
        );

        assert!(
            !gate
                .is_email_domain_discovery_enabled(&TenantDomain::new("sub.example"))
                .await
        );
    }
}
