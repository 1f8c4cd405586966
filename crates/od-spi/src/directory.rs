//! Organization directory contract.

use async_trait::async_trait;
use od_model::{OrgId, TenantDomain};

use crate::error::OrganizationLookupResult;

/// Resolves organizations and their tenant bindings.
///
/// A *primary* organization is one with no parent; sub-organizations always
/// have a primary ancestor.
#[async_trait]
pub trait OrganizationDirectory: Send + Sync {
    /// Resolves the organization that owns a tenant domain.
    ///
    /// # Errors
    ///
    /// Fails when the tenant has no organization or the directory is
    /// unreachable.
    async fn resolve_organization_id(&self, tenant: &TenantDomain)
        -> OrganizationLookupResult<OrgId>;

    /// Whether the organization is a primary organization.
    ///
    /// # Errors
    ///
    /// Fails when the organization is unknown or the directory is
    /// unreachable.
    async fn is_primary_organization(&self, org: &OrgId) -> OrganizationLookupResult<bool>;

    /// Resolves the primary ancestor of a sub-organization.
    ///
    /// # Errors
    ///
    /// Fails when the organization is unknown or the directory is
    /// unreachable.
    async fn get_primary_organization_id(&self, org: &OrgId) -> OrganizationLookupResult<OrgId>;

    /// Resolves the tenant domain owned by an organization.
    ///
    /// # Errors
    ///
    /// Fails when the organization is unknown or the directory is
    /// unreachable.
    async fn resolve_tenant_domain(&self, org: &OrgId) -> OrganizationLookupResult<TenantDomain>;
}
