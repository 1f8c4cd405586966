//! The accept/reject decision core.

use std::sync::Arc;

use od_model::TenantDomain;
use od_spi::DiscoveryAttributeStore;

use crate::decision::ValidationDecision;

/// Extracts the domain part of an email address.
///
/// Requires a non-blank value with exactly one `@` separating two non-empty
/// parts; anything else yields `None`.
#[must_use]
pub fn extract_email_domain(email: Option<&str>) -> Option<&str> {
    let email = email?;
    if email.trim().is_empty() {
        return None;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty() => {
            Some(domain)
        }
        _ => None,
    }
}

/// Checks extracted email domains against an organization's registered
/// discovery domains.
#[derive(Clone)]
pub struct DomainValidator {
    attribute_store: Arc<dyn DiscoveryAttributeStore>,
}

impl DomainValidator {
    /// Creates a validator over the given attribute store.
    #[must_use]
    pub fn new(attribute_store: Arc<dyn DiscoveryAttributeStore>) -> Self {
        Self { attribute_store }
    }

    /// Decides whether the extracted domain is acceptable for the tenant's
    /// organization.
    ///
    /// Only the organization's own attributes are consulted, never inherited
    /// ones. An organization without discovery attributes carries no
    /// restriction. When several `emailDomain` attributes exist, every one
    /// of their value lists must contain the domain; the first list that
    /// does not rejects the attempt. Matching is exact and case-sensitive.
    pub async fn validate_domain(
        &self,
        tenant: &TenantDomain,
        domain: &str,
    ) -> ValidationDecision {
        let attributes = match self
            .attribute_store
            .get_discovery_attributes(tenant, false)
            .await
        {
            Ok(attributes) => attributes,
            Err(cause) => {
                tracing::error!(
                    %tenant,
                    error = %cause,
                    "error while retrieving organization discovery attributes"
                );
                return ValidationDecision::RejectedInternalError { cause };
            }
        };

        if attributes.is_empty() {
            tracing::debug!(
                %tenant,
                "no discovery attributes mapped to the organization, skipping email domain validation"
            );
            return ValidationDecision::Accepted;
        }

        for attribute in &attributes {
            if !attribute.is_email_domain() {
                continue;
            }
            // A null value list is non-restrictive.
            if let Some(domains) = &attribute.values {
                if !domains.iter().any(|registered| registered == domain) {
                    return ValidationDecision::RejectedDomainMismatch;
                }
            }
        }
        ValidationDecision::Accepted
    }
}
