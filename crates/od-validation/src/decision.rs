//! Validation outcome of one email-domain validation call.

use od_model::TenantDomain;
use od_spi::AttributeLookupError;

/// Stable rejection code: no email address claim was present.
pub const CODE_NO_EMAIL: &str = "ODV-60001";

/// Stable rejection code: email domain not registered for the organization.
pub const CODE_DOMAIN_MISMATCH: &str = "ODV-60002";

/// Stable rejection code: discovery attribute lookup failed.
pub const CODE_INTERNAL_ERROR: &str = "ODV-65001";

/// Outcome of one email-domain validation call.
///
/// Produced and consumed within a single authentication attempt; any
/// rejection aborts the attempt with no retry.
#[derive(Debug)]
pub enum ValidationDecision {
    /// The email domain is acceptable, or no restriction is configured.
    Accepted,

    /// No email address claim was found, or it was malformed.
    RejectedNoEmail,

    /// The email domain is not registered for the organization.
    RejectedDomainMismatch,

    /// Discovery attributes could not be retrieved.
    ///
    /// Silently accepting on lookup failure would be unsafe, so this is a
    /// user-visible rejection rather than a skipped check.
    RejectedInternalError {
        /// The underlying lookup failure.
        cause: AttributeLookupError,
    },
}

impl ValidationDecision {
    /// Whether the attempt may proceed.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Whether the attempt must be aborted.
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        !self.is_accepted()
    }

    /// Stable rejection code, or `None` when accepted.
    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::Accepted => None,
            Self::RejectedNoEmail => Some(CODE_NO_EMAIL),
            Self::RejectedDomainMismatch => Some(CODE_DOMAIN_MISMATCH),
            Self::RejectedInternalError { .. } => Some(CODE_INTERNAL_ERROR),
        }
    }

    /// Tenant-scoped human-readable rejection message, or `None` when
    /// accepted.
    #[must_use]
    pub fn message(&self, tenant: &TenantDomain) -> Option<String> {
        match self {
            Self::Accepted => None,
            Self::RejectedNoEmail => Some(format!(
                "no email address was found for the user authenticating to tenant {tenant}"
            )),
            Self::RejectedDomainMismatch => Some(format!(
                "the email domain is not registered for the organization of tenant {tenant}"
            )),
            Self::RejectedInternalError { cause } => Some(format!(
                "error while retrieving discovery attributes for tenant {tenant}: {cause}"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_has_no_code_or_message() {
        let decision = ValidationDecision::Accepted;
        assert!(decision.is_accepted());
        assert!(decision.code().is_none());
        assert!(decision.message(&TenantDomain::new("t1")).is_none());
    }

    #[test]
    fn rejections_carry_stable_codes() {
        assert_eq!(ValidationDecision::RejectedNoEmail.code(), Some(CODE_NO_EMAIL));
        assert_eq!(
            ValidationDecision::RejectedDomainMismatch.code(),
            Some(CODE_DOMAIN_MISMATCH)
        );
    }

    #[test]
    fn messages_are_tenant_scoped() {
        let tenant = TenantDomain::new("t1.example");
        let message = ValidationDecision::RejectedDomainMismatch
            .message(&tenant)
            .unwrap();
        assert!(message.contains("t1.example"));
    }

    #[test]
    fn internal_error_carries_cause() {
        let tenant = TenantDomain::new("t1");
        let decision = ValidationDecision::RejectedInternalError {
            cause: AttributeLookupError::new(tenant.clone(), "store down"),
        };
        assert_eq!(decision.code(), Some(CODE_INTERNAL_ERROR));
        assert!(decision.message(&tenant).unwrap().contains("store down"));
    }
}
