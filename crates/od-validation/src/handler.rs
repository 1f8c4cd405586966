//! Post-authentication email-domain validation handler.

use std::sync::Arc;

use async_trait::async_trait;
use od_model::AuthenticationContext;
use od_spi::{
    ClaimDialectMapper, DiscoveryAttributeStore, DiscoveryConfigStore, OrganizationDirectory,
};

use crate::claims::ClaimResolver;
use crate::decision::ValidationDecision;
use crate::error::ValidationResult;
use crate::gate::DiscoveryFeatureGate;
use crate::validator::{extract_email_domain, DomainValidator};

/// A validation step the pipeline runs after authentication completes.
///
/// Handlers are stateless values shared across all requests. The pipeline
/// calls [`is_applicable`](Self::is_applicable) before scheduling
/// [`validate`](Self::validate) at all.
#[async_trait]
pub trait PostAuthenticationHandler: Send + Sync {
    /// Unique handler name.
    fn name(&self) -> &'static str;

    /// Ordering priority; lower runs earlier.
    fn priority(&self) -> i32 {
        0
    }

    /// Whether this handler applies to the attempt's tenant at all.
    async fn is_applicable(&self, ctx: &AuthenticationContext) -> bool;

    /// Runs the validation. Any rejection aborts the attempt.
    ///
    /// # Errors
    ///
    /// Fails when the handler cannot reach a trustworthy decision, which
    /// also aborts the attempt.
    async fn validate(&self, ctx: &AuthenticationContext)
        -> ValidationResult<ValidationDecision>;
}

/// Default priority for the email-domain validation handler.
const EMAIL_DOMAIN_HANDLER_PRIORITY: i32 = 15;

/// Enforces organization-to-email-domain binding for federated logins.
///
/// For every completed step backed by a federated authenticator, the handler
/// normalizes the step's claims, extracts the email domain, and checks it
/// against the organization's registered discovery domains. The first
/// rejection aborts the whole attempt.
pub struct EmailDomainValidationHandler {
    gate: DiscoveryFeatureGate,
    resolver: ClaimResolver,
    validator: DomainValidator,
}

impl EmailDomainValidationHandler {
    /// Creates the handler over its collaborators.
    ///
    /// The handler holds no mutable state; construct it once at process
    /// start and share it behind an `Arc`.
    #[must_use]
    pub fn new(
        directory: Arc<dyn OrganizationDirectory>,
        config_store: Arc<dyn DiscoveryConfigStore>,
        attribute_store: Arc<dyn DiscoveryAttributeStore>,
        dialect_mapper: Arc<dyn ClaimDialectMapper>,
    ) -> Self {
        Self {
            gate: DiscoveryFeatureGate::new(directory, config_store),
            resolver: ClaimResolver::new(dialect_mapper),
            validator: DomainValidator::new(attribute_store),
        }
    }
}

#[async_trait]
impl PostAuthenticationHandler for EmailDomainValidationHandler {
    fn name(&self) -> &'static str {
        "email-domain-validation"
    }

    fn priority(&self) -> i32 {
        EMAIL_DOMAIN_HANDLER_PRIORITY
    }

    async fn is_applicable(&self, ctx: &AuthenticationContext) -> bool {
        self.gate
            .is_email_domain_discovery_enabled(&ctx.tenant_domain)
            .await
    }

    async fn validate(
        &self,
        ctx: &AuthenticationContext,
    ) -> ValidationResult<ValidationDecision> {
        for step in &ctx.steps {
            let federated = step
                .authenticator
                .as_ref()
                .is_some_and(|authenticator| authenticator.is_federated());
            if !federated {
                continue;
            }

            let claims = self.resolver.resolve(ctx, step).await?;
            let Some(domain) = extract_email_domain(claims.email_address()) else {
                tracing::debug!(
                    tenant = %ctx.tenant_domain,
                    "email address not found or not in the expected format"
                );
                return Ok(ValidationDecision::RejectedNoEmail);
            };

            let decision = self.validator.validate_domain(&ctx.tenant_domain, domain).await;
            if decision.is_rejected() {
                return Ok(decision);
            }
        }
        Ok(ValidationDecision::Accepted)
    }
}
