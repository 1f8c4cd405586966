//! Registry and execution of post-authentication handlers.

use std::sync::Arc;

use od_model::AuthenticationContext;

use crate::handler::PostAuthenticationHandler;

/// Outcome of running the registered handlers for one attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowStatus {
    /// Every applicable handler accepted the attempt.
    SuccessCompleted,

    /// A handler rejected the attempt or failed; the attempt is aborted.
    Unsuccessful {
        /// Stable rejection code.
        code: String,
        /// Tenant-scoped message.
        message: String,
    },
}

impl FlowStatus {
    /// Whether the attempt may proceed.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::SuccessCompleted)
    }
}

/// Ordered collection of post-authentication handlers.
///
/// Built once at startup and shared. Handlers run in ascending priority
/// order; the first rejection aborts the attempt with no retry.
#[derive(Default)]
pub struct PostAuthnRegistry {
    handlers: Vec<Arc<dyn PostAuthenticationHandler>>,
}

impl PostAuthnRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Registers a handler, keeping the priority order.
    pub fn register(&mut self, handler: Arc<dyn PostAuthenticationHandler>) {
        self.handlers.push(handler);
        self.handlers.sort_by_key(|handler| handler.priority());
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handlers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs every applicable handler against the attempt.
    ///
    /// Each handler's gate predicate is consulted first; inapplicable
    /// handlers are skipped entirely.
    pub async fn run(&self, ctx: &AuthenticationContext) -> FlowStatus {
        for handler in &self.handlers {
            if !handler.is_applicable(ctx).await {
                continue;
            }
            match handler.validate(ctx).await {
                Ok(decision) if decision.is_accepted() => {}
                Ok(decision) => {
                    tracing::debug!(
                        handler = handler.name(),
                        tenant = %ctx.tenant_domain,
                        code = decision.code().unwrap_or_default(),
                        "post-authentication handler rejected the attempt"
                    );
                    return FlowStatus::Unsuccessful {
                        code: decision.code().unwrap_or_default().to_string(),
                        message: decision.message(&ctx.tenant_domain).unwrap_or_default(),
                    };
                }
                Err(err) => {
                    tracing::debug!(
                        handler = handler.name(),
                        tenant = %ctx.tenant_domain,
                        error = %err,
                        "post-authentication handler failed"
                    );
                    return FlowStatus::Unsuccessful {
                        code: err.code().to_string(),
                        message: err.to_string(),
                    };
                }
            }
        }
        FlowStatus::SuccessCompleted
    }
}
