//! # od-validation
//!
//! Post-authentication email-domain validation for federated logins.
//!
//! Organizations can register email domains as discovery attributes. When a
//! user authenticates through an external identity provider, this crate
//! checks that the email domain carried in the federated claims is one the
//! organization has registered, and rejects the attempt otherwise.
//!
//! The crate implements:
//!
//! - a feature gate deciding whether the check applies to a tenant at all,
//! - a claim resolver normalizing federated attributes into local claims,
//! - the domain validator making the accept/reject decision,
//! - the post-authentication handler registry that runs handlers in
//!   priority order after every authentication attempt.
//!
//! ## NIST 800-53 Rev5 Controls
//!
//! - IA-2: Identification and Authentication
//! - AC-3: Access Enforcement
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use od_validation::{EmailDomainValidationHandler, PostAuthnRegistry};
//!
//! let handler = EmailDomainValidationHandler::new(
//!     directory,
//!     config_store,
//!     attribute_store,
//!     dialect_mapper,
//! );
//!
//! let mut registry = PostAuthnRegistry::new();
//! registry.register(Arc::new(handler));
//!
//! let status = registry.run(&context).await;
//! ```

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod claims;
pub mod decision;
pub mod error;
pub mod gate;
pub mod handler;
pub mod registry;
pub mod validator;

pub use claims::ClaimResolver;
pub use decision::ValidationDecision;
pub use error::{ValidationError, ValidationResult};
pub use gate::DiscoveryFeatureGate;
pub use handler::{EmailDomainValidationHandler, PostAuthenticationHandler};
pub use registry::{FlowStatus, PostAuthnRegistry};
pub use validator::{extract_email_domain, DomainValidator};
