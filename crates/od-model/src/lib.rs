//! # od-model
//!
//! Domain model for organization email-domain validation.
//!
//! This crate carries the data types shared by the validation core and its
//! collaborator contracts: identifiers, the read-only authentication context
//! handed over by the pipeline, organization discovery attributes and
//! configuration, and normalized claim maps.
//!
//! The types here hold no behavior beyond construction, accessors, and the
//! per-step claim-source resolution; all decision logic lives in
//! `od-validation`.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod claims;
pub mod context;
pub mod discovery;
pub mod id;

pub use claims::{ClaimMapping, ClaimSource, NormalizedClaims, EMAIL_ADDRESS_CLAIM};
pub use context::{AuthenticationContext, ExternalIdpConfig, StepAuthenticator, StepConfig};
pub use discovery::{
    ConfigProperty, DiscoveryAttribute, DiscoveryConfig, EMAIL_DOMAIN_ATTRIBUTE_TYPE,
    EMAIL_DOMAIN_ENABLE_KEY,
};
pub use id::{OrgId, TenantDomain};
