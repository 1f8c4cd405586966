//! # od-spi
//!
//! Collaborator contracts consumed by the email-domain validation core.
//!
//! The validation core owns no I/O: organization resolution, discovery
//! configuration, discovery attributes, and claim-dialect mapping are all
//! delegated to external services behind the traits defined here.
//! Implementations own their transport, caching, retry, and timeout policy;
//! the core translates their failures into decisions and never retries.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod dialect;
pub mod directory;
pub mod discovery;
pub mod error;

pub use dialect::ClaimDialectMapper;
pub use directory::OrganizationDirectory;
pub use discovery::{DiscoveryAttributeStore, DiscoveryConfigStore};
pub use error::{
    AttributeLookupError, ClaimMappingError, DiscoveryConfigError, OrganizationLookupError,
    OrganizationLookupResult,
};
