//! AWS WAF Classic listers for subscribed rule group lookup.
//!
//! - **Global** (`global` feature): [`WafLister`] over the `waf` API
//! - **Regional** (`regional` feature): [`WafRegionalLister`] over the
//!   `waf-regional` API
//!
//! Both page through `ListSubscribedRuleGroups` and implement
//! [`waf_lookup_core::Lister`], so they plug straight into a
//! [`waf_lookup_core::Resolver`]. `WAFNonexistentItemException` is reported as
//! not found; every other SDK failure is classified by [`classify_sdk_error`].
//!
//! All listers share a [`WafLookupConfig`] for region, endpoint override,
//! optional STS assume-role credentials and page size.

pub mod auth;
pub mod config;
pub mod error;
mod listing;

#[cfg(feature = "global")]
pub mod global;

#[cfg(feature = "regional")]
pub mod regional;

#[cfg(all(feature = "global", feature = "regional"))]
pub mod scoped;

pub use auth::build_sdk_config;
pub use config::{WafLookupConfig, WafScope};
pub use error::{AwsListError, classify_sdk_error};

#[cfg(feature = "global")]
pub use global::WafLister;

#[cfg(feature = "regional")]
pub use regional::WafRegionalLister;

#[cfg(all(feature = "global", feature = "regional"))]
pub use scoped::ScopedLister;
