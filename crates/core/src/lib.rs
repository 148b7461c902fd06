//! Resolution of a subscribed WAF rule group from a paginated listing.
//!
//! A [`Predicate`] names a rule group by its name, its metric name, or both.
//! A [`Resolver`] walks every page produced by a [`Lister`], and returns the
//! single candidate that satisfies the predicate:
//!
//! - no candidate matching is reported as [`ResolveError::NoMatch`]
//! - a second match anywhere in the listing is reported as
//!   [`ResolveError::AmbiguousMatch`]
//! - a listing that does not exist is reported as [`ResolveError::NotFound`]
//!
//! The listing transport is abstract. `waf-lookup-aws` provides listers backed
//! by the AWS SDK, and [`MemoryLister`] serves fixed pages from memory.

pub mod candidate;
pub mod error;
pub mod lister;
pub mod memory;
pub mod page;
pub mod paginate;
pub mod predicate;
pub mod resolver;

pub use candidate::{Candidate, RuleGroupSummary};
pub use error::{BoxError, ResolveError, ResolveErrorKind};
pub use lister::{ListError, Lister};
pub use memory::{MemoryListError, MemoryLister};
pub use page::Page;
pub use paginate::paginate;
pub use predicate::Predicate;
pub use resolver::{Resolver, resolve};
