//! resym Symbol Registry
//!
//! A module-wide registry mapping resource repositories to the generators
//! capable of producing their symbol classes on demand.
//!
//! # Overview
//!
//! The registry owns:
//! - the mapping from repository identity to per-repository registration
//!   records (generator + claimed packages)
//! - the derived package cache, fully rebuilt after every mutation
//! - the namespace-collision consistency rule: when more than one live
//!   repository claims the package of a requested class, resolution fails
//!   hard rather than silently picking a winner
//!
//! # Example
//!
//! ```rust,ignore
//! let registry = SymbolRegistry::new(factory);
//! registry.add_library(&repo, &ids, Some("com.example"), namespace);
//!
//! match registry.find_class_definition("com.example.R", &resolver)? {
//!     Some(bytes) => define_class(bytes),
//!     None => fall_through(),
//! }
//! ```

mod registry;

pub use registry::{RegistryError, SymbolRegistry};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
