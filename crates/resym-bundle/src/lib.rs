//! resym Bundle Boundary
//!
//! Leaf types and collaborator contracts shared by the symbol registry and
//! the resolution delegate.
//!
//! # Core Concepts
//!
//! - [`RepositoryHandle`]: opaque identity for a bundle's merged resource metadata
//! - [`Namespace`]: scoping tag derived from a package name
//! - [`SymbolGenerator`]: opaque capability producing generated class bytes
//! - [`is_symbol_class_name`]: the symbol-class naming convention
//!
//! The registry and loader never look inside a repository; everything they
//! need from the resource-bundle side of the system enters through the
//! traits defined here.

// Core modules
mod generator;
mod handle;
mod ids;
mod name;
mod namespace;

// Re-exports
pub use generator::{ClassBytes, GeneratorFactory, RepositoryResolver, SymbolGenerator};
pub use handle::{RepositoryHandle, RepositoryId};
pub use ids::{IdMode, IdentifierContext};
pub use name::{is_symbol_class_name, package_prefix};
pub use namespace::Namespace;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
