//! resym Resolution Delegate
//!
//! One link in an ordered, acyclic chain of class resolvers. The delegate
//! defers to its parent first, rejects names that do not follow the
//! symbol-class naming convention, optionally yields to a more specific
//! descendant when identifiers are finalized, and only then synthesizes a
//! class through the symbol registry.
//!
//! # Overview
//!
//! - [`ClassResolver`]: the common `resolve` contract every chain link implements
//! - [`DelegatingResolver`]: the parent-first / registry-backed delegate
//! - [`ChainResolver`]: an explicit ordered list of resolvers
//! - [`ResolveError`]: recoverable `NotFound` vs fatal `Collision`
//!
//! # Example
//!
//! ```rust,ignore
//! let delegate = DelegatingResolver::new(registry, repositories)
//!     .with_parent(parent)
//!     .with_identifier_context(IdentifierContext::finalized())
//!     .with_descendant_probe(probe);
//!
//! let class = delegate.resolve("com.example.R")?;
//! ```

mod chain;
mod class;
mod resolver;

pub use chain::ChainResolver;
pub use class::LoadedClass;
pub use resolver::{ClassResolver, DelegatingResolver, ResolveError, ResolverProbe};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for resolution chains
    pub use crate::{ChainResolver, ClassResolver, DelegatingResolver, LoadedClass, ResolveError};
    pub use resym_bundle::{IdentifierContext, Namespace, RepositoryHandle};
    pub use resym_registry::SymbolRegistry;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
