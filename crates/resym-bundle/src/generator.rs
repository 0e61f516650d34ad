//! Generator and repository-resolution contracts
//!
//! The registry and loader stay free of any code-generation logic; class
//! synthesis and namespace-to-repository mapping enter through the traits
//! defined here.

use crate::handle::RepositoryHandle;
use crate::ids::IdentifierContext;
use crate::namespace::Namespace;
use std::sync::Arc;

/// Binary representation of a generated class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassBytes(Vec<u8>);

impl ClassBytes {
    /// Wrap raw class bytes
    #[inline]
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Raw byte view
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Number of bytes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the representation is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume into the underlying buffer
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for ClassBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// Synthesizes symbol classes for one bound repository
///
/// A generator is created once per repository registration, bound to that
/// repository, its identifier context, and its namespace.
///
/// # Contract
/// `generate` returns `None` only for class names its bound repository does
/// not recognize; invocation is synchronous and bounded.
pub trait SymbolGenerator: Send + Sync {
    /// Produce the binary representation of `class_name`, if recognized
    fn generate(&self, class_name: &str) -> Option<ClassBytes>;
}

/// Constructs a [`SymbolGenerator`] for a repository registration
///
/// Invoked exactly once per repository; re-registrations reuse the existing
/// generator.
pub trait GeneratorFactory: Send + Sync {
    /// Build a generator bound to `repo`, `ids`, and `namespace`
    fn create(
        &self,
        repo: &RepositoryHandle,
        ids: &IdentifierContext,
        namespace: &Namespace,
    ) -> Arc<dyn SymbolGenerator>;
}

/// Maps a namespace to the repositories currently live for it
pub trait RepositoryResolver: Send + Sync {
    /// Ordered list of repository handles relevant to `namespace`
    fn repositories_for(&self, namespace: &Namespace) -> Vec<RepositoryHandle>;
}
