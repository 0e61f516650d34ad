//! Explicit resolver chains
//!
//! Provides [`ChainResolver`], an ordered list of resolvers tried
//! front-to-back. Models the delegation chain as explicit capability
//! objects instead of an implicit loader hierarchy.

use crate::class::LoadedClass;
use crate::resolver::{ClassResolver, ResolveError};
use std::sync::Arc;

/// Ordered chain of class resolvers
///
/// `resolve` walks the links in insertion order and returns the first
/// success. Ordinary misses continue the walk; a fatal error (package
/// collision) aborts it immediately and is never retried against later
/// links.
#[derive(Default)]
pub struct ChainResolver {
    links: Vec<Arc<dyn ClassResolver>>,
}

impl ChainResolver {
    /// Create an empty chain
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { links: Vec::new() }
    }

    /// Append a resolver to the end of the chain
    pub fn push(&mut self, link: Arc<dyn ClassResolver>) {
        self.links.push(link);
    }

    /// Builder-style append
    #[inline]
    #[must_use]
    pub fn with_link(mut self, link: Arc<dyn ClassResolver>) -> Self {
        self.links.push(link);
        self
    }

    /// Number of links
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether the chain has no links
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl ClassResolver for ChainResolver {
    fn resolve(&self, name: &str) -> Result<LoadedClass, ResolveError> {
        for link in &self.links {
            match link.resolve(name) {
                Ok(class) => return Ok(class),
                Err(err) if err.is_fatal() => return Err(err),
                Err(_) => {}
            }
        }
        Err(ResolveError::NotFound(name.to_string()))
    }
}

impl std::fmt::Debug for ChainResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainResolver")
            .field("links", &self.links.len())
            .finish()
    }
}
