//! Delegating class resolution
//!
//! Provides [`DelegatingResolver`], one link in an ordered chain of class
//! resolvers, and the [`ClassResolver`] contract shared by every link.

use crate::class::LoadedClass;
use resym_bundle::{is_symbol_class_name, IdentifierContext, RepositoryResolver};
use resym_registry::{RegistryError, SymbolRegistry};
use std::sync::Arc;

/// Resolution errors
///
/// `NotFound` is recoverable and part of normal delegation; callers further
/// up the chain are expected to try their next link. `Collision` is fatal:
/// the registry refused to pick between repositories claiming the same
/// package, and the configuration needs human correction.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// No link in the chain could produce the class
    #[error("class not found: {0}")]
    NotFound(String),

    /// Fatal package collision, propagated unchanged from the registry
    #[error(transparent)]
    Collision(#[from] RegistryError),
}

impl ResolveError {
    /// Whether this is an ordinary, recoverable miss
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Whether this error must abort the in-flight resolution
    #[inline]
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !self.is_not_found()
    }
}

/// One link in an ordered, acyclic chain of class resolvers
pub trait ClassResolver: Send + Sync {
    /// Resolve `name` to a loaded class, or fail with
    /// [`ResolveError::NotFound`] so the next link can try
    fn resolve(&self, name: &str) -> Result<LoadedClass, ResolveError>;
}

/// Probe asking whether a more specific descendant resolver would succeed
///
/// Used in finalized-identifier mode to keep this delegate from defining a
/// class a descendant already owns; two definitions of the same class in
/// one resolution domain are illegal.
pub trait ResolverProbe: Send + Sync {
    /// Whether the probed resolver would successfully load `name`
    fn would_resolve(&self, name: &str) -> bool;
}

/// Parent-first delegate backed by the symbol registry
///
/// Per lookup the delegate is effectively a two-state machine: it stays in
/// the deferred state while the parent, the naming convention, or the
/// descendant probe can settle the request, and only then switches to
/// synthesizing through the registry. No state is retained across lookups.
pub struct DelegatingResolver {
    parent: Option<Arc<dyn ClassResolver>>,
    registry: Arc<SymbolRegistry>,
    repositories: Arc<dyn RepositoryResolver>,
    descendant: Option<Arc<dyn ResolverProbe>>,
    ids: IdentifierContext,
}

impl DelegatingResolver {
    /// Create a delegate over `registry`, resolving repositories through
    /// `repositories`
    #[must_use]
    pub fn new(registry: Arc<SymbolRegistry>, repositories: Arc<dyn RepositoryResolver>) -> Self {
        Self {
            parent: None,
            registry,
            repositories,
            descendant: None,
            ids: IdentifierContext::default(),
        }
    }

    /// Set the parent resolver; the parent always wins over synthesis
    #[inline]
    #[must_use]
    pub fn with_parent(mut self, parent: Arc<dyn ClassResolver>) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Set the descendant probe consulted in finalized-identifier mode
    #[inline]
    #[must_use]
    pub fn with_descendant_probe(mut self, probe: Arc<dyn ResolverProbe>) -> Self {
        self.descendant = Some(probe);
        self
    }

    /// Set the identifier-assignment context of the surrounding module
    #[inline]
    #[must_use]
    pub fn with_identifier_context(mut self, ids: IdentifierContext) -> Self {
        self.ids = ids;
        self
    }

    fn not_found(name: &str) -> ResolveError {
        ResolveError::NotFound(name.to_string())
    }
}

impl ClassResolver for DelegatingResolver {
    fn resolve(&self, name: &str) -> Result<LoadedClass, ResolveError> {
        // Parent-first precedence: compiled classes always win over
        // synthesized ones when both exist.
        if let Some(parent) = &self.parent {
            match parent.resolve(name) {
                Ok(class) => return Ok(class),
                Err(err) if err.is_fatal() => return Err(err),
                Err(_) => {}
            }
        }

        if !is_symbol_class_name(name) {
            return Err(Self::not_found(name));
        }

        // With finalized identifiers a compiled symbol class may exist
        // further down the chain; the descendant owns the definition then.
        if self.ids.finalized_ids_used() {
            if let Some(descendant) = &self.descendant {
                if descendant.would_resolve(name) {
                    tracing::trace!("deferring '{}' to descendant resolver", name);
                    return Err(Self::not_found(name));
                }
            }
        }

        match self
            .registry
            .find_class_definition(name, self.repositories.as_ref())?
        {
            Some(bytes) => {
                tracing::debug!("defining '{}' from symbol registry", name);
                Ok(LoadedClass::new(name, bytes))
            }
            None => Err(Self::not_found(name)),
        }
    }
}

impl std::fmt::Debug for DelegatingResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DelegatingResolver")
            .field("has_parent", &self.parent.is_some())
            .field("has_descendant_probe", &self.descendant.is_some())
            .field("ids", &self.ids)
            .finish_non_exhaustive()
    }
}
