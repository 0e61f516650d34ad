//! Repository handles - identity for merged resource metadata
//!
//! Provides [`RepositoryHandle`] and [`RepositoryId`] for referring to a
//! bundle's merged resource view without owning its lifetime.

use std::fmt::{self, Display, Formatter};

use uuid::Uuid;

/// Unique identity of a resource repository
///
/// Allocated once when the handle is created; equality and hashing go
/// through this id, never through repository content. Two handles created
/// from the same metadata are still distinct repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RepositoryId(Uuid);

impl RepositoryId {
    /// Allocate a fresh id
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RepositoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for RepositoryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "repo:{}", &self.0.as_simple().to_string()[..8])
    }
}

/// Opaque handle to a bundle's merged resource metadata
///
/// The handle is cheap to clone and is owned by whoever produced the merged
/// view. The registry records only the [`RepositoryId`]; retiring a
/// repository is an explicit operation on the registry, not a side effect
/// of dropping the last handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryHandle {
    id: RepositoryId,
    name: String,
}

impl RepositoryHandle {
    /// Create a handle with a display name for diagnostics
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: RepositoryId::new(),
            name: name.into(),
        }
    }

    /// Identity of this repository
    #[inline]
    #[must_use]
    pub fn id(&self) -> RepositoryId {
        self.id
    }

    /// Display name given at creation
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for RepositoryHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
