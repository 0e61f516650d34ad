//! Resource namespaces
//!
//! A [`Namespace`] isolates resource identifiers belonging to different
//! bundles that share overlapping package names.

use std::fmt::{self, Display, Formatter};

/// Scoping tag derived from a package name
///
/// The tag is opaque to the registry and loader; it only has to be stable
/// for a given package so that lookups and registrations agree on which
/// merged repository view they are talking about.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace(String);

impl Namespace {
    /// Derive the namespace for a package name
    #[inline]
    #[must_use]
    pub fn from_package(package: &str) -> Self {
        Self(package.to_string())
    }

    /// Raw tag value
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Namespace {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
