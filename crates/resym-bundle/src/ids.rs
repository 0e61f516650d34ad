//! Identifier-assignment context
//!
//! Generated symbol classes expose integer identifiers for resource
//! entities. How those values come to exist is outside this workspace; what
//! matters at resolution time is whether they are assigned dynamically or
//! were baked into ahead-of-time compiled code.

/// How resource identifiers are assigned for the surrounding module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdMode {
    /// Identifier values are assigned at resolution time
    #[default]
    Dynamic,

    /// Identifier values are finalized in compiled code; a compiled symbol
    /// class may already exist further down the resolution chain
    Finalized,
}

/// Context handed to generator construction and the resolution delegate
///
/// Bound to a repository at its first registration; later registrations for
/// the same repository never rebind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdentifierContext {
    mode: IdMode,
}

impl IdentifierContext {
    /// Context with dynamically assigned identifiers
    #[inline]
    #[must_use]
    pub fn dynamic() -> Self {
        Self {
            mode: IdMode::Dynamic,
        }
    }

    /// Context with finalized (baked-in) identifiers
    #[inline]
    #[must_use]
    pub fn finalized() -> Self {
        Self {
            mode: IdMode::Finalized,
        }
    }

    /// Assignment mode
    #[inline]
    #[must_use]
    pub fn mode(&self) -> IdMode {
        self.mode
    }

    /// Whether identifier values are baked into compiled code
    #[inline]
    #[must_use]
    pub fn finalized_ids_used(&self) -> bool {
        self.mode == IdMode::Finalized
    }
}
