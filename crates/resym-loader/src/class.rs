//! Materialized classes

use resym_bundle::ClassBytes;
use std::fmt::{self, Display, Formatter};

/// A class materialized from generated bytes
///
/// The resolution chain's successful result. Carries the fully-qualified
/// name it was resolved under together with the binary representation the
/// generator produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedClass {
    name: String,
    bytes: ClassBytes,
}

impl LoadedClass {
    /// Materialize a class from generated bytes
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, bytes: ClassBytes) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Fully-qualified class name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Binary representation
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &ClassBytes {
        &self.bytes
    }

    /// Consume into the binary representation
    #[inline]
    #[must_use]
    pub fn into_bytes(self) -> ClassBytes {
        self.bytes
    }
}

impl Display for LoadedClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} bytes)", self.name, self.bytes.len())
    }
}
