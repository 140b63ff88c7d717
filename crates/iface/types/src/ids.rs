use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for a declared type (interface or class).
///
/// Handed out by [`Registry::define_interface`](crate::Registry::define_interface)
/// and [`Registry::define_class`](crate::Registry::define_class); only
/// meaningful against the registry that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(u32);

impl TypeId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type#{}", self.0)
    }
}
