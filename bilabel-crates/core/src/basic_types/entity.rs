use std::fmt::Display;
use std::fmt::Formatter;

use crate::containers::StorageKey;

/// Identifies one of the `n` entities described by a [`RelationMatrix`].
///
/// Entities are numbered by their row (and column) in the matrix, starting at zero.
///
/// [`RelationMatrix`]: crate::RelationMatrix
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId {
    pub id: u32,
}

impl EntityId {
    pub const fn new(id: u32) -> Self {
        EntityId { id }
    }
}

impl StorageKey for EntityId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        EntityId { id: index as u32 }
    }
}

impl Display for EntityId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}
