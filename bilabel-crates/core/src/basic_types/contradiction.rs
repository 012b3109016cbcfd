use thiserror::Error;

use super::EntityId;

/// The reason a relation matrix admits no labelling.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContradictionError {
    /// The entities are linked by a chain of `Same` relations, yet a cell declares them
    /// `Different`.
    #[error("entities {first} and {second} are forced to share a label but are declared different")]
    EqualityVsInequality { first: EntityId, second: EntityId },
    /// The `Different` relations between equality classes contain a cycle of odd length; `first`
    /// and `second` are the representatives whose edge closes it.
    #[error("the inequality between the classes of {first} and {second} closes an odd cycle")]
    NotBipartite { first: EntityId, second: EntityId },
}

/// The kind of a [`ContradictionError`] without the entities witnessing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContradictionReason {
    EqualityVsInequality,
    NotBipartite,
}

impl ContradictionError {
    pub fn reason(&self) -> ContradictionReason {
        match self {
            ContradictionError::EqualityVsInequality { .. } => {
                ContradictionReason::EqualityVsInequality
            }
            ContradictionError::NotBipartite { .. } => ContradictionReason::NotBipartite,
        }
    }
}
