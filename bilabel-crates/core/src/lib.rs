//! # bilabel-core
//! Infers a binary label for each of `n` entities from an `n x n` [`RelationMatrix`] which states,
//! for every ordered pair of entities, whether they share a label, have different labels, or
//! whether nothing is known.
//!
//! Entities related by `Same` are merged into equality classes with a union-find structure, the
//! `Different` relations between classes are two-coloured with a breadth-first traversal, and
//! every entity receives the label belonging to the colour of its class. When no consistent
//! labelling exists the solver reports a [`ContradictionError`].
//!
//! A labelling and its exact inverse are always both valid. The solver resolves this ambiguity
//! deterministically: by default the class of entity 0 receives [`Label::A`], which is rendered
//! as `1` (see [`options::StartPolicy`] and [`options::OutputPolarity`]).
//!
//! ```rust
//! # use bilabel_core::options::SolverOptions;
//! # use bilabel_core::ContradictionError;
//! # use bilabel_core::RelationMatrix;
//! let matrix = RelationMatrix::from_values(vec![
//!     vec![1, 1, 0, -1, 1, 1],
//!     vec![0, 1, 0, 0, 1, 0],
//!     vec![0, -1, 1, 1, -1, 0],
//!     vec![0, 0, 1, 1, -1, -1],
//!     vec![1, 1, 0, 0, 1, 1],
//!     vec![1, 1, -1, -1, 1, 1],
//! ])
//! .unwrap();
//!
//! let labelling = bilabel_core::solve(&matrix, &SolverOptions::default()).unwrap();
//! assert_eq!("110011", labelling.to_string());
//!
//! let triangle =
//!     RelationMatrix::from_values(vec![vec![0, -1, -1], vec![-1, 0, -1], vec![-1, -1, 0]])
//!         .unwrap();
//! assert!(matches!(
//!     bilabel_core::solve(&triangle, &SolverOptions::default()),
//!     Err(ContradictionError::NotBipartite { .. })
//! ));
//! ```
pub(crate) mod basic_types;
pub(crate) mod engine;

pub mod asserts;
pub mod containers;
pub mod options;
pub mod statistics;

pub use convert_case;

pub use crate::basic_types::*;
pub use crate::engine::LabellingSolver;
use crate::options::SolverOptions;

/// Solves `matrix` with a fresh [`LabellingSolver`].
pub fn solve(
    matrix: &RelationMatrix,
    options: &SolverOptions,
) -> Result<Labelling, ContradictionError> {
    LabellingSolver::new(*options).solve(matrix)
}
