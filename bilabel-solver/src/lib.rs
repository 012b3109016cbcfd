//! # bilabel
//! Infers a binary labelling of `n` entities from an `n x n` matrix of same/different relations,
//! or reports that no consistent labelling exists.
//!
//! The engine lives in [`core`]; its most commonly used items are re-exported here. Matrices are
//! read and written with the `relation-format` crate.
//!
//! ```rust
//! # use bilabel_solver::options::SolverOptions;
//! # use bilabel_solver::RelationMatrix;
//! let matrix =
//!     RelationMatrix::from_values(vec![vec![1, 1, 0], vec![1, 1, -1], vec![0, -1, 1]]).unwrap();
//!
//! let labelling = bilabel_solver::solve(&matrix, &SolverOptions::default()).unwrap();
//! assert_eq!("110", labelling.to_string());
//! ```
//!
//! The crate also contains the [`grid_walk`] routines used by the `grid-walk` binary, which are
//! unrelated to labelling.
pub use bilabel_core as core;
pub use bilabel_core::options;
pub use bilabel_core::solve;
pub use bilabel_core::ContradictionError;
pub use bilabel_core::Label;
pub use bilabel_core::Labelling;
pub use bilabel_core::LabellingSolver;
pub use bilabel_core::RelationMatrix;

pub mod grid_walk;
