//! Reading and writing the textual formats of a [`RelationMatrix`].
//!
//! Two formats are supported, see [`MatrixFormat`]:
//! ```text
//! 3
//! 1 1 0
//! 1 1 -1
//! 0 -1 1
//! ```
//! and
//! ```text
//! [[1, 1, 0], [1, 1, -1], [0, -1, 1]]
//! ```
//!
//! To read a matrix see [`reader::parse_matrix`] and [`reader::read_matrix`], to write one see
//! [`writer::write_matrix`].
//!
//! [`RelationMatrix`]: bilabel_core::RelationMatrix

mod format;

pub mod reader;
pub mod writer;

pub use format::*;
