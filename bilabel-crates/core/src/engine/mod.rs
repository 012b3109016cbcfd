//! The phases of a solve: equality merging, constraint graph construction, bipartite colouring
//! and label projection.
mod bipartite_colouring;
mod constraint_graph;
mod disjoint_set;
mod label_projection;
mod labelling_solver;

pub(crate) use bipartite_colouring::*;
pub(crate) use constraint_graph::*;
pub(crate) use disjoint_set::*;
pub(crate) use label_projection::*;
pub use labelling_solver::*;
