mod colour;
mod contradiction;
mod entity;
mod labelling;
mod relation;
mod relation_matrix;

pub use colour::*;
pub use contradiction::*;
pub use entity::*;
pub use labelling::*;
pub use relation::*;
pub use relation_matrix::*;
