use std::fmt::Display;
use std::fmt::Formatter;

use itertools::iproduct;
use thiserror::Error;

use super::EntityId;
use super::Relation;
use crate::containers::StorageKey;

/// Errors raised when a [`RelationMatrix`] cannot be built from the given cells.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    #[error("row {row} has {actual} values, expected {expected} for a square matrix")]
    NonSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("value {0} is not a relation, expected one of -1, 0 or 1")]
    InvalidRelationValue(i64),
    #[error("expected {expected} values for a {size}x{size} matrix, got {actual}")]
    CellCountMismatch {
        size: usize,
        expected: usize,
        actual: usize,
    },
}

/// A square `n x n` matrix of [`Relation`]s between entities.
///
/// The matrix does not have to be symmetric; every directed cell `(i, j)` is interpreted on its
/// own. A value of this type is always square, which is checked when it is created.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RelationMatrix {
    size: usize,
    /// The cells in row-major order.
    cells: Vec<Relation>,
}

impl RelationMatrix {
    /// The matrix over zero entities.
    pub fn empty() -> Self {
        RelationMatrix::default()
    }

    /// Create a matrix from its rows; every row must have as many cells as there are rows.
    pub fn from_rows(rows: Vec<Vec<Relation>>) -> Result<Self, MatrixError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);

        for (row_index, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(MatrixError::NonSquare {
                    row: row_index,
                    expected: size,
                    actual: row.len(),
                });
            }

            cells.extend(row);
        }

        Ok(RelationMatrix { size, cells })
    }

    /// Create a matrix from rows of integer encoded relations (see [`Relation::value`]).
    pub fn from_values(rows: Vec<Vec<i64>>) -> Result<Self, MatrixError> {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(Relation::try_from)
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        RelationMatrix::from_rows(rows)
    }

    /// Create a `size x size` matrix from its cells given in row-major order.
    pub fn from_row_major(size: usize, cells: Vec<Relation>) -> Result<Self, MatrixError> {
        let expected = size * size;
        if cells.len() != expected {
            return Err(MatrixError::CellCountMismatch {
                size,
                expected,
                actual: cells.len(),
            });
        }

        Ok(RelationMatrix { size, cells })
    }

    /// The number of entities, i.e. the number of rows.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The relation stated in row `from`, column `to`.
    pub fn get(&self, from: EntityId, to: EntityId) -> Relation {
        self.cells[from.index() * self.size + to.index()]
    }

    /// The cells of row `from`.
    pub fn row(&self, from: EntityId) -> &[Relation] {
        let start = from.index() * self.size;
        &self.cells[start..start + self.size]
    }

    /// All entities in ascending order.
    pub fn entities(&self) -> impl Iterator<Item = EntityId> {
        (0..self.size).map(EntityId::create_from_index)
    }

    /// All cells in row-major order, i.e. `from` ascending and then `to` ascending.
    pub fn cells(&self) -> impl Iterator<Item = (EntityId, EntityId, Relation)> + '_ {
        iproduct!(0..self.size, 0..self.size).map(|(from, to)| {
            let from = EntityId::create_from_index(from);
            let to = EntityId::create_from_index(to);
            (from, to, self.get(from, to))
        })
    }

    /// The cells holding `relation`, in row-major order.
    pub fn cells_with(
        &self,
        relation: Relation,
    ) -> impl Iterator<Item = (EntityId, EntityId)> + '_ {
        self.cells()
            .filter(move |&(_, _, cell)| cell == relation)
            .map(|(from, to, _)| (from, to))
    }
}

/// Renders the matrix as one whitespace separated row per line.
impl Display for RelationMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for from in self.entities() {
            for (column, relation) in self.row(from).iter().enumerate() {
                if column > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", relation.value())?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_square_rows_are_rejected() {
        let result = RelationMatrix::from_values(vec![vec![1, 0], vec![0]]);

        assert_eq!(
            Err(MatrixError::NonSquare {
                row: 1,
                expected: 2,
                actual: 1
            }),
            result
        );
    }

    #[test]
    fn out_of_domain_values_are_rejected() {
        let result = RelationMatrix::from_values(vec![vec![1, 3], vec![0, 1]]);

        assert_eq!(Err(MatrixError::InvalidRelationValue(3)), result);
    }

    #[test]
    fn row_major_cells_must_fill_the_matrix() {
        let result = RelationMatrix::from_row_major(2, vec![Relation::Same; 3]);

        assert_eq!(
            Err(MatrixError::CellCountMismatch {
                size: 2,
                expected: 4,
                actual: 3
            }),
            result
        );
    }

    #[test]
    fn cells_are_visited_in_row_major_order() {
        let matrix = RelationMatrix::from_values(vec![vec![1, -1], vec![0, 1]]).unwrap();

        let cells = matrix
            .cells()
            .map(|(from, to, relation)| (from.id, to.id, relation))
            .collect::<Vec<_>>();

        assert_eq!(
            vec![
                (0, 0, Relation::Same),
                (0, 1, Relation::Different),
                (1, 0, Relation::Unknown),
                (1, 1, Relation::Same),
            ],
            cells
        );
    }

    #[test]
    fn display_writes_one_row_per_line() {
        let matrix = RelationMatrix::from_values(vec![vec![1, -1], vec![0, 1]]).unwrap();

        assert_eq!("1 -1\n0 1\n", matrix.to_string());
    }
}
