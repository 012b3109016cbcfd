use log::trace;

use super::Partition;
use crate::basic_types::ContradictionError;
use crate::basic_types::EntityId;
use crate::basic_types::Relation;
use crate::basic_types::RelationMatrix;
use crate::bilabel_assert_simple;
use crate::containers::HashSet;
use crate::containers::KeyedVec;

/// Undirected graph over the representatives of a [`Partition`], with an edge for every pair of
/// classes declared `Different`.
///
/// Adjacency lists are kept in order of first insertion; since cells are visited in row-major
/// order, this order is deterministic.
#[derive(Clone, Debug)]
pub(crate) struct ConstraintGraph {
    adjacency: KeyedVec<EntityId, Vec<EntityId>>,
    /// Every edge once, with the smaller endpoint first.
    edges: HashSet<(EntityId, EntityId)>,
}

impl ConstraintGraph {
    /// Builds the graph from the `Different` cells of `matrix`.
    ///
    /// Fails on the first cell, in row-major order, whose entities share an equality class.
    pub(crate) fn build(
        matrix: &RelationMatrix,
        partition: &Partition,
    ) -> Result<ConstraintGraph, ContradictionError> {
        let mut graph = ConstraintGraph {
            adjacency: KeyedVec::with_len(partition.num_entities(), Vec::new()),
            edges: HashSet::default(),
        };

        for (from, to) in matrix.cells_with(Relation::Different) {
            let a = partition.find(from);
            let b = partition.find(to);

            if a == b {
                return Err(ContradictionError::EqualityVsInequality {
                    first: from,
                    second: to,
                });
            }

            graph.add_edge(a, b);
        }

        Ok(graph)
    }

    /// Adds the edge `a - b`; adding an existing edge has no effect.
    fn add_edge(&mut self, a: EntityId, b: EntityId) {
        bilabel_assert_simple!(a != b, "the constraint graph has no self-loops");

        let key = if a < b { (a, b) } else { (b, a) };
        if !self.edges.insert(key) {
            return;
        }

        trace!("inequality edge {a} - {b}");
        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
    }

    pub(crate) fn neighbours(&self, representative: EntityId) -> &[EntityId] {
        &self.adjacency[representative]
    }

    pub(crate) fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn edges(&self) -> impl Iterator<Item = (EntityId, EntityId)> + '_ {
        self.edges.iter().copied()
    }
}
