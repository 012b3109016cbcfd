use crate::basic_types::EntityId;
use crate::basic_types::Relation;
use crate::basic_types::RelationMatrix;
use crate::bilabel_assert_eq_simple;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;

/// Union-find over the entities, with path halving and union by rank.
#[derive(Clone, Debug)]
pub(crate) struct DisjointSet {
    parent: KeyedVec<EntityId, EntityId>,
    /// Upper bound on the height of the tree rooted at an entity; only meaningful for roots.
    rank: KeyedVec<EntityId, u32>,
}

impl DisjointSet {
    /// Every entity starts in its own set.
    pub(crate) fn new(num_entities: usize) -> Self {
        DisjointSet {
            parent: KeyedVec::from_fn(num_entities, |entity| entity),
            rank: KeyedVec::with_len(num_entities, 0),
        }
    }

    /// Returns the representative of the set containing `entity`.
    ///
    /// Every visited node is redirected to its grandparent on the way up.
    pub(crate) fn find(&mut self, mut entity: EntityId) -> EntityId {
        while self.parent[entity] != entity {
            let grandparent = self.parent[self.parent[entity]];
            self.parent[entity] = grandparent;
            entity = grandparent;
        }

        entity
    }

    /// Merges the sets containing `a` and `b`. The root of the lower ranked tree is attached to
    /// the other root; on a tie the representative of `a` stays the root.
    ///
    /// Returns whether two distinct sets were merged.
    pub(crate) fn union(&mut self, a: EntityId, b: EntityId) -> bool {
        let mut root_a = self.find(a);
        let mut root_b = self.find(b);

        if root_a == root_b {
            return false;
        }

        if self.rank[root_a] < self.rank[root_b] {
            std::mem::swap(&mut root_a, &mut root_b);
        }

        self.parent[root_b] = root_a;
        if self.rank[root_a] == self.rank[root_b] {
            self.rank[root_a] += 1;
        }

        true
    }

    /// Fully compresses every path and returns the resulting read-only partition.
    pub(crate) fn freeze(mut self) -> Partition {
        let num_entities = self.parent.len();
        let representative =
            KeyedVec::from_fn(num_entities, |entity: EntityId| self.find(entity));

        for entity in representative.keys() {
            bilabel_assert_eq_simple!(
                representative[representative[entity]],
                representative[entity],
                "representatives must be fixed points"
            );
        }

        Partition { representative }
    }
}

/// The equality classes of the entities, as computed by a [`DisjointSet`].
#[derive(Clone, Debug)]
pub(crate) struct Partition {
    representative: KeyedVec<EntityId, EntityId>,
}

impl Partition {
    pub(crate) fn num_entities(&self) -> usize {
        self.representative.len()
    }

    pub(crate) fn find(&self, entity: EntityId) -> EntityId {
        self.representative[entity]
    }

    /// The representatives of all classes, in ascending order.
    pub(crate) fn representatives(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.representative
            .iter_with_keys()
            .filter(|(entity, representative)| entity == *representative)
            .map(|(entity, _)| entity)
    }

    pub(crate) fn num_classes(&self) -> usize {
        self.representatives().count()
    }

    /// The members of every class, in ascending order, keyed by entity. Only the lists of
    /// representatives are non-empty.
    pub(crate) fn members(&self) -> KeyedVec<EntityId, Vec<EntityId>> {
        let mut members: KeyedVec<EntityId, Vec<EntityId>> =
            KeyedVec::with_len(self.num_entities(), Vec::new());

        for (entity, &representative) in self.representative.iter_with_keys() {
            members[representative].push(entity);
        }

        members
    }
}

/// Merges every pair of entities related by `Same`, visiting cells in row-major order.
pub(crate) fn merge_equalities(matrix: &RelationMatrix) -> Partition {
    let mut disjoint_set = DisjointSet::new(matrix.size());

    for (from, to) in matrix.cells_with(Relation::Same) {
        let _ = disjoint_set.union(from, to);
    }

    disjoint_set.freeze()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(id: u32) -> EntityId {
        EntityId::new(id)
    }

    #[test]
    fn fresh_entities_are_their_own_representative() {
        let mut disjoint_set = DisjointSet::new(3);

        for id in 0..3 {
            assert_eq!(entity(id), disjoint_set.find(entity(id)));
        }
    }

    #[test]
    fn union_is_transitive() {
        let mut disjoint_set = DisjointSet::new(4);

        assert!(disjoint_set.union(entity(0), entity(1)));
        assert!(disjoint_set.union(entity(2), entity(1)));

        assert_eq!(disjoint_set.find(entity(0)), disjoint_set.find(entity(2)));
        assert_ne!(disjoint_set.find(entity(0)), disjoint_set.find(entity(3)));
    }

    #[test]
    fn merging_the_same_set_twice_reports_no_change() {
        let mut disjoint_set = DisjointSet::new(2);

        assert!(disjoint_set.union(entity(0), entity(1)));
        assert!(!disjoint_set.union(entity(1), entity(0)));
    }

    #[test]
    fn tie_on_rank_keeps_the_first_root() {
        let mut disjoint_set = DisjointSet::new(2);

        let _ = disjoint_set.union(entity(1), entity(0));

        assert_eq!(entity(1), disjoint_set.find(entity(0)));
    }

    #[test]
    fn shallow_tree_is_attached_below_deeper_tree() {
        let mut disjoint_set = DisjointSet::new(3);

        let _ = disjoint_set.union(entity(0), entity(1));
        let _ = disjoint_set.union(entity(2), entity(0));

        assert_eq!(entity(0), disjoint_set.find(entity(2)));
    }

    #[test]
    fn partition_lists_representatives_and_members_in_order() {
        let mut disjoint_set = DisjointSet::new(5);
        let _ = disjoint_set.union(entity(3), entity(1));
        let _ = disjoint_set.union(entity(4), entity(0));

        let partition = disjoint_set.freeze();

        assert_eq!(
            vec![entity(2), entity(3), entity(4)],
            partition.representatives().collect::<Vec<_>>()
        );
        assert_eq!(3, partition.num_classes());

        let members = partition.members();
        assert_eq!(vec![entity(1), entity(3)], members[entity(3)]);
        assert_eq!(vec![entity(0), entity(4)], members[entity(4)]);
        assert!(members[entity(0)].is_empty());
    }
}
