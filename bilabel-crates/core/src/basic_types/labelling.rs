use std::fmt::Display;
use std::fmt::Formatter;

use super::EntityId;
use super::Label;
use super::Relation;
use super::RelationMatrix;
use crate::containers::KeyedVec;
use crate::options::OutputPolarity;

/// A label for every entity of a [`RelationMatrix`], as produced by the solver.
///
/// The [`Display`] implementation renders the labelling as a string of `0`s and `1`s, one
/// character per entity, according to the [`OutputPolarity`] it was created with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Labelling {
    labels: KeyedVec<EntityId, Label>,
    polarity: OutputPolarity,
}

impl Labelling {
    pub(crate) fn new(labels: KeyedVec<EntityId, Label>, polarity: OutputPolarity) -> Self {
        Labelling { labels, polarity }
    }

    pub fn num_entities(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn label(&self, entity: EntityId) -> Label {
        self.labels[entity]
    }

    /// The labels in entity order.
    pub fn labels(&self) -> impl Iterator<Item = Label> + '_ {
        self.labels.iter().copied()
    }

    pub fn polarity(&self) -> OutputPolarity {
        self.polarity
    }

    /// Whether every `Same` cell of `matrix` joins equal labels and every `Different` cell joins
    /// distinct labels.
    pub fn satisfies(&self, matrix: &RelationMatrix) -> bool {
        matrix.size() == self.num_entities()
            && matrix.cells().all(|(from, to, relation)| match relation {
                Relation::Same => self.label(from) == self.label(to),
                Relation::Different => self.label(from) != self.label(to),
                Relation::Unknown => true,
            })
    }
}

impl Display for Labelling {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for label in self.labels() {
            write!(f, "{}", self.polarity.render(label))?;
        }

        Ok(())
    }
}
