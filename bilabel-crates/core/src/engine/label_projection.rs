use super::Colouring;
use super::Partition;
use crate::basic_types::Label;
use crate::basic_types::Labelling;
use crate::containers::KeyedVec;
use crate::options::OutputPolarity;

/// Gives every entity the label of its class' colour.
pub(crate) fn project_labels(
    partition: &Partition,
    colouring: &Colouring,
    polarity: OutputPolarity,
) -> Labelling {
    let labels = KeyedVec::from_fn(partition.num_entities(), |entity| {
        Label::from(colouring.colour(partition.find(entity)))
    });

    Labelling::new(labels, polarity)
}
