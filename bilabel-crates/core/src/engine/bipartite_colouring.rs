use std::collections::VecDeque;

use itertools::Itertools;
use log::debug;

use super::ConstraintGraph;
use super::Partition;
use crate::basic_types::Colour;
use crate::basic_types::ContradictionError;
use crate::basic_types::EntityId;
use crate::basic_types::Label;
use crate::bilabel_assert_moderate;
use crate::containers::HashMap;
use crate::containers::KeyedVec;
use crate::options::OutputPolarity;
use crate::options::StartPolicy;
use crate::options::SolverOptions;

/// A colour for every representative of a [`Partition`].
#[derive(Clone, Debug)]
pub(crate) struct Colouring {
    colours: KeyedVec<EntityId, Option<Colour>>,
}

impl Colouring {
    /// The colour of `representative`.
    ///
    /// # Panics
    /// If `representative` was not coloured, which cannot happen for a colouring returned by
    /// [`BipartiteColourer::colour`].
    pub(crate) fn colour(&self, representative: EntityId) -> Colour {
        self.colours[representative]
            .expect("Expected every representative to be coloured after colouring")
    }

    /// Whether every edge of `graph` joins two distinct colours.
    pub(crate) fn is_proper(&self, graph: &ConstraintGraph) -> bool {
        graph
            .edges()
            .all(|(a, b)| self.colours[a].is_some() && self.colours[a] != self.colours[b])
    }
}

/// Two-colours the [`ConstraintGraph`], one breadth-first traversal per connected component.
#[derive(Debug)]
pub(crate) struct BipartiteColourer<'a> {
    graph: &'a ConstraintGraph,
    partition: &'a Partition,
    options: SolverOptions,
    /// The entities of each class, keyed by representative.
    members: KeyedVec<EntityId, Vec<EntityId>>,
    num_components: usize,
    num_attempts: usize,
}

impl<'a> BipartiteColourer<'a> {
    pub(crate) fn new(
        graph: &'a ConstraintGraph,
        partition: &'a Partition,
        options: SolverOptions,
    ) -> Self {
        BipartiteColourer {
            graph,
            partition,
            options,
            members: partition.members(),
            num_components: 0,
            num_attempts: 0,
        }
    }

    /// The number of connected components coloured so far.
    pub(crate) fn num_components(&self) -> usize {
        self.num_components
    }

    /// The number of breadth-first traversals performed so far.
    pub(crate) fn num_attempts(&self) -> usize {
        self.num_attempts
    }

    /// Colours every representative.
    ///
    /// The component of entity 0 is coloured first, the remaining components follow in ascending
    /// order of their representatives. The start colour of every component is decided by the
    /// [`StartPolicy`].
    pub(crate) fn colour(&mut self) -> Result<Colouring, ContradictionError> {
        let mut colouring = Colouring {
            colours: KeyedVec::with_len(self.partition.num_entities(), None),
        };

        for root in self.component_roots() {
            if colouring.colours[root].is_some() {
                continue;
            }

            let component = match self.options.start_policy {
                StartPolicy::FixedStart => self.colour_component(root, Colour::One)?,
                StartPolicy::LexicographicallyMinimal => self.colour_component_minimal(root)?,
            };

            debug!(
                "coloured component of {root} with {} classes",
                component.len()
            );
            self.num_components += 1;

            for (representative, colour) in component {
                colouring.colours[representative] = Some(colour);
            }
        }

        bilabel_assert_moderate!(
            colouring.is_proper(self.graph),
            "adjacent classes must be coloured differently"
        );

        Ok(colouring)
    }

    /// The representatives in the order in which their components are visited.
    fn component_roots(&self) -> Vec<EntityId> {
        if self.partition.num_entities() == 0 {
            return vec![];
        }

        let first = self.partition.find(EntityId::new(0));

        std::iter::once(first)
            .chain(
                self.partition
                    .representatives()
                    .filter(|&representative| representative != first),
            )
            .collect()
    }

    /// Colours the component of `root` twice, once for each start colour, and keeps the
    /// colouring with the lexicographically smaller rendering.
    fn colour_component_minimal(
        &mut self,
        root: EntityId,
    ) -> Result<Vec<(EntityId, Colour)>, ContradictionError> {
        let starting_one = self.colour_component(root, Colour::One)?;
        let starting_zero = self.colour_component(root, Colour::Zero)?;

        let polarity = self.options.output_polarity;
        if self.render(&starting_zero, polarity) < self.render(&starting_one, polarity) {
            Ok(starting_zero)
        } else {
            Ok(starting_one)
        }
    }

    /// Renders the labels of all entities in the classes of `component`, in entity order.
    fn render(&self, component: &[(EntityId, Colour)], polarity: OutputPolarity) -> String {
        component
            .iter()
            .flat_map(|&(representative, colour)| {
                self.members[representative]
                    .iter()
                    .map(move |&entity| (entity, colour))
            })
            .sorted_by_key(|&(entity, _)| entity)
            .map(|(_, colour)| polarity.render(Label::from(colour)))
            .collect()
    }

    /// Breadth-first traversal of the component of `root`, which receives `start`.
    ///
    /// Returns the colour of every representative in the component, in the order they were
    /// reached.
    fn colour_component(
        &mut self,
        root: EntityId,
        start: Colour,
    ) -> Result<Vec<(EntityId, Colour)>, ContradictionError> {
        self.num_attempts += 1;

        let mut colours: HashMap<EntityId, Colour> = HashMap::default();
        let mut order = vec![(root, start)];
        let mut queue = VecDeque::from([root]);
        let _ = colours.insert(root, start);

        while let Some(node) = queue.pop_front() {
            let node_colour = colours[&node];

            for &neighbour in self.graph.neighbours(node) {
                match colours.get(&neighbour) {
                    None => {
                        let neighbour_colour = node_colour.opposite();
                        let _ = colours.insert(neighbour, neighbour_colour);
                        order.push((neighbour, neighbour_colour));
                        queue.push_back(neighbour);
                    }
                    Some(&neighbour_colour) if neighbour_colour == node_colour => {
                        return Err(ContradictionError::NotBipartite {
                            first: node,
                            second: neighbour,
                        });
                    }
                    Some(_) => {}
                }
            }
        }

        Ok(order)
    }
}
