use log::debug;
use log::info;

use super::merge_equalities;
use super::project_labels;
use super::BipartiteColourer;
use super::ConstraintGraph;
use crate::basic_types::ContradictionError;
use crate::basic_types::Labelling;
use crate::basic_types::RelationMatrix;
use crate::bilabel_assert_advanced;
use crate::create_statistics_struct;
use crate::options::SolverOptions;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

create_statistics_struct!(
    /// Counters describing the most recent solve of a [`LabellingSolver`].
    SolverStatistics {
        /// The number of rows of the matrix.
        number_of_entities: usize,
        /// The number of classes after merging `Same` relations.
        number_of_equality_classes: usize,
        /// The number of distinct edges between classes.
        number_of_inequality_edges: usize,
        /// The number of connected components which were coloured.
        number_of_graph_components: usize,
        /// The number of breadth-first traversals; twice the components under the
        /// lexicographically minimal policy.
        number_of_colour_attempts: usize,
});

/// Infers a binary labelling from a [`RelationMatrix`].
///
/// A solve runs four phases: entities related by `Same` are merged into equality classes, the
/// `Different` relations between classes form a constraint graph, the graph is two-coloured and
/// finally every entity receives the label of its class' colour. Any phase may detect that no
/// labelling exists, in which case a [`ContradictionError`] is returned.
///
/// # Example
/// ```rust
/// # use bilabel_core::LabellingSolver;
/// # use bilabel_core::RelationMatrix;
/// # use bilabel_core::options::SolverOptions;
/// let matrix =
///     RelationMatrix::from_values(vec![vec![1, 1, 0], vec![1, 1, -1], vec![0, -1, 1]]).unwrap();
///
/// let mut solver = LabellingSolver::new(SolverOptions::default());
/// let labelling = solver.solve(&matrix).unwrap();
///
/// assert_eq!("110", labelling.to_string());
/// ```
#[derive(Debug, Default)]
pub struct LabellingSolver {
    options: SolverOptions,
    statistics: SolverStatistics,
}

impl LabellingSolver {
    pub fn new(options: SolverOptions) -> Self {
        LabellingSolver {
            options,
            statistics: SolverStatistics::default(),
        }
    }

    pub fn options(&self) -> SolverOptions {
        self.options
    }

    /// Solves `matrix`. Statistics of earlier solves are discarded.
    pub fn solve(&mut self, matrix: &RelationMatrix) -> Result<Labelling, ContradictionError> {
        self.statistics = SolverStatistics {
            number_of_entities: matrix.size(),
            ..Default::default()
        };

        let partition = merge_equalities(matrix);
        self.statistics.number_of_equality_classes = partition.num_classes();
        debug!(
            "merged {} entities into {} equality classes",
            matrix.size(),
            self.statistics.number_of_equality_classes
        );

        let graph = ConstraintGraph::build(matrix, &partition).inspect_err(|error| {
            info!("contradiction while building the constraint graph: {error}");
        })?;
        self.statistics.number_of_inequality_edges = graph.num_edges();
        debug!("constraint graph has {} edges", graph.num_edges());

        let mut colourer = BipartiteColourer::new(&graph, &partition, self.options);
        let colouring = colourer.colour();
        self.statistics.number_of_graph_components = colourer.num_components();
        self.statistics.number_of_colour_attempts = colourer.num_attempts();
        let colouring = colouring.inspect_err(|error| {
            info!("contradiction while colouring the constraint graph: {error}");
        })?;

        let labelling = project_labels(&partition, &colouring, self.options.output_polarity);

        bilabel_assert_advanced!(
            labelling.satisfies(matrix),
            "the labelling must respect every relation of the matrix"
        );

        Ok(labelling)
    }

    /// Logs the statistics of the most recent solve, see [`crate::statistics`].
    pub fn log_statistics(&self) {
        self.statistics.log(StatisticLogger::new("solver"));
    }
}
