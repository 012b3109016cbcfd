#![cfg(test)]

use bilabel_core::options::OutputPolarity;
use bilabel_core::options::SolverOptions;
use bilabel_core::options::StartPolicy;
use bilabel_core::solve;
use bilabel_core::ContradictionError;
use bilabel_core::ContradictionReason;
use bilabel_core::EntityId;
use bilabel_core::Label;
use bilabel_core::Relation;
use bilabel_core::RelationMatrix;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

fn matrix(values: Vec<Vec<i64>>) -> RelationMatrix {
    RelationMatrix::from_values(values).expect("test matrices are well-formed")
}

fn solve_default(matrix: &RelationMatrix) -> Result<String, ContradictionError> {
    solve(matrix, &SolverOptions::default()).map(|labelling| labelling.to_string())
}

fn six_entity_matrix() -> RelationMatrix {
    matrix(vec![
        vec![1, 1, 0, -1, 1, 1],
        vec![0, 1, 0, 0, 1, 0],
        vec![0, -1, 1, 1, -1, 0],
        vec![0, 0, 1, 1, -1, -1],
        vec![1, 1, 0, 0, 1, 1],
        vec![1, 1, -1, -1, 1, 1],
    ])
}

#[test]
fn merged_pair_and_different_third_entity() {
    let result = solve_default(&matrix(vec![
        vec![1, 1, 0],
        vec![1, 1, -1],
        vec![0, -1, 1],
    ]));

    assert_eq!(Ok("110".to_owned()), result);
}

#[test]
fn same_and_different_on_one_pair_is_a_contradiction() {
    let result = solve_default(&matrix(vec![vec![1, 1], vec![-1, 1]]));

    assert_eq!(
        Err(ContradictionError::EqualityVsInequality {
            first: EntityId::new(1),
            second: EntityId::new(0)
        }),
        result
    );
}

#[test]
fn six_entity_example() {
    assert_eq!(Ok("110011".to_owned()), solve_default(&six_entity_matrix()));
}

#[test]
fn empty_matrix_gives_empty_labelling() {
    let labelling = solve(&RelationMatrix::empty(), &SolverOptions::default()).unwrap();

    assert!(labelling.is_empty());
    assert_eq!("", labelling.to_string());
}

#[test]
fn three_mutually_different_entities_are_impossible() {
    let result = solve_default(&matrix(vec![
        vec![0, -1, -1],
        vec![-1, 0, -1],
        vec![-1, -1, 0],
    ]));

    assert_eq!(
        Some(ContradictionReason::NotBipartite),
        result.err().map(|error| error.reason())
    );
}

#[test]
fn odd_cycle_through_merged_classes_is_impossible() {
    // {0, 1} != 2, 2 != 3, 3 != {0, 1}
    let result = solve_default(&matrix(vec![
        vec![1, 1, 0, 0],
        vec![0, 1, -1, 0],
        vec![0, 0, 1, -1],
        vec![-1, 0, 0, 1],
    ]));

    assert_eq!(
        Some(ContradictionReason::NotBipartite),
        result.err().map(|error| error.reason())
    );
}

#[test]
fn chain_of_equalities_contradicts_direct_difference() {
    let result = solve_default(&matrix(vec![
        vec![0, 1, 0, -1],
        vec![0, 0, 1, 0],
        vec![0, 0, 0, 1],
        vec![0, 0, 0, 0],
    ]));

    assert_eq!(
        Err(ContradictionError::EqualityVsInequality {
            first: EntityId::new(0),
            second: EntityId::new(3)
        }),
        result
    );
}

#[test]
fn self_difference_is_a_contradiction() {
    let result = solve_default(&matrix(vec![vec![0, 0], vec![0, -1]]));

    assert_eq!(
        Some(ContradictionReason::EqualityVsInequality),
        result.err().map(|error| error.reason())
    );
}

#[test]
fn isolated_entities_receive_the_start_label() {
    let result = solve_default(&matrix(vec![
        vec![1, -1, 0, 0],
        vec![-1, 1, 0, 0],
        vec![0, 0, 1, 0],
        vec![0, 0, 0, 1],
    ]));

    assert_eq!(Ok("1011".to_owned()), result);
}

#[test]
fn entity_zero_receives_label_a() {
    let labelling = solve(&six_entity_matrix(), &SolverOptions::default()).unwrap();

    assert_eq!(Label::A, labelling.label(EntityId::new(0)));
    assert_eq!(Label::B, labelling.label(EntityId::new(2)));
}

#[test]
fn inverted_polarity_writes_label_b_as_one() {
    let options = SolverOptions {
        output_polarity: OutputPolarity::LabelBIsOne,
        ..Default::default()
    };

    let labelling = solve(&six_entity_matrix(), &options).unwrap();

    assert_eq!("001100", labelling.to_string());
    assert_eq!(Label::A, labelling.label(EntityId::new(0)));
}

#[test]
fn minimal_policy_renders_the_smaller_string_per_component() {
    let options = SolverOptions {
        start_policy: StartPolicy::LexicographicallyMinimal,
        ..Default::default()
    };

    let labelling = solve(&six_entity_matrix(), &options).unwrap();

    assert_eq!("001100", labelling.to_string());
}

#[test]
fn minimal_policy_depends_on_polarity_only_through_rendering() {
    let options = SolverOptions {
        start_policy: StartPolicy::LexicographicallyMinimal,
        output_polarity: OutputPolarity::LabelBIsOne,
    };

    let labelling = solve(&six_entity_matrix(), &options).unwrap();

    assert_eq!("001100", labelling.to_string());
    assert_eq!(Label::A, labelling.label(EntityId::new(0)));
}

#[test]
fn minimal_policy_decides_interleaved_components_independently() {
    // Components {0, 2} and {1, 3} interleave in entity order.
    let options = SolverOptions {
        start_policy: StartPolicy::LexicographicallyMinimal,
        ..Default::default()
    };
    let matrix = matrix(vec![
        vec![0, 0, -1, 0],
        vec![0, 0, 0, -1],
        vec![-1, 0, 0, 0],
        vec![0, -1, 0, 0],
    ]);

    let labelling = solve(&matrix, &options).unwrap();

    assert_eq!("0011", labelling.to_string());
}

/// Generates a matrix whose `Same` and `Different` cells are sparse enough that both outcomes
/// occur regularly.
fn random_matrix(rng: &mut SmallRng, size: usize) -> RelationMatrix {
    let cells = (0..size * size)
        .map(|_| match rng.gen_range(0..10) {
            0 => Relation::Same,
            1 => Relation::Different,
            _ => Relation::Unknown,
        })
        .collect();

    RelationMatrix::from_row_major(size, cells).unwrap()
}

/// Whether any of the `2^n` labellings respects every relation.
fn exists_consistent_labelling(matrix: &RelationMatrix) -> bool {
    let size = matrix.size();

    (0..1_u32 << size).any(|assignment| {
        let bit = |entity: EntityId| (assignment >> entity.id) & 1;
        matrix.cells().all(|(from, to, relation)| match relation {
            Relation::Same => bit(from) == bit(to),
            Relation::Different => bit(from) != bit(to),
            Relation::Unknown => true,
        })
    })
}

#[test]
fn random_matrices_are_solved_soundly_and_completely() {
    let mut rng = SmallRng::seed_from_u64(42);

    for _ in 0..500 {
        let size = rng.gen_range(0..8);
        let matrix = random_matrix(&mut rng, size);

        match solve(&matrix, &SolverOptions::default()) {
            Ok(labelling) => {
                assert_eq!(size, labelling.num_entities());
                assert!(labelling.satisfies(&matrix), "inconsistent for\n{matrix}");
                if size > 0 {
                    assert_eq!(Label::A, labelling.label(EntityId::new(0)));
                }
            }
            Err(error) => assert!(
                !exists_consistent_labelling(&matrix),
                "reported {error} for a satisfiable matrix\n{matrix}"
            ),
        }
    }
}

#[test]
fn repeated_solves_are_identical() {
    let mut rng = SmallRng::seed_from_u64(7);

    for _ in 0..100 {
        let size = rng.gen_range(0..10);
        let matrix = random_matrix(&mut rng, size);

        for start_policy in [StartPolicy::FixedStart, StartPolicy::LexicographicallyMinimal] {
            let options = SolverOptions {
                start_policy,
                ..Default::default()
            };
            let first = solve(&matrix, &options).map(|labelling| labelling.to_string());
            let second = solve(&matrix, &options).map(|labelling| labelling.to_string());

            assert_eq!(first, second);
        }
    }
}

#[test]
fn both_policies_agree_on_satisfiability() {
    let mut rng = SmallRng::seed_from_u64(1234);

    for _ in 0..200 {
        let size = rng.gen_range(1..9);
        let matrix = random_matrix(&mut rng, size);

        let fixed = solve(&matrix, &SolverOptions::default());
        let minimal = solve(
            &matrix,
            &SolverOptions {
                start_policy: StartPolicy::LexicographicallyMinimal,
                ..Default::default()
            },
        );

        assert_eq!(fixed.is_ok(), minimal.is_ok());
        if let Ok(minimal) = minimal {
            assert!(minimal.satisfies(&matrix));
            assert!(minimal.to_string() <= fixed.unwrap().to_string());
        }
    }
}
