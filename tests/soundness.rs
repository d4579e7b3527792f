use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use refute::gen::{InstanceShape, random_instance};
use refute::oracle::{EntailmentOracle, TruthTableOracle, VarisatOracle};
use refute::resolution::{Cancellation, ResolutionConfig, prove};

fn single_rule() -> ResolutionConfig {
    ResolutionConfig::default()
        .with_max_iterations(500)
        .with_cancellation(Cancellation::Single)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn single_cancellation_refutations_are_entailments(
        seed in any::<u64>(),
        atoms in 1usize..=5,
        clauses in 0usize..=6,
        width in 1usize..=3,
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shape = InstanceShape { atoms, clauses, width };
        let (kb, goal) = random_instance(&mut rng, &shape).expect("instance");

        let report = prove(&kb, &goal, &single_rule());
        if report.is_refuted() {
            let mut oracle = TruthTableOracle::new();
            prop_assert!(oracle.entails(&kb, &goal).expect("truth table"));
        }
    }

    #[test]
    fn oracles_agree(
        seed in any::<u64>(),
        atoms in 1usize..=6,
        clauses in 0usize..=8,
        width in 1usize..=3,
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shape = InstanceShape { atoms, clauses, width };
        let (kb, goal) = random_instance(&mut rng, &shape).expect("instance");

        let table = TruthTableOracle::new().entails(&kb, &goal).expect("truth table");
        let sat = VarisatOracle::new().entails(&kb, &goal).expect("varisat");
        prop_assert_eq!(table, sat);
    }
}

#[test]
fn same_seed_same_instance() {
    let shape = InstanceShape {
        atoms: 5,
        clauses: 6,
        width: 3,
    };
    let a = random_instance(&mut ChaCha8Rng::seed_from_u64(9), &shape).expect("instance");
    let b = random_instance(&mut ChaCha8Rng::seed_from_u64(9), &shape).expect("instance");
    assert_eq!(a, b);
}

#[test]
fn shape_validation() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let bad = [
        InstanceShape { atoms: 0, clauses: 3, width: 2 },
        InstanceShape { atoms: 3, clauses: 3, width: 0 },
        InstanceShape { atoms: InstanceShape::max_atoms() + 1, clauses: 3, width: 2 },
    ];
    for shape in bad {
        assert!(random_instance(&mut rng, &shape).is_err());
    }
}
