//! Property tests for path-effect scoring.

use proptest::prelude::*;

use cogmap_causal::{traversal, CognitiveMap};
use cogmap_core::records::Dataset;
use test_fixtures::{action, goal, relation, state};

/// Build a single-actor chain Act → s0 → s1 → ... → Goal with the given
/// edge weights and goal direction.
fn build_chain(weights: &[f64], direction: f64) -> CognitiveMap {
    let n = weights.len();
    let mut factors = vec![action("P1", "Act"), goal("P1", "Goal", direction)];
    for i in 0..n.saturating_sub(1) {
        factors.push(state("P1", &format!("s{i}")));
    }

    let mut names = vec!["Act".to_string()];
    names.extend((0..n.saturating_sub(1)).map(|i| format!("s{i}")));
    names.push("Goal".to_string());

    let relations = weights
        .iter()
        .enumerate()
        .map(|(i, &w)| relation("P1", &names[i], &names[i + 1], w))
        .collect();

    CognitiveMap::for_actor(&Dataset::new(factors, relations), "P1")
}

/// Nonzero weights with magnitude in [0.1, 5].
fn weight_strategy() -> impl Strategy<Value = f64> {
    (0.1_f64..5.0, prop::bool::ANY).prop_map(|(m, neg)| if neg { -m } else { m })
}

// =============================================================================
// Sign composition along a chain
// =============================================================================
proptest! {
    #[test]
    fn chain_effect_follows_negative_link_parity(
        weights in prop::collection::vec(weight_strategy(), 1..7),
        positive_goal in prop::bool::ANY,
    ) {
        let direction = if positive_goal { 1.0 } else { -1.0 };
        let map = build_chain(&weights, direction);

        let negatives = weights.iter().filter(|w| **w < 0.0).count();
        let product_sign = if negatives % 2 == 0 { 1.0 } else { -1.0 };
        let expected = if product_sign == direction { 1 } else { -1 };

        prop_assert_eq!(map.path_effect("Act", "Goal"), expected);
    }
}

// =============================================================================
// Score is bounded by the number of simple paths
// =============================================================================
proptest! {
    #[test]
    fn effect_magnitude_bounded_by_path_count(
        edges in prop::collection::vec((0_usize..6, 0_usize..6, weight_strategy()), 0..14),
        positive_goal in prop::bool::ANY,
    ) {
        let direction = if positive_goal { 1.0 } else { -1.0 };
        let mut factors = vec![action("P1", "n0"), goal("P1", "n5", direction)];
        for i in 1..5 {
            factors.push(state("P1", &format!("n{i}")));
        }
        let relations = edges
            .iter()
            .filter(|(from, to, _)| from != to)
            .map(|(from, to, w)| relation("P1", &format!("n{from}"), &format!("n{to}"), *w))
            .collect();

        let map = CognitiveMap::for_actor(&Dataset::new(factors, relations), "P1");
        let paths = match (map.get_node("n0"), map.get_node("n5")) {
            (Some(from), Some(to)) => traversal::simple_paths(&map, from, to).len(),
            _ => 0,
        };

        let effect = map.path_effect("n0", "n5");
        prop_assert!(effect.unsigned_abs() as usize <= paths);
        if paths == 0 {
            prop_assert_eq!(effect, 0);
        }
    }
}
