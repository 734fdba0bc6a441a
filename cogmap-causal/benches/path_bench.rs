use criterion::{criterion_group, criterion_main, Criterion};

use cogmap_causal::CognitiveMap;
use cogmap_core::records::{Dataset, Factor, FactorKind, Relation};

/// Layered DAG: `layers` layers of `width` nodes, every node wired to the
/// whole next layer with alternating signs. Path counts grow as
/// width^(layers-1), which is what drives simple-path enumeration cost.
fn build_layered_map(layers: usize, width: usize) -> CognitiveMap {
    let mut factors = Vec::new();
    let mut relations = Vec::new();

    for layer in 0..layers {
        for slot in 0..width {
            let kind = if layer == 0 {
                FactorKind::Action
            } else if layer == layers - 1 {
                FactorKind::Goal
            } else {
                FactorKind::State
            };
            let direction = (kind == FactorKind::Goal).then_some(1.0);
            factors.push(Factor {
                variable: format!("l{layer}_{slot}"),
                kind,
                actor: "P1".to_string(),
                direction,
            });
        }
    }

    for layer in 0..layers - 1 {
        for from in 0..width {
            for to in 0..width {
                let effect = if (from + to) % 2 == 0 { 1.0 } else { -1.0 };
                relations.push(Relation {
                    from: format!("l{layer}_{from}"),
                    to: format!("l{next}_{to}", next = layer + 1),
                    effect,
                    actor: "P1".to_string(),
                });
            }
        }
    }

    CognitiveMap::for_actor(&Dataset::new(factors, relations), "P1")
}

fn bench_path_effect(c: &mut Criterion) {
    let map = build_layered_map(6, 4);
    c.bench_function("path_effect_layered_6x4", |b| {
        b.iter(|| map.path_effect("l0_0", "l5_0"))
    });
}

fn bench_total_action_effect(c: &mut Criterion) {
    let map = build_layered_map(5, 4);
    c.bench_function("total_action_effect_layered_5x4", |b| {
        b.iter(|| map.total_action_effect("l0_0"))
    });
}

fn bench_map_construction(c: &mut Criterion) {
    let data = {
        let mut factors = Vec::new();
        let mut relations = Vec::new();
        for layer in 0..6 {
            for slot in 0..4 {
                factors.push(Factor {
                    variable: format!("l{layer}_{slot}"),
                    kind: FactorKind::State,
                    actor: "P1".to_string(),
                    direction: None,
                });
            }
        }
        for layer in 0..5 {
            for from in 0..4 {
                for to in 0..4 {
                    relations.push(Relation {
                        from: format!("l{layer}_{from}"),
                        to: format!("l{next}_{to}", next = layer + 1),
                        effect: 1.0,
                        actor: "P1".to_string(),
                    });
                }
            }
        }
        Dataset::new(factors, relations)
    };

    c.bench_function("map_construction_6x4", |b| {
        b.iter(|| CognitiveMap::for_actor(&data, "P1"))
    });
}

criterion_group!(
    benches,
    bench_path_effect,
    bench_total_action_effect,
    bench_map_construction
);
criterion_main!(benches);
