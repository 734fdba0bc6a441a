//! Shared dataset builders for the workspace's integration tests.

use cogmap_core::records::{Dataset, Factor, FactorKind, Relation};

/// A factor record with no direction.
pub fn factor(actor: &str, variable: &str, kind: FactorKind) -> Factor {
    Factor {
        variable: variable.to_string(),
        kind,
        actor: actor.to_string(),
        direction: None,
    }
}

/// A goal-typed factor with a declared direction.
pub fn goal(actor: &str, variable: &str, direction: f64) -> Factor {
    Factor {
        variable: variable.to_string(),
        kind: FactorKind::Goal,
        actor: actor.to_string(),
        direction: Some(direction),
    }
}

/// An action-typed factor.
pub fn action(actor: &str, variable: &str) -> Factor {
    factor(actor, variable, FactorKind::Action)
}

/// A state-typed factor.
pub fn state(actor: &str, variable: &str) -> Factor {
    factor(actor, variable, FactorKind::State)
}

/// A relation record.
pub fn relation(actor: &str, from: &str, to: &str, effect: f64) -> Relation {
    Relation {
        from: from.to_string(),
        to: to.to_string(),
        effect,
        actor: actor.to_string(),
    }
}

/// Two actors with overlapping beliefs about a growth goal.
///
/// P1: action Invest → Revenue (+1) → Growth (+1), wants Growth up.
/// P2: action Invest → Costs (+1) → Growth (−1), wants Growth down.
/// Both share the Invest action and the Growth goal with opposite
/// directions, so the pair carries a goal conflict.
pub fn growth_dataset() -> Dataset {
    Dataset::new(
        vec![
            goal("P1", "Growth", 1.0),
            action("P1", "Invest"),
            state("P1", "Revenue"),
            goal("P2", "Growth", -1.0),
            action("P2", "Invest"),
            state("P2", "Costs"),
        ],
        vec![
            relation("P1", "Invest", "Revenue", 1.0),
            relation("P1", "Revenue", "Growth", 1.0),
            relation("P2", "Invest", "Costs", 1.0),
            relation("P2", "Costs", "Growth", -1.0),
        ],
    )
}

/// Single actor with a diamond of paths from one action to one goal.
///
/// Act → X → Goal (product +1) and Act → Y → Goal (product −1), with the
/// goal's direction +1: one supporting and one contradicting path.
pub fn diamond_dataset() -> Dataset {
    Dataset::new(
        vec![
            action("P1", "Act"),
            state("P1", "X"),
            state("P1", "Y"),
            goal("P1", "Goal", 1.0),
        ],
        vec![
            relation("P1", "Act", "X", 1.0),
            relation("P1", "X", "Goal", 1.0),
            relation("P1", "Act", "Y", 1.0),
            relation("P1", "Y", "Goal", -1.0),
        ],
    )
}
