//! Read-only view over the loaded factor and relation tables.

use std::collections::HashSet;

use tracing::debug;

use crate::config::AnalysisConfig;
use crate::errors::{CogmapResult, RecordError};

use super::{Factor, FactorKind, Relation};

/// The full input snapshot: every actor's factors and relations.
///
/// Loaded once by an external reader, never mutated afterwards. All lookup
/// methods resolve duplicates first-match-wins, matching the source-data
/// quality assumption of the spreadsheet pipeline.
///
/// # Examples
///
/// ```
/// use cogmap_core::records::{Dataset, Factor, FactorKind, Relation};
///
/// let dataset = Dataset::new(
///     vec![Factor {
///         variable: "Growth".to_string(),
///         kind: FactorKind::Goal,
///         actor: "P1".to_string(),
///         direction: Some(1.0),
///     }],
///     vec![],
/// );
/// assert_eq!(dataset.actors(), vec!["P1"]);
/// assert_eq!(dataset.direction_of("P1", "Growth"), Some(1.0));
/// assert_eq!(dataset.relation_sign("P1", "A", "B"), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Dataset {
    factors: Vec<Factor>,
    relations: Vec<Relation>,
}

impl Dataset {
    pub fn new(factors: Vec<Factor>, relations: Vec<Relation>) -> Self {
        Self { factors, relations }
    }

    pub fn factors(&self) -> &[Factor] {
        &self.factors
    }

    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// Distinct actor identifiers in first-appearance order.
    pub fn actors(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.factors
            .iter()
            .map(|f| f.actor.as_str())
            .filter(|a| seen.insert(*a))
            .collect()
    }

    /// All factor records held by one actor.
    pub fn factors_of<'a, 'b>(
        &'a self,
        actor: &'b str,
    ) -> impl Iterator<Item = &'a Factor> + use<'a, 'b> {
        self.factors.iter().filter(move |f| f.actor == actor)
    }

    /// All relation records held by one actor.
    pub fn relations_of<'a, 'b>(
        &'a self,
        actor: &'b str,
    ) -> impl Iterator<Item = &'a Relation> + use<'a, 'b> {
        self.relations.iter().filter(move |r| r.actor == actor)
    }

    /// Distinct variable names of one actor, optionally filtered by kind,
    /// in first-appearance order.
    pub fn variables_of(&self, actor: &str, kind: Option<&FactorKind>) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.factors_of(actor)
            .filter(|f| kind.map_or(true, |k| f.kind == *k))
            .map(|f| f.variable.as_str())
            .filter(|v| seen.insert(*v))
            .collect()
    }

    /// Distinct goal variable names of one actor.
    pub fn goals_of(&self, actor: &str) -> Vec<&str> {
        self.variables_of(actor, Some(&FactorKind::Goal))
    }

    /// Distinct variable names across all actors, optionally filtered by
    /// kind, in first-appearance order.
    pub fn distinct_variables(&self, kind: Option<&FactorKind>) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.factors
            .iter()
            .filter(|f| kind.map_or(true, |k| f.kind == *k))
            .map(|f| f.variable.as_str())
            .filter(|v| seen.insert(*v))
            .collect()
    }

    /// Whether the actor holds the variable as a factor of any kind.
    pub fn holds(&self, actor: &str, variable: &str) -> bool {
        self.factors_of(actor).any(|f| f.variable == variable)
    }

    /// First factor record for (actor, variable), if any.
    pub fn factor_of(&self, actor: &str, variable: &str) -> Option<&Factor> {
        self.factors_of(actor).find(|f| f.variable == variable)
    }

    /// Declared direction for (actor, variable), if any.
    pub fn direction_of(&self, actor: &str, variable: &str) -> Option<f64> {
        self.factor_of(actor, variable).and_then(|f| f.direction)
    }

    /// Sign of the actor's belief in the causal link `from → to`.
    ///
    /// 0.0 when the actor has no such relation recorded — a valid
    /// "no belief" state, not missing data.
    pub fn relation_sign(&self, actor: &str, from: &str, to: &str) -> f64 {
        self.relations_of(actor)
            .find(|r| r.from == from && r.to == to)
            .map(Relation::sign)
            .unwrap_or(0.0)
    }

    /// Strict validation pass over the laxities the default pipeline
    /// tolerates. Returns the first finding for each enabled toggle's
    /// category, scanning records in load order.
    pub fn validate(&self, config: &AnalysisConfig) -> CogmapResult<()> {
        if config.reject_duplicate_factors {
            let mut seen = HashSet::new();
            for f in &self.factors {
                if !seen.insert((f.actor.as_str(), f.variable.as_str())) {
                    return Err(RecordError::DuplicateFactor {
                        actor: f.actor.clone(),
                        variable: f.variable.clone(),
                    }
                    .into());
                }
            }
        }

        if config.reject_duplicate_relations {
            let mut seen = HashSet::new();
            for r in &self.relations {
                if !seen.insert((r.actor.as_str(), r.from.as_str(), r.to.as_str())) {
                    return Err(RecordError::DuplicateRelation {
                        actor: r.actor.clone(),
                        from: r.from.clone(),
                        to: r.to.clone(),
                    }
                    .into());
                }
            }
        }

        if config.enforce_declared_endpoints {
            for r in &self.relations {
                for endpoint in [&r.from, &r.to] {
                    if !self.holds(&r.actor, endpoint) {
                        return Err(RecordError::UnknownEndpoint {
                            actor: r.actor.clone(),
                            variable: endpoint.clone(),
                        }
                        .into());
                    }
                }
            }
        }

        if config.require_goal_directions {
            for f in &self.factors {
                if f.is_goal() && f.direction.is_none() {
                    return Err(RecordError::MissingDirection {
                        actor: f.actor.clone(),
                        variable: f.variable.clone(),
                    }
                    .into());
                }
            }
        }

        debug!(
            factors = self.factors.len(),
            relations = self.relations.len(),
            "dataset validated"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factor(actor: &str, variable: &str, kind: FactorKind, direction: Option<f64>) -> Factor {
        Factor {
            variable: variable.to_string(),
            kind,
            actor: actor.to_string(),
            direction,
        }
    }

    fn relation(actor: &str, from: &str, to: &str, effect: f64) -> Relation {
        Relation {
            from: from.to_string(),
            to: to.to_string(),
            effect,
            actor: actor.to_string(),
        }
    }

    #[test]
    fn actors_keep_first_appearance_order() {
        let data = Dataset::new(
            vec![
                factor("P2", "A", FactorKind::State, None),
                factor("P1", "A", FactorKind::State, None),
                factor("P2", "B", FactorKind::State, None),
            ],
            vec![],
        );
        assert_eq!(data.actors(), vec!["P2", "P1"]);
    }

    #[test]
    fn relation_sign_first_match_wins() {
        let data = Dataset::new(
            vec![],
            vec![
                relation("P1", "A", "B", -1.0),
                relation("P1", "A", "B", 1.0),
            ],
        );
        assert_eq!(data.relation_sign("P1", "A", "B"), -1.0);
    }

    #[test]
    fn relation_sign_absent_is_neutral_zero() {
        let data = Dataset::new(vec![], vec![relation("P1", "A", "B", 1.0)]);
        assert_eq!(data.relation_sign("P1", "B", "A"), 0.0);
        assert_eq!(data.relation_sign("P2", "A", "B"), 0.0);
    }

    #[test]
    fn strict_validation_flags_duplicate_factor() {
        let data = Dataset::new(
            vec![
                factor("P1", "A", FactorKind::State, None),
                factor("P1", "A", FactorKind::State, None),
            ],
            vec![],
        );
        assert!(data.validate(&AnalysisConfig::default()).is_ok());
        assert!(data.validate(&AnalysisConfig::strict()).is_err());
    }

    #[test]
    fn strict_validation_flags_undeclared_endpoint() {
        let data = Dataset::new(
            vec![factor("P1", "A", FactorKind::State, None)],
            vec![relation("P1", "A", "Ghost", 1.0)],
        );
        assert!(data.validate(&AnalysisConfig::default()).is_ok());
        let err = data.validate(&AnalysisConfig::strict()).unwrap_err();
        assert!(err.to_string().contains("Ghost"));
    }
}
