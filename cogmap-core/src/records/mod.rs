//! Input records and the read-only dataset view.

mod dataset;
mod factor;
mod relation;

pub use dataset::Dataset;
pub use factor::{Factor, FactorKind};
pub use relation::Relation;

/// Sign of a weight: −1.0, 0.0, or +1.0.
///
/// `f64::signum` maps 0.0 to 1.0, which would turn "no influence" into a
/// positive belief, so the zero case is handled explicitly.
pub fn sign(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value.signum()
    }
}
