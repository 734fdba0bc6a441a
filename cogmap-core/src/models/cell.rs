use serde::{Deserialize, Serialize};

/// One cell of a conflict table.
///
/// `Missing` means the actor does not hold the row's item as a factor —
/// they have no belief about it at all. A real belief that nets out to
/// zero is `Value(0.0)`; the two must never be conflated.
///
/// # Examples
///
/// ```
/// use cogmap_core::models::CellValue;
///
/// let missing = serde_json::to_string(&CellValue::Missing).unwrap();
/// assert_eq!(missing, r#"{"type":"missing"}"#);
/// assert!(CellValue::Value(0.0).value().is_some());
/// assert!(CellValue::Missing.value().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    /// The actor holds no factor for this item.
    Missing,
    /// The computed outcome for this (item, actor) pair.
    Value(f64),
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            CellValue::Missing => None,
            CellValue::Value(v) => Some(*v),
        }
    }
}
