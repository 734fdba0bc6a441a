use serde::{Deserialize, Serialize};

/// One entry of the factor-frequency histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorCount {
    pub variable: String,
    /// Number of factor records carrying this variable name.
    pub count: usize,
}

/// Frequency histogram of factor variable names, sorted by descending
/// count, ties broken by ascending name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequencyTable {
    pub entries: Vec<FactorCount>,
}

impl FrequencyTable {
    pub fn count_of(&self, variable: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.variable == variable)
            .map(|e| e.count)
    }
}
