use serde::{Deserialize, Serialize};

/// Count and share of a single target class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassCount {
    pub name: String,
    pub count: usize,
    pub percentage: f64,
}

/// Class balance of the sample table, ordered by descending count
/// (ties broken by class name).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassBalance {
    pub total: usize,
    pub classes: Vec<ClassCount>,
}

/// Location and spread statistics for one feature column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureSummary {
    pub name: String,
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub range: f64,
}

/// Full pairwise Pearson correlation matrix over the feature columns.
///
/// `values[i][j]` holds the correlation between `names[i]` and `names[j]`;
/// the matrix is symmetric with a unit diagonal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub names: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Number of feature columns covered by the matrix.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
