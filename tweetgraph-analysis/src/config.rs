//! Analysis configuration

use crate::clustering::{ClusteringConfig, DEFAULT_MAX_ITERATIONS};
use crate::stop_words::StopWords;
use crate::vectorizer::DEFAULT_MAX_FEATURES;
use serde::{Deserialize, Serialize};

/// Options recognized by the analysis pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Number of topic clusters
    pub number_of_clusters: usize,

    /// TF-IDF vocabulary size
    pub max_features: usize,

    /// Stop-word language tag ("english" or "none")
    pub stop_words: StopWords,

    /// k-means iteration cap
    pub max_iterations: usize,

    /// Power users reported per scope
    pub top_n_users: usize,

    /// Topic hashtags reported per scope
    pub top_n_hashtags: usize,

    /// Fixed clustering seed (random when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            number_of_clusters: 10,
            max_features: DEFAULT_MAX_FEATURES,
            stop_words: StopWords::English,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            top_n_users: 1,
            top_n_hashtags: 1,
            seed: None,
        }
    }
}

impl AnalysisConfig {
    pub fn clustering(&self) -> ClusteringConfig {
        ClusteringConfig {
            num_clusters: self.number_of_clusters,
            max_features: self.max_features,
            stop_words: self.stop_words,
            max_iterations: self.max_iterations,
            seed: self.seed,
        }
    }
}
