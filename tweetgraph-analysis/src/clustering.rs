//! Topic clustering of post texts (TF-IDF + k-means)

use crate::error::{AnalysisError, Result};
use crate::stop_words::StopWords;
use crate::vectorizer::{TfIdfVectorizer, DEFAULT_MAX_FEATURES};
use linfa::dataset::AsTargets;
use linfa::traits::{Fit, Predict};
use linfa::DatasetBase;
use linfa_clustering::KMeans;
use rand_xoshiro::rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info};

/// Default k-means iteration cap
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Configuration for the clustering engine
#[derive(Debug, Clone)]
pub struct ClusteringConfig {
    /// Number of clusters (k-means `k`)
    pub num_clusters: usize,

    /// Vocabulary size of the TF-IDF vectorizer
    pub max_features: usize,

    /// Stop-word list removed before vocabulary selection
    pub stop_words: StopWords,

    /// Iteration cap per k-means run
    pub max_iterations: usize,

    /// Fixed centroid-initialization seed, for reproducible runs
    pub seed: Option<u64>,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            num_clusters: 10,
            max_features: DEFAULT_MAX_FEATURES,
            stop_words: StopWords::English,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: None,
        }
    }
}

/// Record id to cluster label, in input order
#[derive(Debug, Clone, Serialize)]
pub struct ClusterAssignments {
    num_clusters: usize,
    labels: Vec<(i64, usize)>,
    #[serde(skip)]
    by_id: HashMap<i64, usize>,
}

impl ClusterAssignments {
    /// Pair `ids` with `labels`; the two must be the same length and every
    /// label must lie in `0..num_clusters`.
    pub fn new(num_clusters: usize, ids: &[i64], labels: &[usize]) -> Result<Self> {
        if ids.len() != labels.len() {
            return Err(AnalysisError::clustering(format!(
                "{} ids but {} labels",
                ids.len(),
                labels.len()
            )));
        }
        if let Some(bad) = labels.iter().find(|&&l| l >= num_clusters) {
            return Err(AnalysisError::clustering(format!(
                "label {} outside 0..{}",
                bad, num_clusters
            )));
        }

        let labels: Vec<(i64, usize)> = ids.iter().copied().zip(labels.iter().copied()).collect();
        let by_id = labels.iter().copied().collect();

        Ok(Self {
            num_clusters,
            labels,
            by_id,
        })
    }

    pub fn num_clusters(&self) -> usize {
        self.num_clusters
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn label_of(&self, id: i64) -> Option<usize> {
        self.by_id.get(&id).copied()
    }

    /// `(id, label)` pairs in input order
    pub fn iter(&self) -> impl Iterator<Item = (i64, usize)> + '_ {
        self.labels.iter().copied()
    }

    /// Ids assigned to `label`, in input order
    pub fn ids_in(&self, label: usize) -> impl Iterator<Item = i64> + '_ {
        self.labels
            .iter()
            .filter(move |(_, l)| *l == label)
            .map(|(id, _)| *id)
    }

    /// Number of ids per label, indexed by label
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.num_clusters];
        for (_, label) in &self.labels {
            sizes[*label] += 1;
        }
        sizes
    }
}

/// Vectorizes texts and partitions them with k-means
pub struct TextClusterer {
    config: ClusteringConfig,
}

impl TextClusterer {
    pub fn new(config: ClusteringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClusteringConfig {
        &self.config
    }

    /// Cluster `(id, text)` documents; labels come back aligned with the input.
    pub fn cluster(&self, documents: &[(i64, String)]) -> Result<ClusterAssignments> {
        let k = self.config.num_clusters;

        if documents.is_empty() {
            return Err(AnalysisError::config("no text to cluster"));
        }
        if k == 0 {
            return Err(AnalysisError::config("number of clusters must be at least 1"));
        }
        if k > documents.len() {
            return Err(AnalysisError::config(format!(
                "{} clusters requested but only {} unique documents",
                k,
                documents.len()
            )));
        }

        let texts: Vec<&str> = documents.iter().map(|(_, t)| t.as_str()).collect();
        let mut vectorizer = TfIdfVectorizer::new(self.config.max_features, self.config.stop_words);
        let features = vectorizer.fit_transform(&texts)?;

        info!(
            "Clustering {} documents into {} clusters ({} terms)",
            documents.len(),
            k,
            vectorizer.vocabulary().len()
        );

        let rng = match self.config.seed {
            Some(seed) => Xoshiro256Plus::seed_from_u64(seed),
            None => Xoshiro256Plus::seed_from_u64(rand::random()),
        };

        let dataset = DatasetBase::from(features);
        let model = KMeans::params_with_rng(k, rng)
            .max_n_iterations(self.config.max_iterations as u64)
            .tolerance(1e-6)
            .fit(&dataset)
            .map_err(|e| AnalysisError::clustering(format!("k-means fit failed: {}", e)))?;

        let predictions = model.predict(&dataset);
        let labels: Vec<usize> = predictions.as_targets().iter().copied().collect();

        let ids: Vec<i64> = documents.iter().map(|(id, _)| *id).collect();
        let assignments = ClusterAssignments::new(k, &ids, &labels)?;

        debug!("Cluster sizes: {:?}", assignments.cluster_sizes());
        info!("Finished clustering data");

        Ok(assignments)
    }
}
