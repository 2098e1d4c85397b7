//! End-to-end corpus analysis
//!
//! dedup -> clustering -> membership -> networks and ties, once for the
//! whole corpus and once per cluster.

use crate::clustering::{ClusterAssignments, TextClusterer};
use crate::config::AnalysisConfig;
use crate::dedup::deduplicate;
use crate::error::Result;
use crate::membership::{resolve_members, ClusterMembers};
use crate::networks::{
    hashtag_network, mentions_network, quote_network, retweet_network, HashtagNetwork,
    RelationshipTable,
};
use crate::ranking::{find_power_users_and_topics, PowerUsersAndTopics};
use crate::record::Record;
use crate::ties::{find_ties_and_triads, TieAnalysis};
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, warn};

/// Which records an analysis covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    Corpus,
    Cluster(usize),
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Corpus => write!(f, "general"),
            Scope::Cluster(label) => write!(f, "cluster {}", label),
        }
    }
}

/// Networks, ties and rankings for one scope
#[derive(Debug, Clone, Serialize)]
pub struct ScopeAnalysis {
    pub scope: Scope,
    pub record_count: usize,
    pub mentions: RelationshipTable,
    pub retweets: RelationshipTable,
    pub quotes: RelationshipTable,
    pub hashtags: HashtagNetwork,
    pub ties: TieAnalysis,
    pub ranking: PowerUsersAndTopics,
}

impl ScopeAnalysis {
    pub fn analyze(
        scope: Scope,
        records: &[&Record],
        top_users: usize,
        top_hashtags: usize,
    ) -> Self {
        let mentions = mentions_network(records.iter().copied());
        let retweets = retweet_network(records.iter().copied());
        let quotes = quote_network(records.iter().copied());
        let hashtags = hashtag_network(records.iter().copied());
        let ties = find_ties_and_triads(&[&mentions, &retweets, &quotes]);
        let ranking = find_power_users_and_topics(records.iter().copied(), top_users, top_hashtags);

        debug!(
            "{}: {} mention sources, {} retweet sources, {} quote sources, {} hashtags",
            scope,
            mentions.len(),
            retweets.len(),
            quotes.len(),
            hashtags.len()
        );

        Self {
            scope,
            record_count: records.len(),
            mentions,
            retweets,
            quotes,
            hashtags,
            ties,
            ranking,
        }
    }

    pub fn tie_count(&self) -> usize {
        self.ties.tie_count()
    }

    pub fn triad_count(&self) -> usize {
        self.ties.triad_count()
    }

    /// One-line tie/triad summary for reports
    pub fn summary_line(&self) -> String {
        format!(
            "Within {} data there are {} ties and {} triads",
            self.scope,
            self.tie_count(),
            self.triad_count()
        )
    }
}

/// Full result of a corpus run
#[derive(Debug, Clone, Serialize)]
pub struct CorpusAnalysis<'a> {
    pub duplicates: usize,
    pub assignments: ClusterAssignments,
    pub members: ClusterMembers<'a>,
    pub corpus: ScopeAnalysis,
    pub clusters: Vec<ScopeAnalysis>,
}

/// Runs the whole analysis with one configuration
pub struct CorpusAnalyzer {
    config: AnalysisConfig,
}

impl CorpusAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze `records`, the full undeduplicated corpus
    pub fn analyze<'a>(&self, records: &'a [Record]) -> Result<CorpusAnalysis<'a>> {
        info!("Analyzing corpus of {} records", records.len());

        // 1. Unique texts
        let deduplicated = deduplicate(records);
        info!("Removed {} duplicates", deduplicated.duplicates);

        // 2. Topic clusters
        let clusterer = TextClusterer::new(self.config.clustering());
        let assignments = clusterer.cluster(deduplicated.index.entries())?;

        // 3. Back to full records
        let members = resolve_members(&assignments, records);

        // 4. Whole-corpus networks
        let all: Vec<&Record> = records.iter().collect();
        let corpus = ScopeAnalysis::analyze(
            Scope::Corpus,
            &all,
            self.config.top_n_users,
            self.config.top_n_hashtags,
        );
        info!("{}", corpus.summary_line());

        // 5. Per-cluster networks
        let empty: Vec<&Record> = Vec::new();
        let clusters: Vec<ScopeAnalysis> = (0..assignments.num_clusters())
            .into_par_iter()
            .map(|label| {
                let cluster_records = members.get(&label).unwrap_or(&empty);
                if cluster_records.is_empty() {
                    warn!("Cluster {} is empty", label);
                }
                ScopeAnalysis::analyze(
                    Scope::Cluster(label),
                    cluster_records,
                    self.config.top_n_users,
                    self.config.top_n_hashtags,
                )
            })
            .collect();

        for cluster in &clusters {
            info!("{}", cluster.summary_line());
        }

        Ok(CorpusAnalysis {
            duplicates: deduplicated.duplicates,
            assignments,
            members,
            corpus,
            clusters,
        })
    }
}

/// Analyze `records` with `config`
pub fn analyze_corpus<'a>(
    records: &'a [Record],
    config: &AnalysisConfig,
) -> Result<CorpusAnalysis<'a>> {
    CorpusAnalyzer::new(config.clone()).analyze(records)
}
