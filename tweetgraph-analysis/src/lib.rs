//! # Tweetgraph Analysis
//!
//! Topic clustering and interaction-graph analysis over a materialized
//! corpus of social media posts:
//! - Deduplication of records into a unique-id text index
//! - TF-IDF vectorization and k-means topic clustering
//! - Mention, retweet, quote and hashtag co-occurrence networks
//! - Tie and length-2 triad detection, over the whole corpus and per cluster
//! - Power-user and topic ranking
//!
//! Everything runs in memory over a plain slice of [`Record`]s; fetching and
//! storing the corpus is left to the caller (see [`corpus`] for file I/O).

pub mod clustering;
pub mod config;
pub mod corpus;
pub mod dedup;
pub mod error;
pub mod membership;
pub mod networks;
pub mod pipeline;
pub mod ranking;
pub mod record;
pub mod stop_words;
pub mod ties;
pub mod vectorizer;

pub use clustering::{ClusterAssignments, ClusteringConfig, TextClusterer};
pub use config::AnalysisConfig;
pub use dedup::{deduplicate, Deduplicated, UniqueTextIndex};
pub use error::{AnalysisError, Result};
pub use membership::{resolve_members, ClusterMembers};
pub use networks::{
    hashtag_network, mentions_network, quote_network, retweet_network, HashtagNetwork,
    RelationshipTable,
};
pub use pipeline::{analyze_corpus, CorpusAnalysis, CorpusAnalyzer, Scope, ScopeAnalysis};
pub use ranking::{find_power_users_and_topics, FrequencyCounter, PowerUsersAndTopics, Ranked};
pub use record::{Entities, Hashtag, Record, User, UserMention};
pub use crate::stop_words::StopWords;
pub use ties::{find_ties_and_triads, Tie, TieAnalysis, Triad};
pub use vectorizer::TfIdfVectorizer;
