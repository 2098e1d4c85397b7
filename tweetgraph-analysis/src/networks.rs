//! Interaction network builders
//!
//! Mentions, retweets and quotes each yield a weighted directed
//! [`RelationshipTable`] from author handle to target handle. Hashtags yield
//! a [`HashtagNetwork`] of co-occurring tags instead.

use crate::record::Record;
use serde::Serialize;
use std::collections::BTreeMap;

/// Source handle -> target handle -> count (always >= 1)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RelationshipTable {
    edges: BTreeMap<String, BTreeMap<String, u32>>,
}

impl RelationshipTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, source: &str, target: &str) {
        *self
            .edges
            .entry(source.to_string())
            .or_default()
            .entry(target.to_string())
            .or_insert(0) += 1;
    }

    pub fn weight(&self, source: &str, target: &str) -> u32 {
        self.edges
            .get(source)
            .and_then(|targets| targets.get(target))
            .copied()
            .unwrap_or(0)
    }

    /// Targets of `source` with their counts
    pub fn targets(&self, source: &str) -> Option<&BTreeMap<String, u32>> {
        self.edges.get(source)
    }

    /// Sum of all counts attributed to `source`
    pub fn out_weight(&self, source: &str) -> u32 {
        self.edges
            .get(source)
            .map(|targets| targets.values().sum())
            .unwrap_or(0)
    }

    /// Number of distinct sources
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// `(source, target, count)` for every non-zero entry
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, u32)> + '_ {
        self.edges.iter().flat_map(|(source, targets)| {
            targets
                .iter()
                .filter(|(_, count)| **count > 0)
                .map(move |(target, count)| (source.as_str(), target.as_str(), *count))
        })
    }
}

/// Who mentions whom, for original posts only.
///
/// A record applies when it has an author, is not a retweet, has
/// `is_quote_status == false` and mentions at least one handle. Every
/// mention counts once.
pub fn mentions_network<'a, I>(records: I) -> RelationshipTable
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut table = RelationshipTable::new();

    for record in records {
        let Some(author) = record.author() else {
            continue;
        };
        if record.is_retweet() || record.is_quote() != Some(false) {
            continue;
        }
        for mentioned in record.mentioned_handles() {
            table.increment(author, mentioned);
        }
    }

    table
}

/// Who retweets whom
pub fn retweet_network<'a, I>(records: I) -> RelationshipTable
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut table = RelationshipTable::new();

    for record in records {
        if let (Some(author), Some(original)) = (record.author(), record.retweeted_author()) {
            table.increment(author, original);
        }
    }

    table
}

/// Who quotes whom
pub fn quote_network<'a, I>(records: I) -> RelationshipTable
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut table = RelationshipTable::new();

    for record in records {
        if let (Some(author), Some(quoted)) = (record.author(), record.quoted_author()) {
            table.increment(author, quoted);
        }
    }

    table
}

/// Hashtag -> other hashtags seen in the same record, without repeats
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HashtagNetwork {
    cooccurrences: BTreeMap<String, Vec<String>>,
}

impl HashtagNetwork {
    /// Co-occurring tags of `hashtag` in first-seen order
    pub fn get(&self, hashtag: &str) -> Option<&[String]> {
        self.cooccurrences.get(hashtag).map(Vec::as_slice)
    }

    /// Number of distinct hashtags
    pub fn len(&self) -> usize {
        self.cooccurrences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cooccurrences.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.cooccurrences
            .iter()
            .map(|(tag, others)| (tag.as_str(), others.as_slice()))
    }

    fn observe(&mut self, tags: &[&str]) {
        for &tag in tags {
            let others = self.cooccurrences.entry(tag.to_string()).or_default();
            for &other in tags {
                if other != tag && !others.iter().any(|o| o == other) {
                    others.push(other.to_string());
                }
            }
        }
    }
}

/// Which hashtags appear together
pub fn hashtag_network<'a, I>(records: I) -> HashtagNetwork
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut network = HashtagNetwork::default();

    for record in records {
        if let Some(tags) = record.hashtag_texts() {
            network.observe(&tags);
        }
    }

    network
}
