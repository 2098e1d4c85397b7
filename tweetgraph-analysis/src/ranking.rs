//! Frequency ranking of power users and topic hashtags

use crate::record::Record;
use serde::Serialize;
use std::collections::HashMap;

/// A key and its occurrence count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ranked {
    pub key: String,
    pub count: usize,
}

impl Ranked {
    pub fn new<S: Into<String>>(key: S, count: usize) -> Self {
        Self {
            key: key.into(),
            count,
        }
    }
}

/// Occurrence counter that remembers first-encounter order
#[derive(Debug, Clone, Default)]
pub struct FrequencyCounter {
    counts: Vec<Ranked>,
    positions: HashMap<String, usize>,
}

impl FrequencyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: &str) {
        match self.positions.get(key) {
            Some(&pos) => self.counts[pos].count += 1,
            None => {
                self.positions.insert(key.to_string(), self.counts.len());
                self.counts.push(Ranked::new(key, 1));
            }
        }
    }

    pub fn count(&self, key: &str) -> usize {
        self.positions
            .get(key)
            .map(|&pos| self.counts[pos].count)
            .unwrap_or(0)
    }

    /// Distinct keys seen so far
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Up to `n` keys by descending count; equal counts keep encounter order.
    pub fn top(&self, n: usize) -> Vec<Ranked> {
        let mut ranked = self.counts.clone();
        // sort_by is stable
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(n);
        ranked
    }
}

impl<'k> Extend<&'k str> for FrequencyCounter {
    fn extend<I: IntoIterator<Item = &'k str>>(&mut self, keys: I) {
        for key in keys {
            self.add(key);
        }
    }
}

/// Most active authors and most used hashtags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PowerUsersAndTopics {
    pub users: Vec<Ranked>,
    pub hashtags: Vec<Ranked>,
}

/// Rank authors by post count and hashtags by use.
///
/// Records without a user are skipped for the user ranking; records without
/// `entities.hashtags` (or with an empty list) add nothing to the hashtags.
pub fn find_power_users_and_topics<'a, I>(
    records: I,
    top_users: usize,
    top_hashtags: usize,
) -> PowerUsersAndTopics
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut users = FrequencyCounter::new();
    let mut hashtags = FrequencyCounter::new();

    for record in records {
        if let Some(author) = record.author() {
            users.add(author);
        }
        if let Some(tags) = record.hashtag_texts() {
            hashtags.extend(tags);
        }
    }

    PowerUsersAndTopics {
        users: users.top(top_users),
        hashtags: hashtags.top(top_hashtags),
    }
}
