//! Corpus deduplication into a unique-id text index

use crate::record::Record;
use serde::Serialize;
use std::collections::HashSet;

/// Record id to text, first-seen record per id, in encounter order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UniqueTextIndex {
    entries: Vec<(i64, String)>,
    #[serde(skip)]
    seen: HashSet<i64>,
}

impl UniqueTextIndex {
    /// Insert `text` under `id` unless the id is already present.
    /// Returns false for a duplicate id.
    pub fn insert(&mut self, id: i64, text: &str) -> bool {
        if !self.seen.insert(id) {
            return false;
        }
        self.entries.push((id, text.to_string()));
        true
    }

    pub fn contains(&self, id: i64) -> bool {
        self.seen.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(id, text)` pairs in encounter order
    pub fn entries(&self) -> &[(i64, String)] {
        &self.entries
    }

    pub fn ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }
}

/// Output of [`deduplicate`]
#[derive(Debug, Clone, Default)]
pub struct Deduplicated {
    pub index: UniqueTextIndex,
    pub duplicates: usize,
}

/// Build the unique-text index from raw records.
///
/// A record qualifies only when it carries an id, a text and a user. The
/// first qualifying record per id wins; later ones only bump the duplicate
/// counter, even when their text differs.
pub fn deduplicate<'a, I>(records: I) -> Deduplicated
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut result = Deduplicated::default();

    for record in records {
        let (Some(id), Some(text), Some(_)) = (record.id, record.text.as_deref(), &record.user)
        else {
            continue;
        };

        if !result.index.insert(id, text) {
            result.duplicates += 1;
        }
    }

    result
}
