//! Tie and triad detection across relationship tables

use crate::networks::RelationshipTable;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Directed edge between two handles
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Tie {
    pub source: String,
    pub target: String,
}

impl Tie {
    pub fn new<S: Into<String>>(source: S, target: S) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Length-2 directed path `first -> middle -> last`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Triad {
    pub first: String,
    pub middle: String,
    pub last: String,
}

impl Triad {
    pub fn new<S: Into<String>>(first: S, middle: S, last: S) -> Self {
        Self {
            first: first.into(),
            middle: middle.into(),
            last: last.into(),
        }
    }
}

/// Deduplicated ties and triads, both in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TieAnalysis {
    pub ties: Vec<Tie>,
    pub triads: Vec<Triad>,
}

impl TieAnalysis {
    pub fn tie_count(&self) -> usize {
        self.ties.len()
    }

    pub fn triad_count(&self) -> usize {
        self.triads.len()
    }
}

/// Collect the ties of `tables` (in the order given) and every triad they form.
///
/// Triads come out in the order a pairwise scan over the tie list would
/// produce them: for each tie `(a, b)` in order, every tie `(b, c)` in order.
/// Ties are grouped by source first so each tie only meets its successors.
/// Round trips (`a == c`) and self-loops are kept.
pub fn find_ties_and_triads(tables: &[&RelationshipTable]) -> TieAnalysis {
    let mut ties: Vec<Tie> = Vec::new();
    let mut seen_ties: HashSet<(&str, &str)> = HashSet::new();

    for table in tables {
        for (source, target, _) in table.edges() {
            if seen_ties.insert((source, target)) {
                ties.push(Tie::new(source, target));
            }
        }
    }

    let mut by_source: HashMap<&str, Vec<&str>> = HashMap::new();
    for tie in &ties {
        by_source
            .entry(tie.source.as_str())
            .or_default()
            .push(tie.target.as_str());
    }

    let mut triads: Vec<Triad> = Vec::new();
    let mut seen_triads: HashSet<(&str, &str, &str)> = HashSet::new();

    for tie in &ties {
        let Some(nexts) = by_source.get(tie.target.as_str()) else {
            continue;
        };
        for &last in nexts {
            let key = (tie.source.as_str(), tie.target.as_str(), last);
            if seen_triads.insert(key) {
                triads.push(Triad::new(key.0, key.1, key.2));
            }
        }
    }

    TieAnalysis { ties, triads }
}
