//! Maps cluster labels back onto the original records

use crate::clustering::ClusterAssignments;
use crate::record::Record;
use std::collections::{BTreeMap, HashMap};
use tracing::{info, warn};

/// Records per cluster label, borrowed from the original collection
pub type ClusterMembers<'a> = BTreeMap<usize, Vec<&'a Record>>;

/// Resolve every assigned id to the first record carrying it in `records`.
///
/// `records` is the full, undeduplicated collection. Every label in
/// `0..k` is present in the result, empty or not; records without an id
/// are never matched.
pub fn resolve_members<'a>(
    assignments: &ClusterAssignments,
    records: &'a [Record],
) -> ClusterMembers<'a> {
    let mut first_by_id: HashMap<i64, &'a Record> = HashMap::new();
    for record in records {
        if let Some(id) = record.id {
            first_by_id.entry(id).or_insert(record);
        }
    }

    let mut members: ClusterMembers<'a> = (0..assignments.num_clusters())
        .map(|label| (label, Vec::new()))
        .collect();

    for (id, label) in assignments.iter() {
        match first_by_id.get(&id) {
            Some(record) => members.entry(label).or_default().push(*record),
            None => warn!("No record found for clustered id {}", id),
        }
    }

    for (label, cluster) in &members {
        info!("Found {} records for cluster {}", cluster.len(), label);
    }

    members
}
