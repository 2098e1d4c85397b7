//! Corpus files: a JSON array of records, or JSON Lines

use crate::error::Result;
use crate::record::Record;
use std::fs;
use std::path::Path;
use tracing::info;

/// Load records from `path`.
///
/// A document starting with `[` is read as one JSON array; anything else is
/// read as one record per non-empty line.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let contents = fs::read_to_string(path.as_ref())?;
    let records = parse_records(&contents)?;
    info!(
        "Loaded {} records from {}",
        records.len(),
        path.as_ref().display()
    );
    Ok(records)
}

pub fn parse_records(contents: &str) -> Result<Vec<Record>> {
    if contents.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(contents)?);
    }

    contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str::<Record>(line).map_err(Into::into))
        .collect()
}

/// Write `records` to `path` as a JSON array
pub fn save_records<P: AsRef<Path>>(path: P, records: &[Record]) -> Result<()> {
    let json = serde_json::to_string(records)?;
    fs::write(path.as_ref(), json)?;
    info!(
        "Stored {} records as {}",
        records.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// The first `n` records
pub fn sample(records: &[Record], n: usize) -> &[Record] {
    &records[..n.min(records.len())]
}
