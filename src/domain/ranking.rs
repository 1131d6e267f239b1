//! Stable ranking by signed gain, shared by every view that needs "best",
//! "worst" or a rank number so they agree on ties.

use std::cmp::Ordering;

use super::record::{RecordSet, TradeRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Descending,
    Ascending,
}

/// Records ordered by gain. Equal gains keep input order in both directions.
pub fn rank_by_gain(records: &RecordSet, direction: Direction) -> Vec<&TradeRecord> {
    let mut ranked: Vec<&TradeRecord> = records.iter().collect();
    ranked.sort_by(|a, b| compare(a.gain, b.gain, direction));
    ranked
}

fn compare(a: f64, b: f64, direction: Direction) -> Ordering {
    match direction {
        Direction::Descending => b.total_cmp(&a),
        Direction::Ascending => a.total_cmp(&b),
    }
}
