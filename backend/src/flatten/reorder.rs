//! Presentation order for flattened rows.
//!
//! The flattener emits collection rows before their parent row. Reversing each
//! run of grouped rows and then the whole sequence puts the parent first and
//! keeps collection elements in their source order:
//!
//! ```text
//! flattened       groups reversed   all reversed
//! A (grouped)     B                 id=2
//! B (grouped)     A                 C
//! id=1            id=1              id=1
//! C (grouped)     C                 A
//! id=2            id=2              B
//! ```
//!
//! Top-level items are never grouped, so they come out last-first.

use crate::models::{FlatRow, MarkedRow};

/// Reverse every maximal run of consecutive grouped rows, in place.
pub fn reverse_groups(rows: &mut [MarkedRow]) {
    let mut start = 0;
    while start < rows.len() {
        if !rows[start].grouped {
            start += 1;
            continue;
        }
        let end = rows[start..]
            .iter()
            .position(|r| !r.grouped)
            .map_or(rows.len(), |offset| start + offset);
        rows[start..end].reverse();
        start = end;
    }
}

/// Group reversal followed by a full reversal, keeping the markers.
pub fn reorder_marked(mut rows: Vec<MarkedRow>) -> Vec<MarkedRow> {
    reverse_groups(&mut rows);
    rows.reverse();
    rows
}

/// Final row order for export. Group markers are dropped.
pub fn reorder(rows: Vec<MarkedRow>) -> Vec<FlatRow> {
    reorder_marked(rows).into_iter().map(|r| r.row).collect()
}
