use crate::types::SalesRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_TOP_N: usize = 10;

/// Units sold for one item label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSales {
    /// Item label as it appeared in the export; `None` when the row had no item cell.
    pub name: Option<String>,
    pub value: i64,
}

/// Sums `quantity` per item label and keeps the `top_n` largest totals.
///
/// Rows without an item label are tallied under that missing label rather
/// than dropped. Equal totals keep the order in which their label was first
/// seen. Totals saturate at `i64::MAX`.
pub fn rank_items(records: &[SalesRecord], top_n: usize) -> Vec<ItemSales> {
    let mut tallies: Vec<ItemSales> = Vec::new();
    let mut positions: HashMap<Option<&str>, usize> = HashMap::new();

    for record in records {
        let label = record.item.as_deref();
        let idx = *positions.entry(label).or_insert_with(|| {
            tallies.push(ItemSales {
                name: label.map(str::to_string),
                value: 0,
            });
            tallies.len() - 1
        });
        tallies[idx].value = tallies[idx].value.saturating_add(record.quantity);
    }

    tallies.sort_by(|a, b| b.value.cmp(&a.value));
    tallies.truncate(top_n);
    tallies
}
