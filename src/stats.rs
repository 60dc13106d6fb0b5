use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Occurrences of each distinct non-null value, most frequent first.
///
/// Equal counts keep the order in which the values were first seen, so the
/// head of the list is also the mode under a first-seen tie-break.
pub fn value_counts<K, I>(values: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = Option<K>>,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for value in values.into_iter().flatten() {
        match positions.get(&value) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }

    // stable: ties stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Most frequent non-null value, `None` when there is none.
pub fn mode<K, I>(values: I) -> Option<K>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = Option<K>>,
{
    value_counts(values).into_iter().next().map(|(value, _)| value)
}

/// Like [`mode`], also returning how often the value occurs.
pub fn mode_with_count<K, I>(values: I) -> Option<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = Option<K>>,
{
    value_counts(values).into_iter().next()
}

/// Number of distinct non-null values.
pub fn distinct_count<K, I>(values: I) -> usize
where
    K: Eq + Hash,
    I: IntoIterator<Item = Option<K>>,
{
    values
        .into_iter()
        .flatten()
        .collect::<std::collections::HashSet<_>>()
        .len()
}

/// Text cells with empty strings treated as missing.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// A labelled value-count table.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueCounts {
    pub label: String,
    pub counts: Vec<(String, usize)>,
}

impl ValueCounts {
    pub fn new(label: impl Into<String>, counts: Vec<(String, usize)>) -> Self {
        Self {
            label: label.into(),
            counts,
        }
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|(value, _)| value == key)
            .map(|(_, count)| *count)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }
}

impl fmt::Display for ValueCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = Table::new();

        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_width(80);

        table.set_header(vec![Cell::new(&self.label), Cell::new("Count")]);

        for (value, count) in &self.counts {
            table.add_row(vec![
                Cell::new(value),
                Cell::new(count).set_alignment(CellAlignment::Right),
            ]);
        }

        write!(f, "{}", table)
    }
}
