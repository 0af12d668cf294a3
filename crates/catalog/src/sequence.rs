//! Display-order sequencing of per-product-line buckets.

use std::collections::{HashMap, HashSet};

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::product::ProductLine;

/// Mapping from product-line name to a value, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequenced<T> {
    entries: Vec<(String, T)>,
}

impl<T> Sequenced<T> {
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<(String, T)> {
        self.entries
    }
}

/// Serialized as a JSON object whose key order is the display order.
impl<T: Serialize> Serialize for Sequenced<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Order `buckets` by the product lines' `display_order`.
///
/// - Ties keep the order of `lines` (stable sort).
/// - A line without a bucket gets `T::default()`.
/// - A bucket without a line is omitted. This hides products of stale or
///   renamed lines instead of rendering orphan groups.
/// - A line name listed twice keeps its first position.
pub fn sequence<T: Default>(
    mut buckets: HashMap<String, T>,
    lines: &[ProductLine],
) -> Sequenced<T> {
    let mut ordered: Vec<&ProductLine> = lines.iter().collect();
    ordered.sort_by_key(|line| line.display_order);

    let mut seen: HashSet<&str> = HashSet::with_capacity(ordered.len());
    let mut entries = Vec::with_capacity(ordered.len());
    for line in ordered {
        if !seen.insert(line.name.as_str()) {
            continue;
        }
        let value = buckets.remove(&line.name).unwrap_or_default();
        entries.push((line.name.clone(), value));
    }

    if !buckets.is_empty() {
        let mut orphaned: Vec<&str> = buckets.keys().map(String::as_str).collect();
        orphaned.sort_unstable();
        tracing::debug!(?orphaned, "dropping buckets without a product line");
    }

    Sequenced { entries }
}
