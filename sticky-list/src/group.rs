//! Partitioning an ordered item sequence into key-ordered groups.
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::ListItem;

/// One section of a grouped list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group<K, T> {
    pub key: K,
    pub items: Vec<T>,
}

impl<K, T> Group<K, T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Groups `items` by `key_of`, ordering groups by the key's natural order.
///
/// Items are never reordered, only partitioned: within a group they keep their input order.
/// Empty input yields no groups.
pub fn group_by_key<T, K: Ord>(
    items: impl IntoIterator<Item = T>,
    key_of: impl FnMut(&T) -> K,
) -> Vec<Group<K, T>> {
    group_by_key_with(items, key_of, K::cmp)
}

/// Same as [`group_by_key`], for key types without a natural order.
///
/// Keys that `compare` reports as `Equal` share a group; the group keeps the first such key.
pub fn group_by_key_with<T, K>(
    items: impl IntoIterator<Item = T>,
    mut key_of: impl FnMut(&T) -> K,
    mut compare: impl FnMut(&K, &K) -> Ordering,
) -> Vec<Group<K, T>> {
    let mut groups: Vec<Group<K, T>> = Vec::new();
    for item in items {
        let key = key_of(&item);

        // Sorted input hits the last group every time.
        if let Some(last) = groups.last_mut() {
            if compare(&last.key, &key) == Ordering::Equal {
                last.items.push(item);
                continue;
            }
        }

        match groups.binary_search_by(|g| compare(&g.key, &key)) {
            Ok(pos) => groups[pos].items.push(item),
            Err(pos) => groups.insert(
                pos,
                Group {
                    key,
                    items: vec![item],
                },
            ),
        }
    }
    sdebug!(groups = groups.len(), "group_by_key");
    groups
}

/// The case-insensitive section letter for a display text: its first character, uppercased.
///
/// Empty text sorts under `'#'`.
pub fn initial_of(text: &str) -> char {
    text.chars()
        .next()
        .map(|c| {
            // Multi-char mappings ('ß' -> "SS") keep the original letter.
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) => u,
                _ => c,
            }
        })
        .unwrap_or('#')
}

/// Stable-sorts items by their key text.
pub fn sort_by_key_text<T: ListItem>(items: &mut [T]) {
    items.sort_by(|a, b| a.key().cmp(b.key()));
}

/// Groups items under the initial of their key text.
pub fn group_by_initial<T: ListItem>(items: impl IntoIterator<Item = T>) -> Vec<Group<char, T>> {
    group_by_key(items, |item| initial_of(item.key()))
}
