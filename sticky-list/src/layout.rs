use alloc::string::String;
use alloc::vec::Vec;

use crate::key::KeyMap;
use crate::{Group, Item, ListItem, group_by_initial, group_by_key, sort_by_key_text};

/// What a flattened node renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    Header { group: usize },
    Item { group: usize, item: usize },
}

impl NodeKind {
    pub fn group(&self) -> usize {
        match *self {
            Self::Header { group } | Self::Item { group, .. } => group,
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, Self::Header { .. })
    }
}

/// Stable identity of a flattened node.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKey<G> {
    Header(G),
    Item(String),
}

/// Borrowed content of a flattened node.
#[derive(Debug, PartialEq, Eq)]
pub enum NodeContent<'a, G, T> {
    Header(&'a G),
    Item(&'a T),
}

impl<G, T> Clone for NodeContent<'_, G, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G, T> Copy for NodeContent<'_, G, T> {}

/// Groups flattened into a single node sequence: each group contributes its header node
/// followed by its item nodes.
#[derive(Clone, Debug)]
pub struct SectionedList<G, T> {
    groups: Vec<Group<G, T>>,
    nodes: Vec<NodeKind>,
    header_indexes: Vec<usize>,
    item_indexes: KeyMap<String, usize>,
}

impl<G, T: ListItem> SectionedList<G, T> {
    /// Flattens `groups` in the given order. Groups without items are dropped.
    pub fn new(groups: Vec<Group<G, T>>) -> Self {
        let groups: Vec<_> = groups.into_iter().filter(|g| !g.is_empty()).collect();
        let total = groups.iter().map(|g| g.len() + 1).sum();

        let mut nodes = Vec::with_capacity(total);
        let mut header_indexes = Vec::with_capacity(groups.len());
        let mut item_indexes = KeyMap::default();
        for (group, g) in groups.iter().enumerate() {
            header_indexes.push(nodes.len());
            nodes.push(NodeKind::Header { group });
            for (item, it) in g.items.iter().enumerate() {
                // Last write wins for duplicate keys.
                item_indexes.insert(String::from(it.key()), nodes.len());
                nodes.push(NodeKind::Item { group, item });
            }
        }

        sdebug!(
            groups = groups.len(),
            nodes = nodes.len(),
            "SectionedList::new"
        );
        Self {
            groups,
            nodes,
            header_indexes,
            item_indexes,
        }
    }

    /// Groups `items` with [`group_by_key`] and flattens the result.
    pub fn from_items(items: impl IntoIterator<Item = T>, key_of: impl FnMut(&T) -> G) -> Self
    where
        G: Ord,
    {
        Self::new(group_by_key(items, key_of))
    }

    /// Looks up a node by key. Header lookups scan the groups; item lookups are a map hit.
    pub fn index_of_key(&self, key: &NodeKey<G>) -> Option<usize>
    where
        G: PartialEq,
    {
        match key {
            NodeKey::Header(g) => self
                .groups
                .iter()
                .position(|group| group.key == *g)
                .map(|group| self.header_indexes[group]),
            NodeKey::Item(k) => self.item_indexes.get(k.as_str()).copied(),
        }
    }

    pub fn node_key(&self, index: usize) -> Option<NodeKey<G>>
    where
        G: Clone,
    {
        Some(match self.nodes.get(index)? {
            NodeKind::Header { group } => NodeKey::Header(self.groups[*group].key.clone()),
            NodeKind::Item { group, item } => {
                NodeKey::Item(String::from(self.groups[*group].items[*item].key()))
            }
        })
    }
}

impl<G, T> SectionedList<G, T> {
    /// Number of flattened nodes (headers + items).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn groups(&self) -> &[Group<G, T>] {
        &self.groups
    }

    pub fn into_groups(self) -> Vec<Group<G, T>> {
        self.groups
    }

    /// Node indexes of the group headers, ascending.
    pub fn header_indexes(&self) -> &[usize] {
        &self.header_indexes
    }

    pub fn header_index(&self, group: usize) -> Option<usize> {
        self.header_indexes.get(group).copied()
    }

    pub fn node(&self, index: usize) -> Option<NodeKind> {
        self.nodes.get(index).copied()
    }

    pub fn content(&self, index: usize) -> Option<NodeContent<'_, G, T>> {
        Some(match self.nodes.get(index)? {
            NodeKind::Header { group } => NodeContent::Header(&self.groups[*group].key),
            NodeKind::Item { group, item } => {
                NodeContent::Item(&self.groups[*group].items[*item])
            }
        })
    }

    pub fn group_of(&self, index: usize) -> Option<usize> {
        self.node(index).map(|n| n.group())
    }

    /// Items in display order, headers stripped.
    pub fn items(&self) -> impl Iterator<Item = &T> + '_ {
        self.groups.iter().flat_map(|g| g.items.iter())
    }

    pub fn item_count(&self) -> usize {
        self.nodes.len() - self.header_indexes.len()
    }
}

/// Sorts items by primary text and sections them by initial letter.
pub fn contact_sections(items: impl IntoIterator<Item = Item>) -> SectionedList<char, Item> {
    let mut items: Vec<Item> = items.into_iter().collect();
    sort_by_key_text(&mut items);
    SectionedList::new(group_by_initial(items))
}
