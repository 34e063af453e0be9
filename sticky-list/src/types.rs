/// Where a scroll-to target should land inside the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
    /// Keep the current offset if the node is fully visible, otherwise scroll the minimum
    /// distance.
    Auto,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// A contiguous run of flattened node indexes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl NodeRange {
    pub const EMPTY: Self = Self {
        start_index: 0,
        end_index: 0,
    };

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }

    /// The last index in the range (inclusive), if any.
    pub fn last_index(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.end_index - 1)
    }
}

/// The window handed to an [`crate::IndexEmitter`]: the visible range plus how much slack
/// to add on each side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub start_index: usize,
    pub end_index: usize, // exclusive, visible range (no overscan)
    pub overscan: usize,
    pub count: usize,
}

impl Window {
    pub fn overscanned(&self) -> NodeRange {
        NodeRange {
            start_index: self.start_index.saturating_sub(self.overscan),
            end_index: self
                .end_index
                .saturating_add(self.overscan)
                .min(self.count),
        }
    }
}

/// A node placed in content coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedNode<K> {
    pub key: K,
    pub index: usize,
    /// Start offset in content coordinates (includes `padding_start`).
    pub start: u64,
    pub height: u32,
}

impl<K> PlacedNode<K> {
    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.height as u64)
    }

    /// Top edge relative to the viewport top for a given scroll offset. Negative when the node
    /// starts above the viewport.
    pub fn top_in_viewport(&self, scroll_offset: u64) -> i64 {
        self.start as i64 - scroll_offset as i64
    }
}
