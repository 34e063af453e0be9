//! The pinned section header and its push-off transition.
//!
//! The header band sits on the content top line (`padding_start` below the viewport top).
//! Whichever group covers that line owns the band. When the next group's header climbs into
//! the band, the pinned header is translated upward by the overlap until the next header
//! reaches the line and takes over.
use crate::ListEngine;
use crate::key::NodeKeyBound;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StickyPhase {
    /// Nothing pinned: the list is empty, or the first header is still below the band
    /// (over-scroll past the top).
    #[default]
    Hidden,
    Pinned,
    /// The next header overlaps the band and pushes the pinned one off.
    Transitioning,
}

/// Where to draw the pinned header this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StickyHeader {
    pub phase: StickyPhase,
    pub group: Option<usize>,
    pub header_index: Option<usize>,
    pub next_header_index: Option<usize>,
    pub height: u32,
    /// Push-off translation, always within `[-height, 0]`.
    pub translation: i64,
    /// Top edge in viewport coordinates (`padding_start + translation`).
    pub top: i64,
}

impl StickyHeader {
    pub const HIDDEN: Self = Self {
        phase: StickyPhase::Hidden,
        group: None,
        header_index: None,
        next_header_index: None,
        height: 0,
        translation: 0,
        top: 0,
    };

    pub fn is_visible(&self) -> bool {
        self.phase != StickyPhase::Hidden
    }
}

/// Computes the sticky header for a signed scroll `offset`.
///
/// `header_indexes` must be ascending. Negative offsets model over-scroll above the first
/// node. The result depends only on the inputs, so recomputing at the same offset is a no-op.
pub fn sticky_header_at<K: NodeKeyBound>(
    engine: &ListEngine<K>,
    header_indexes: &[usize],
    offset: i64,
) -> StickyHeader {
    let Some(first_start) = header_indexes
        .first()
        .and_then(|&first| engine.node_start(first))
    else {
        return StickyHeader::HIDDEN;
    };

    let padding_start = engine.options().padding_start as i64;
    let band = offset.saturating_add(padding_start);
    if band < first_start as i64 {
        return StickyHeader::HIDDEN;
    }
    let band = band as u64;

    let Some(top_index) = engine.index_at_offset(band) else {
        return StickyHeader::HIDDEN;
    };
    let Some(group) = header_indexes
        .partition_point(|&h| h <= top_index)
        .checked_sub(1)
    else {
        return StickyHeader::HIDDEN;
    };

    let header_index = header_indexes[group];
    let height = engine.node_height(header_index).unwrap_or(0);
    let next_header_index = header_indexes.get(group + 1).copied();

    let mut phase = StickyPhase::Pinned;
    let mut translation = 0i64;
    if let Some(next_start) = next_header_index.and_then(|next| engine.node_start(next)) {
        let next_top = next_start as i64 - band as i64;
        if next_top < height as i64 {
            phase = StickyPhase::Transitioning;
            translation = (next_top - height as i64).clamp(-(height as i64), 0);
        }
    }

    StickyHeader {
        phase,
        group: Some(group),
        header_index: Some(header_index),
        next_header_index,
        height,
        translation,
        top: padding_start + translation,
    }
}

/// Holds the sticky header for the last computed frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StickyHeaderOverlay {
    current: StickyHeader,
}

impl StickyHeaderOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> StickyHeader {
        self.current
    }

    /// Recomputes from the engine's scroll offset. Returns `true` when the header changed.
    pub fn update<K: NodeKeyBound>(
        &mut self,
        engine: &ListEngine<K>,
        header_indexes: &[usize],
    ) -> bool {
        let offset = i64::try_from(engine.scroll_offset()).unwrap_or(i64::MAX);
        self.update_at(engine, header_indexes, offset)
    }

    pub fn update_at<K: NodeKeyBound>(
        &mut self,
        engine: &ListEngine<K>,
        header_indexes: &[usize],
        offset: i64,
    ) -> bool {
        let next = sticky_header_at(engine, header_indexes, offset);
        if next == self.current {
            return false;
        }
        strace!(
            group = ?next.group,
            translation = next.translation,
            "sticky header changed"
        );
        self.current = next;
        true
    }
}
