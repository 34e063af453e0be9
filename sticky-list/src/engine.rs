use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cmp;

use crate::fenwick::HeightIndex;
use crate::key::{KeyMap, NodeKeyBound};
use crate::{
    Align, IndexEmitter, ListOptions, NodeRange, PlacedNode, ScrollDirection, ScrollState, Window,
};

/// A headless virtualization engine over a flattened node sequence.
///
/// The engine owns the only copy of the scroll offset and viewport extent. It holds no UI
/// objects: the host reports viewport geometry and scroll input, then renders whatever
/// `for_each_render_node` yields.
///
/// Every offset the engine stores is clamped to `[0, max_scroll_offset()]`, so any snapshot
/// taken between two updates is a valid position.
#[derive(Clone, Debug)]
pub struct ListEngine<K = usize> {
    options: ListOptions<K>,
    viewport_extent: u32,
    scroll_offset: u64,
    scroll_direction: Option<ScrollDirection>,

    heights: Vec<u32>,
    measured: Vec<bool>,
    index: HeightIndex,
    measured_by_key: KeyMap<K, u32>,
}

impl<K: NodeKeyBound> ListEngine<K> {
    pub fn new(options: ListOptions<K>) -> Self {
        sdebug!(
            count = options.count,
            overscan = options.overscan,
            "ListEngine::new"
        );
        let mut engine = Self {
            viewport_extent: options.initial_viewport_extent,
            scroll_offset: options.initial_offset,
            scroll_direction: None,
            heights: Vec::new(),
            measured: Vec::new(),
            index: HeightIndex::default(),
            measured_by_key: KeyMap::default(),
            options,
        };
        engine.rebuild_heights();
        engine.scroll_offset = engine.clamp_scroll_offset(engine.scroll_offset);
        engine
    }

    pub fn options(&self) -> &ListOptions<K> {
        &self.options
    }

    /// Replaces the options, rebuilding heights from the (possibly new) providers.
    ///
    /// Measured heights survive when their keys are still present.
    pub fn set_options(&mut self, options: ListOptions<K>) {
        self.options = options;
        strace!(count = self.options.count, "ListEngine::set_options");
        self.rebuild_heights();
        self.scroll_offset = self.clamp_scroll_offset(self.scroll_offset);
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut ListOptions<K>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn key_for(&self, index: usize) -> K {
        (self.options.node_key)(index)
    }

    /// Uses precomputed heights for every node.
    ///
    /// Entries past the end of `heights` and negative entries are taken as zero height.
    pub fn set_node_heights(&mut self, heights: &[i64]) {
        if heights.len() < self.options.count {
            swarn!(
                provided = heights.len(),
                count = self.options.count,
                "set_node_heights: fewer heights than nodes, missing heights are zero"
            );
        }
        let heights: Arc<[i64]> = Arc::from(heights);
        self.options.node_height = Arc::new(move |i| heights.get(i).copied().unwrap_or(0));
        self.rebuild_heights();
        self.scroll_offset = self.clamp_scroll_offset(self.scroll_offset);
    }

    pub fn viewport_extent(&self) -> u32 {
        self.viewport_extent
    }

    pub fn set_viewport_extent(&mut self, extent: u32) {
        if self.viewport_extent == extent {
            return;
        }
        self.viewport_extent = extent;
        self.scroll_offset = self.clamp_scroll_offset(self.scroll_offset);
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    /// Moves to `offset` (clamped) and returns the applied offset.
    pub fn set_scroll_offset(&mut self, offset: u64) -> u64 {
        let offset = self.clamp_scroll_offset(offset);
        let prev = self.scroll_offset;
        self.scroll_direction = match offset.cmp(&prev) {
            cmp::Ordering::Greater => Some(ScrollDirection::Forward),
            cmp::Ordering::Less => Some(ScrollDirection::Backward),
            cmp::Ordering::Equal => self.scroll_direction,
        };
        self.scroll_offset = offset;
        offset
    }

    /// Applies a relative scroll (positive moves toward the end) and returns the applied
    /// offset.
    pub fn scroll_by(&mut self, delta: i64) -> u64 {
        let target = if delta >= 0 {
            self.scroll_offset.saturating_add(delta as u64)
        } else {
            self.scroll_offset.saturating_sub(delta.unsigned_abs())
        };
        strace!(delta, target, "scroll_by");
        self.set_scroll_offset(target)
    }

    /// Scrolls to a node immediately and returns the applied offset.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> u64 {
        let offset = self.scroll_to_index_offset(index, align);
        self.set_scroll_offset(offset)
    }

    /// The clamped offset that would bring `index` into view. Indexes past the end target the
    /// last node.
    ///
    /// `Align::Start` puts the node on the content top line (just below `padding_start`), so
    /// index 0 maps to offset 0.
    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> u64 {
        let count = self.options.count;
        if count == 0 {
            return 0;
        }
        let index = index.min(count - 1);
        let start = self.start_of(index);
        let end = start.saturating_add(self.heights[index] as u64);
        let view = self.viewport_extent as u64;

        let ps = self.options.padding_start as u64;
        let pe = self.options.padding_end as u64;

        let target = match align {
            Align::Start => start.saturating_sub(ps),
            Align::End => end.saturating_add(pe).saturating_sub(view),
            Align::Center => {
                let center = start.saturating_add(self.heights[index] as u64 / 2);
                center.saturating_sub(view / 2)
            }
            Align::Auto => {
                let cur = self.scroll_offset;
                if start >= cur.saturating_add(ps) && end <= cur.saturating_add(view) {
                    cur
                } else if start < cur.saturating_add(ps) {
                    start.saturating_sub(ps)
                } else {
                    end.saturating_add(pe).saturating_sub(view)
                }
            }
        };
        self.clamp_scroll_offset(target)
    }

    pub fn total_height(&self) -> u64 {
        (self.options.padding_start as u64)
            .saturating_add(self.index.total())
            .saturating_add(self.options.padding_end as u64)
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.total_height()
            .saturating_sub(self.viewport_extent as u64)
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    pub fn node_start(&self, index: usize) -> Option<u64> {
        (index < self.options.count).then(|| self.start_of(index))
    }

    pub fn node_height(&self, index: usize) -> Option<u32> {
        self.heights.get(index).copied()
    }

    pub fn node_end(&self, index: usize) -> Option<u64> {
        let start = self.node_start(index)?;
        Some(start.saturating_add(self.node_height(index)? as u64))
    }

    /// The node covering `offset`. Offsets in the leading padding map to the first node and
    /// offsets past the content map to the last.
    pub fn index_at_offset(&self, offset: u64) -> Option<usize> {
        let count = self.options.count;
        if count == 0 {
            return None;
        }
        let ps = self.options.padding_start as u64;
        if offset < ps {
            return Some(0);
        }
        Some(self.index.nodes_within(offset - ps).min(count - 1))
    }

    pub fn placed(&self, index: usize) -> Option<PlacedNode<K>> {
        (index < self.options.count).then(|| self.place(index))
    }

    /// Nodes overlapping the current viewport.
    pub fn visible_range(&self) -> NodeRange {
        self.visible_range_for(self.scroll_offset, self.viewport_extent)
    }

    /// Nodes overlapping a viewport of `extent` at `offset`, in `O(log n)`.
    pub fn visible_range_for(&self, offset: u64, extent: u32) -> NodeRange {
        let count = self.options.count;
        if count == 0 || extent == 0 {
            return NodeRange::EMPTY;
        }

        let view = extent as u64;
        let max_scroll = self.total_height().saturating_sub(view);
        let first_px = offset.min(max_scroll);
        let last_px = first_px.saturating_add(view).saturating_sub(1);

        let (Some(start), Some(last)) = (
            self.index_at_offset(first_px),
            self.index_at_offset(cmp::max(last_px, first_px)),
        ) else {
            return NodeRange::EMPTY;
        };
        NodeRange {
            start_index: start,
            end_index: (last + 1).min(count),
        }
    }

    /// The visible range widened by `overscan` on each side.
    pub fn render_range(&self) -> NodeRange {
        self.render_range_for(self.scroll_offset, self.viewport_extent)
    }

    pub fn render_range_for(&self, offset: u64, extent: u32) -> NodeRange {
        self.window_for(offset, extent)
            .map(|w| w.overscanned())
            .unwrap_or(NodeRange::EMPTY)
    }

    /// Emits the indexes to render, ascending: the overscanned visible range plus `pinned`
    /// (typically the sticky header, which may have scrolled out of the range).
    pub fn for_each_render_index(&self, pinned: Option<usize>, mut f: impl FnMut(usize)) {
        let Some(window) = self.window_for(self.scroll_offset, self.viewport_extent) else {
            return;
        };
        let mut emitter = IndexEmitter::new(window, &mut f);
        emitter.emit_overscanned_with_pinned(pinned);
    }

    pub fn for_each_render_node(&self, pinned: Option<usize>, mut f: impl FnMut(PlacedNode<K>)) {
        self.for_each_render_index(pinned, |i| f(self.place(i)));
    }

    /// Collects render nodes into `out` (clears `out` first).
    pub fn collect_render_nodes(&self, pinned: Option<usize>, out: &mut Vec<PlacedNode<K>>) {
        out.clear();
        self.for_each_render_node(pinned, |node| out.push(node));
    }

    /// The content top line: the scroll offset plus `padding_start`. Nodes are "first visible"
    /// and headers pin relative to this line, not to the raw viewport edge.
    pub fn content_top(&self) -> u64 {
        self.scroll_offset
            .saturating_add(self.options.padding_start as u64)
    }

    pub fn scroll_state(&self) -> ScrollState {
        let top = self.content_top();
        let first_visible_index = self.index_at_offset(top).unwrap_or(0);
        let first_start = self.node_start(first_visible_index).unwrap_or(0);
        ScrollState {
            offset: self.scroll_offset,
            viewport_extent: self.viewport_extent,
            first_visible_index,
            first_visible_item_scroll_offset: top.saturating_sub(first_start),
        }
    }

    /// Records the real height of a node, caching it under the node's key.
    ///
    /// When the node starts above the current offset the offset shifts by the height change so
    /// that the content on screen does not move. Returns that shift.
    pub fn measure(&mut self, index: usize, height: i64) -> i64 {
        if index >= self.options.count {
            return 0;
        }
        let height = sanitize_height(index, height);
        let key = self.key_for(index);
        self.measured_by_key.insert(key, height);
        self.measured[index] = true;

        let old = self.heights[index];
        if old == height {
            return 0;
        }
        let start = self.start_of(index);
        self.heights[index] = height;
        self.index.replace(index, old, height);
        strace!(index, old, height, "measure");

        let delta = height as i64 - old as i64;
        if start < self.scroll_offset {
            let before = self.scroll_offset;
            let shifted = if delta > 0 {
                before.saturating_add(delta as u64)
            } else {
                before.saturating_sub(delta.unsigned_abs())
            };
            self.scroll_offset = self.clamp_scroll_offset(shifted);
            return self.scroll_offset as i64 - before as i64;
        }
        self.scroll_offset = self.clamp_scroll_offset(self.scroll_offset);
        0
    }

    pub fn is_measured(&self, index: usize) -> bool {
        self.measured.get(index).copied().unwrap_or(false)
    }

    pub fn measurement_cache_len(&self) -> usize {
        self.measured_by_key.len()
    }

    pub fn reset_measurements(&mut self) {
        self.measured_by_key.clear();
        self.rebuild_heights();
        self.scroll_offset = self.clamp_scroll_offset(self.scroll_offset);
    }

    /// Re-reads every node key and re-applies cached heights by key.
    ///
    /// Call this after the data behind `node_key` was reordered while `count` stayed the same.
    pub fn sync_node_keys(&mut self) {
        self.rebuild_heights();
        self.scroll_offset = self.clamp_scroll_offset(self.scroll_offset);
    }

    fn window_for(&self, offset: u64, extent: u32) -> Option<Window> {
        let visible = self.visible_range_for(offset, extent);
        (!visible.is_empty()).then_some(Window {
            start_index: visible.start_index,
            end_index: visible.end_index,
            overscan: self.options.overscan,
            count: self.options.count,
        })
    }

    fn rebuild_heights(&mut self) {
        let count = self.options.count;
        sdebug!(
            count,
            cached = self.measured_by_key.len(),
            "rebuild_heights"
        );
        self.heights.clear();
        self.measured.clear();
        self.heights.reserve_exact(count);
        self.measured.reserve_exact(count);

        // Only keys still present survive, so replaced data cannot grow the cache.
        let previous = core::mem::take(&mut self.measured_by_key);
        for i in 0..count {
            let key = self.key_for(i);
            if let Some(&h) = previous.get(&key) {
                self.heights.push(h);
                self.measured.push(true);
                self.measured_by_key.insert(key, h);
            } else {
                self.heights.push(sanitize_height(i, (self.options.node_height)(i)));
                self.measured.push(false);
            }
        }
        self.index = HeightIndex::from_heights(&self.heights);
    }

    fn start_of(&self, index: usize) -> u64 {
        (self.options.padding_start as u64).saturating_add(self.index.prefix(index))
    }

    fn place(&self, index: usize) -> PlacedNode<K> {
        PlacedNode {
            key: self.key_for(index),
            index,
            start: self.start_of(index),
            height: self.heights[index],
        }
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn sanitize_height(index: usize, raw: i64) -> u32 {
    if raw < 0 {
        swarn!(index, height = raw, "negative node height, using zero");
        return 0;
    }
    u32::try_from(raw).unwrap_or(u32::MAX)
}
