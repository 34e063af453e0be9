use sticky_list::{ListEngine, NodeKeyBound};

/// A scroll position expressed relative to a node identity, so it survives data replacement.
///
/// Typical uses: inserting contacts above the fold without the visible rows jumping, or
/// restoring a position after the list was rebuilt.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollAnchor<K> {
    pub key: K,
    /// How far the content top line sits below the anchor node's start.
    pub offset_in_viewport: u64,
}

/// Captures an anchor for the first visible node (the one on the content top line).
///
/// Returns `None` for an empty list.
pub fn capture_first_visible_anchor<K: NodeKeyBound>(
    engine: &ListEngine<K>,
) -> Option<ScrollAnchor<K>> {
    if engine.count() == 0 {
        return None;
    }
    let state = engine.scroll_state();
    Some(ScrollAnchor {
        key: engine.key_for(state.first_visible_index),
        offset_in_viewport: state.first_visible_item_scroll_offset,
    })
}

/// Scrolls so that the anchored node sits where it was captured.
///
/// `key_to_index` maps keys into the *current* dataset. Returns `false` when the key is gone;
/// the offset is left untouched in that case.
pub fn apply_anchor<K: NodeKeyBound>(
    engine: &mut ListEngine<K>,
    anchor: &ScrollAnchor<K>,
    mut key_to_index: impl FnMut(&K) -> Option<usize>,
) -> bool {
    let Some(start) = key_to_index(&anchor.key).and_then(|index| engine.node_start(index)) else {
        adebug!("anchor key no longer present");
        return false;
    };
    let padding_start = engine.options().padding_start as u64;
    let target = start
        .saturating_add(anchor.offset_in_viewport)
        .saturating_sub(padding_start);
    engine.set_scroll_offset(target);
    true
}
