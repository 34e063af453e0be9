/// A lightweight, serializable snapshot of the current scroll state.
///
/// This is what every scroll-derived UI signal reads. It is produced by
/// [`crate::ListEngine::scroll_state`] and only changes when the scroll input source (a user
/// gesture or an animated scroll) moves the list.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub offset: u64,
    pub viewport_extent: u32,
    /// Index of the first flattened node overlapping the viewport (`0` for an empty list).
    pub first_visible_index: usize,
    /// How far the first visible node has scrolled past the viewport top.
    pub first_visible_item_scroll_offset: u64,
}
