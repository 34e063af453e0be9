use alloc::vec::Vec;

use sticky_list::{NodeContent, NodeKey, ScrollSignals, StickyHeader};

/// One node to draw this frame.
#[derive(Debug, PartialEq, Eq)]
pub struct RenderNode<'a, G, T> {
    /// Render slot, stable for as long as `key` stays on screen.
    pub slot: usize,
    pub key: NodeKey<G>,
    pub index: usize,
    /// Top edge in viewport coordinates; negative when partly scrolled off.
    pub top: i64,
    pub height: u32,
    pub content: NodeContent<'a, G, T>,
}

impl<G, T> RenderNode<'_, G, T> {
    pub fn is_header(&self) -> bool {
        matches!(self.content, NodeContent::Header(_))
    }
}

/// Everything a host needs to draw the list once.
///
/// `nodes` is ascending by index and may include the pinned header's own node even when it has
/// scrolled above the viewport; draw `sticky` on top of the nodes.
#[derive(Debug, PartialEq, Eq)]
pub struct RenderFrame<'a, G, T> {
    pub nodes: Vec<RenderNode<'a, G, T>>,
    pub sticky: StickyHeader,
    pub signals: ScrollSignals,
}

impl<'a, G, T> RenderFrame<'a, G, T> {
    /// The group key of the pinned header, if any.
    pub fn sticky_key(&self) -> Option<&G> {
        let index = self.sticky.header_index?;
        self.nodes.iter().find(|n| n.index == index).and_then(|n| match n.content {
            NodeContent::Header(key) => Some(key),
            NodeContent::Item(_) => None,
        })
    }
}
