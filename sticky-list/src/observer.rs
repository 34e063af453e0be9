use crate::ScrollState;

/// UI signals derived from the scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollSignals {
    /// Whether the host should show its "scroll to top" control.
    pub show_scroll_to_top_control: bool,
}

/// Derives [`ScrollSignals`] from [`ScrollState`] and remembers the last result, so callers can
/// skip downstream work when a scroll step does not change anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollPositionObserver {
    scroll_to_top_threshold: usize,
    last: Option<ScrollSignals>,
}

impl Default for ScrollPositionObserver {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SCROLL_TO_TOP_THRESHOLD)
    }
}

impl ScrollPositionObserver {
    pub const DEFAULT_SCROLL_TO_TOP_THRESHOLD: usize = 10;

    /// The control shows once `first_visible_index` exceeds `scroll_to_top_threshold`.
    pub fn new(scroll_to_top_threshold: usize) -> Self {
        Self {
            scroll_to_top_threshold,
            last: None,
        }
    }

    pub fn scroll_to_top_threshold(&self) -> usize {
        self.scroll_to_top_threshold
    }

    /// Pure derivation; does not touch the memo.
    pub fn derive(&self, state: &ScrollState) -> ScrollSignals {
        ScrollSignals {
            show_scroll_to_top_control: state.first_visible_index > self.scroll_to_top_threshold,
        }
    }

    /// Derives signals for `state` and returns them only if they differ from the previous
    /// observation. The first observation always reports.
    pub fn observe(&mut self, state: &ScrollState) -> Option<ScrollSignals> {
        let next = self.derive(state);
        if self.last == Some(next) {
            return None;
        }
        strace!(
            show_scroll_to_top_control = next.show_scroll_to_top_control,
            first_visible_index = state.first_visible_index,
            "scroll signals changed"
        );
        self.last = Some(next);
        Some(next)
    }

    /// The last observed signals (all off before the first observation).
    pub fn current(&self) -> ScrollSignals {
        self.last.unwrap_or_default()
    }

    /// Forgets the memo so the next observation reports unconditionally.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
