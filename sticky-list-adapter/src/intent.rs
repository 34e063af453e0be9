/// A request to change list state, applied by [`crate::Controller::update`].
///
/// Intents are the only write path into the controller. `ScrollBy` and `ScrollTo` model user
/// gestures and cancel any running animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Intent {
    Resize { viewport_extent: u32 },
    ScrollBy { delta: i64 },
    ScrollTo { offset: u64 },
    /// Bring `index` to the content top line, optionally animated.
    ScrollToIndex { index: usize, animated: bool },
    /// The "scroll to top" control: an animated scroll to the first node.
    ScrollToTop,
    /// The host measured node `index`.
    Measure { index: usize, height: i64 },
    CancelAnimation,
    /// Advance animations to the supplied clock.
    Tick,
}

impl Intent {
    /// Whether this intent comes from direct user input.
    pub fn is_user_scroll(&self) -> bool {
        matches!(self, Self::ScrollBy { .. } | Self::ScrollTo { .. })
    }
}

/// Submits intents to a controller from any thread.
///
/// Intents queue up until the owner calls `Controller::drain_intents`, which applies them in
/// submission order.
#[cfg(feature = "std")]
#[derive(Clone, Debug)]
pub struct IntentSender {
    tx: std::sync::mpsc::Sender<Intent>,
}

#[cfg(feature = "std")]
impl IntentSender {
    pub(crate) fn new(tx: std::sync::mpsc::Sender<Intent>) -> Self {
        Self { tx }
    }

    /// Queues `intent`. Returns `false` once the controller has been disposed or dropped.
    pub fn send(&self, intent: Intent) -> bool {
        self.tx.send(intent).is_ok()
    }
}
