use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use sticky_list::{
    Align, ListEngine, ListItem, ListOptions, NodeKey, NodeKeyBound, PlacedNode,
    ScrollPositionObserver, ScrollSignals, ScrollState, SectionedList, SlotRecycler, StickyHeader,
    StickyHeaderOverlay,
};

use crate::{
    CancellationToken, Easing, Intent, RenderFrame, RenderNode, ScrollAnchor, ScrollTask,
    TaskStatus, Tween, apply_anchor, capture_first_visible_anchor,
};

/// Metrics and policies for a [`Controller`]. The defaults describe the reference contact
/// screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControllerOptions {
    pub header_height: u32,
    pub row_height: u32,
    pub padding_start: u32,
    pub padding_end: u32,
    pub overscan: usize,
    pub initial_viewport_extent: u32,
    /// The scroll-to-top control shows once the first visible index exceeds this.
    pub scroll_to_top_threshold: usize,
    /// Zero makes animated scrolls jump immediately.
    pub animation_duration_ms: u64,
    pub easing: Easing,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            header_height: 40,
            row_height: 65,
            padding_start: 16,
            padding_end: 88,
            overscan: 1,
            initial_viewport_extent: 0,
            scroll_to_top_threshold: ScrollPositionObserver::DEFAULT_SCROLL_TO_TOP_THRESHOLD,
            animation_duration_ms: 300,
            easing: Easing::EaseOutCubic,
        }
    }
}

/// What an `update` changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Update {
    /// The scroll offset after the update.
    pub offset: u64,
    pub sticky_changed: bool,
    /// New signals, only when they changed.
    pub signals: Option<ScrollSignals>,
    pub animating: bool,
}

impl Update {
    #[cfg_attr(not(feature = "std"), allow(dead_code))]
    fn merge(self, later: Update) -> Update {
        Update {
            offset: later.offset,
            sticky_changed: self.sticky_changed || later.sticky_changed,
            signals: later.signals.or(self.signals),
            animating: later.animating,
        }
    }
}

/// The single owner of a grouped list's scroll state.
///
/// Lifecycle: [`Controller::create`], then [`Controller::update`] for every intent (including
/// `Intent::Tick` from the host's frame loop), then [`Controller::dispose`]. Other threads
/// submit intents through an [`crate::IntentSender`] instead of touching the controller.
pub struct Controller<G, T> {
    list: Arc<SectionedList<G, T>>,
    options: ControllerOptions,
    engine: ListEngine<NodeKey<G>>,
    overlay: StickyHeaderOverlay,
    observer: ScrollPositionObserver,
    recycler: SlotRecycler<NodeKey<G>>,
    task: Option<ScrollTask>,
    placed: Vec<PlacedNode<NodeKey<G>>>,
    disposed: bool,
    #[cfg(feature = "std")]
    inbox: Option<std::sync::mpsc::Receiver<Intent>>,
    #[cfg(feature = "std")]
    outbox: std::sync::mpsc::Sender<Intent>,
}

impl<G, T> Controller<G, T>
where
    G: Clone + PartialEq + Send + Sync + 'static,
    T: ListItem,
    NodeKey<G>: NodeKeyBound,
{
    pub fn create(list: SectionedList<G, T>, options: ControllerOptions) -> Self {
        adebug!(
            nodes = list.len(),
            groups = list.groups().len(),
            "Controller::create"
        );
        let engine = ListEngine::new(list_options(&list, &options));
        #[cfg(feature = "std")]
        let (outbox, inbox) = std::sync::mpsc::channel();
        let mut controller = Self {
            list: Arc::new(list),
            options,
            engine,
            overlay: StickyHeaderOverlay::new(),
            observer: ScrollPositionObserver::new(options.scroll_to_top_threshold),
            recycler: SlotRecycler::new(),
            task: None,
            placed: Vec::new(),
            disposed: false,
            #[cfg(feature = "std")]
            inbox: Some(inbox),
            #[cfg(feature = "std")]
            outbox,
        };
        controller.refresh();
        controller
    }

    pub fn list(&self) -> &SectionedList<G, T> {
        &self.list
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    pub fn engine(&self) -> &ListEngine<NodeKey<G>> {
        &self.engine
    }

    pub fn scroll_offset(&self) -> u64 {
        self.engine.scroll_offset()
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.engine.scroll_state()
    }

    pub fn sticky_header(&self) -> StickyHeader {
        self.overlay.current()
    }

    pub fn signals(&self) -> ScrollSignals {
        self.observer.current()
    }

    pub fn is_animating(&self) -> bool {
        self.task.is_some()
    }

    /// The running animation, if any.
    pub fn task(&self) -> Option<&ScrollTask> {
        self.task.as_ref()
    }

    /// A handle that cancels the running animation at its next tick.
    pub fn task_token(&self) -> Option<CancellationToken> {
        self.task.as_ref().map(ScrollTask::token)
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Applies one intent at clock `now_ms`.
    ///
    /// Intents after [`Controller::dispose`] are ignored.
    pub fn update(&mut self, intent: Intent, now_ms: u64) -> Update {
        if self.disposed {
            awarn!(?intent, "update after dispose ignored");
            return self.snapshot();
        }
        atrace!(?intent, now_ms, "update");

        if intent.is_user_scroll() {
            self.cancel_animation();
        }
        match intent {
            Intent::Resize { viewport_extent } => {
                self.engine.set_viewport_extent(viewport_extent);
                self.retarget(now_ms);
            }
            Intent::ScrollBy { delta } => {
                self.engine.scroll_by(delta);
            }
            Intent::ScrollTo { offset } => {
                self.engine.set_scroll_offset(offset);
            }
            Intent::ScrollToIndex {
                index,
                animated: false,
            } => {
                self.cancel_animation();
                self.engine.scroll_to_index(index, Align::Start);
            }
            Intent::ScrollToIndex {
                index,
                animated: true,
            } => self.start_animation(index, now_ms),
            Intent::ScrollToTop => self.start_animation(0, now_ms),
            Intent::Measure { index, height } => {
                self.engine.measure(index, height);
                self.retarget(now_ms);
            }
            Intent::CancelAnimation => self.cancel_animation(),
            Intent::Tick => self.advance(now_ms),
        }
        self.refresh()
    }

    /// Applies every queued intent from [`crate::IntentSender`]s in submission order.
    #[cfg(feature = "std")]
    pub fn drain_intents(&mut self, now_ms: u64) -> Update {
        let mut merged = self.snapshot();
        loop {
            let Some(intent) = self.inbox.as_ref().and_then(|rx| rx.try_recv().ok()) else {
                break;
            };
            merged = merged.merge(self.update(intent, now_ms));
        }
        merged
    }

    /// A sender for other threads. Sends fail once the controller is disposed.
    #[cfg(feature = "std")]
    pub fn intent_sender(&self) -> crate::IntentSender {
        crate::IntentSender::new(self.outbox.clone())
    }

    /// Stops the running animation, leaving the offset where the last tick put it.
    pub fn cancel_animation(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
            adebug!(offset = self.engine.scroll_offset(), "animated scroll cancelled");
        }
    }

    pub fn capture_anchor(&self) -> Option<ScrollAnchor<NodeKey<G>>> {
        capture_first_visible_anchor(&self.engine)
    }

    /// Restores a captured anchor. Cancels any running animation.
    pub fn apply_anchor(&mut self, anchor: &ScrollAnchor<NodeKey<G>>) -> Update {
        if self.disposed {
            return self.snapshot();
        }
        self.cancel_animation();
        let list = Arc::clone(&self.list);
        apply_anchor(&mut self.engine, anchor, |key| list.index_of_key(key));
        self.refresh()
    }

    /// Swaps in new data, keeping the first visible node where it was on screen.
    ///
    /// Measured heights and render slots follow node keys into the new list.
    pub fn replace_list(&mut self, list: SectionedList<G, T>) -> Update {
        if self.disposed {
            return self.snapshot();
        }
        let anchor = self.capture_anchor();
        self.cancel_animation();
        self.engine.set_options(list_options(&list, &self.options));
        self.list = Arc::new(list);
        if let Some(anchor) = anchor {
            let list = Arc::clone(&self.list);
            apply_anchor(&mut self.engine, &anchor, |key| list.index_of_key(key));
        }
        adebug!(nodes = self.list.len(), "replace_list");
        self.refresh()
    }

    /// Builds the render frame for the current state.
    pub fn frame(&mut self) -> RenderFrame<'_, G, T> {
        let sticky = self.overlay.current();
        let pinned = sticky.header_index.filter(|_| sticky.is_visible());
        self.engine.collect_render_nodes(pinned, &mut self.placed);

        let keys: Vec<NodeKey<G>> = self.placed.iter().map(|p| p.key.clone()).collect();
        let slots = self.recycler.assign(&keys);

        let offset = self.engine.scroll_offset();
        let list = &*self.list;
        let nodes = self
            .placed
            .drain(..)
            .zip(slots)
            .filter_map(|(node, slot)| {
                let top = node.top_in_viewport(offset);
                Some(RenderNode {
                    slot,
                    content: list.content(node.index)?,
                    key: node.key,
                    index: node.index,
                    top,
                    height: node.height,
                })
            })
            .collect();

        RenderFrame {
            nodes,
            sticky,
            signals: self.observer.current(),
        }
    }

    /// Ends the lifecycle: cancels animation, releases render slots and closes the intent
    /// queue. Later intents are ignored.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.cancel_animation();
        self.recycler.clear();
        self.placed.clear();
        #[cfg(feature = "std")]
        {
            self.inbox = None;
        }
        self.disposed = true;
        adebug!("Controller::dispose");
    }

    fn start_animation(&mut self, index: usize, now_ms: u64) {
        self.cancel_animation();
        let from = self.engine.scroll_offset();
        let to = self.engine.scroll_to_index_offset(index, Align::Start);
        if from == to || self.options.animation_duration_ms == 0 {
            self.engine.set_scroll_offset(to);
            return;
        }
        let tween = Tween::new(
            from,
            to,
            now_ms,
            self.options.animation_duration_ms,
            self.options.easing,
        );
        adebug!(index, from, to, "animated scroll started");
        self.task = Some(ScrollTask::new(tween, index));
    }

    fn advance(&mut self, now_ms: u64) {
        let status = match &self.task {
            Some(task) => task.poll(now_ms),
            None => return,
        };
        match status {
            TaskStatus::Running(offset) => {
                self.engine.set_scroll_offset(offset);
            }
            TaskStatus::Completed(offset) => {
                self.engine.set_scroll_offset(offset);
                self.task = None;
                adebug!(offset = self.engine.scroll_offset(), "animated scroll completed");
            }
            TaskStatus::Cancelled => {
                self.task = None;
                adebug!(offset = self.engine.scroll_offset(), "animated scroll cancelled");
            }
        }
    }

    /// Re-aims a running animation after the geometry changed under it.
    fn retarget(&mut self, now_ms: u64) {
        let Some(task) = self.task.as_mut() else {
            return;
        };
        let to = self
            .engine
            .scroll_to_index_offset(task.target_index(), Align::Start);
        task.retarget(now_ms, self.engine.scroll_offset(), to);
    }

    fn refresh(&mut self) -> Update {
        let sticky_changed = self.overlay.update(&self.engine, self.list.header_indexes());
        let signals = self.observer.observe(&self.engine.scroll_state());
        Update {
            sticky_changed,
            signals,
            ..self.snapshot()
        }
    }

    fn snapshot(&self) -> Update {
        Update {
            offset: self.engine.scroll_offset(),
            sticky_changed: false,
            signals: None,
            animating: self.task.is_some(),
        }
    }
}

impl<G: fmt::Debug, T> fmt::Debug for Controller<G, T>
where
    NodeKey<G>: NodeKeyBound,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("options", &self.options)
            .field("nodes", &self.list.len())
            .field("scroll_offset", &self.engine.scroll_offset())
            .field("sticky", &self.overlay.current())
            .field("task", &self.task)
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}

fn list_options<G, T>(
    list: &SectionedList<G, T>,
    options: &ControllerOptions,
) -> ListOptions<NodeKey<G>>
where
    G: Clone + Send + Sync + 'static,
    T: ListItem,
{
    let keys: Arc<[NodeKey<G>]> = (0..list.len()).filter_map(|i| list.node_key(i)).collect();
    let headers: Arc<[bool]> = (0..list.len())
        .map(|i| list.node(i).is_some_and(|n| n.is_header()))
        .collect();
    let header_height = options.header_height as i64;
    let row_height = options.row_height as i64;

    ListOptions::new_with_key(
        list.len(),
        move |i| if headers[i] { header_height } else { row_height },
        move |i| keys[i].clone(),
    )
    .with_overscan(options.overscan)
    .with_padding(options.padding_start, options.padding_end)
    .with_initial_viewport_extent(options.initial_viewport_extent)
}
