use crate::Window;

/// Emits node indexes for a render pass in ascending order, without allocating.
///
/// The output contract every consumer relies on:
/// - Out-of-bounds indexes are dropped (and debug-asserted).
/// - Repeated indexes are dropped.
/// - Indexes below the last emitted one are dropped (and debug-asserted).
pub struct IndexEmitter<'a> {
    window: Window,
    last: Option<usize>,
    emit: &'a mut dyn FnMut(usize),
}

impl<'a> IndexEmitter<'a> {
    pub fn new(window: Window, emit: &'a mut dyn FnMut(usize)) -> Self {
        Self {
            window,
            last: None,
            emit,
        }
    }

    pub fn window(&self) -> Window {
        self.window
    }

    pub fn emit(&mut self, index: usize) {
        if index >= self.window.count {
            swarn!(
                index,
                count = self.window.count,
                "IndexEmitter: index past the end of the list"
            );
            debug_assert!(
                index < self.window.count,
                "IndexEmitter: index past the end of the list (i={index}, count={})",
                self.window.count
            );
            return;
        }

        match self.last {
            Some(prev) if index == prev => return,
            Some(prev) if index < prev => {
                swarn!(prev, next = index, "IndexEmitter: indexes out of order");
                debug_assert!(
                    index > prev,
                    "IndexEmitter: indexes out of order (prev={prev}, next={index})"
                );
                return;
            }
            _ => {}
        }

        self.last = Some(index);
        (self.emit)(index);
    }

    pub fn emit_range(&mut self, start_index: usize, end_index: usize) {
        let end = end_index.min(self.window.count);
        for i in start_index..end {
            self.emit(i);
        }
    }

    pub fn emit_visible(&mut self) {
        self.emit_range(self.window.start_index, self.window.end_index);
    }

    pub fn emit_overscanned(&mut self) {
        let r = self.window.overscanned();
        self.emit_range(r.start_index, r.end_index);
    }

    /// Emits the overscanned range plus `pinned`, keeping the output sorted whether the pinned
    /// index lies before, inside, or after the range.
    pub fn emit_overscanned_with_pinned(&mut self, pinned: Option<usize>) {
        let r = self.window.overscanned();
        if let Some(p) = pinned.filter(|&p| p < r.start_index) {
            self.emit(p);
        }
        self.emit_range(r.start_index, r.end_index);
        if let Some(p) = pinned.filter(|&p| p >= r.end_index) {
            self.emit(p);
        }
    }
}
