//! The cancellable animated-scroll job.
//!
//! A [`ScrollTask`] does not own a thread or a timer. The controller polls it on every tick and
//! writes the sampled offset into the engine, so between two ticks the scroll offset is always a
//! fully applied value. Cancelling only stops future writes: the list stays wherever the last
//! tick put it.
use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, Ordering};

use crate::Tween;

/// A shared cancellation flag. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskStatus {
    /// Still animating; apply this offset.
    Running(u64),
    /// Reached the target; apply this offset and drop the task.
    Completed(u64),
    /// Cancelled; apply nothing.
    Cancelled,
}

/// An in-flight animated scroll to a node.
#[derive(Clone, Debug)]
pub struct ScrollTask {
    tween: Tween,
    target_index: usize,
    token: CancellationToken,
}

impl ScrollTask {
    pub fn new(tween: Tween, target_index: usize) -> Self {
        Self {
            tween,
            target_index,
            token: CancellationToken::new(),
        }
    }

    pub fn tween(&self) -> &Tween {
        &self.tween
    }

    pub fn target_index(&self) -> usize {
        self.target_index
    }

    /// A handle that cancels this task from anywhere, including another thread.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn poll(&self, now_ms: u64) -> TaskStatus {
        if self.token.is_cancelled() {
            return TaskStatus::Cancelled;
        }
        let offset = self.tween.sample(now_ms);
        if self.tween.is_done(now_ms) {
            TaskStatus::Completed(offset)
        } else {
            TaskStatus::Running(offset)
        }
    }

    /// Points the animation at a new offset from the current one, keeping its end time.
    pub fn retarget(&mut self, now_ms: u64, from: u64, to: u64) {
        self.tween.retarget(now_ms, from, to);
    }
}
