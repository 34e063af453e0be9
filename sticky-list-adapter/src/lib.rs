//! Controller and animation helpers for the `sticky-list` engine.
//!
//! `sticky-list` holds the math: grouping, visible ranges, the pinned header, scroll signals.
//! This crate wraps it in a single-owner [`Controller`] that a host drives with [`Intent`]s:
//!
//! - animated scroll-to (including "scroll to top") as a tick-driven, cancellable
//!   [`ScrollTask`]
//! - scroll anchoring across data replacement ([`ScrollAnchor`])
//! - render frames with key-stable slots ([`RenderFrame`])
//! - an intent queue for multi-threaded hosts (`IntentSender`, `std` only)
//!
//! Like the engine, it holds no UI objects and binds to no toolkit.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod controller;
mod frame;
mod intent;
mod sample;
mod task;
mod tween;


pub use anchor::{ScrollAnchor, apply_anchor, capture_first_visible_anchor};
pub use controller::{Controller, ControllerOptions, Update};
pub use frame::{RenderFrame, RenderNode};
pub use intent::Intent;
#[cfg(feature = "std")]
pub use intent::IntentSender;
pub use sample::{sample_contacts, sample_controller, sample_list};
pub use task::{CancellationToken, ScrollTask, TaskStatus};
pub use tween::{Easing, Tween};
