//! A headless engine for grouped lists with sticky section headers.
//!
//! For the controller, animated scrolling and anchoring, see the `sticky-list-adapter` crate.
//!
//! The pipeline:
//! - [`group_by_key`] partitions an ordered item sequence into key-ordered [`Group`]s.
//! - [`SectionedList`] flattens groups into render nodes (a header, then its items).
//! - [`ListEngine`] maps scroll offsets to visible node ranges through prefix sums over node
//!   heights, and clamps every scroll write.
//! - [`sticky_header_at`] / [`StickyHeaderOverlay`] decide which header is pinned and how far
//!   the next one has pushed it.
//! - [`ScrollPositionObserver`] derives memoized UI signals such as "show scroll to top".
//!
//! It is UI-agnostic. A host is expected to provide:
//! - the viewport extent
//! - scroll input (offsets or deltas)
//! - node heights (estimates and, optionally, measurements)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod emitter;
mod engine;
mod fenwick;
mod group;
mod item;
mod key;
mod layout;
mod observer;
mod options;
mod recycle;
mod state;
mod sticky;
mod types;

#[cfg(test)]
mod tests;

pub use emitter::IndexEmitter;
pub use engine::ListEngine;
pub use group::{
    Group, group_by_initial, group_by_key, group_by_key_with, initial_of, sort_by_key_text,
};
pub use item::{Item, ListItem};
pub use key::NodeKeyBound;
pub use layout::{NodeContent, NodeKey, NodeKind, SectionedList, contact_sections};
pub use observer::{ScrollPositionObserver, ScrollSignals};
pub use options::{HeightProvider, KeyProvider, ListOptions};
pub use recycle::SlotRecycler;
pub use state::ScrollState;
pub use sticky::{StickyHeader, StickyHeaderOverlay, StickyPhase, sticky_header_at};
pub use types::{Align, NodeRange, PlacedNode, ScrollDirection, Window};
