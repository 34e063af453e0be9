//! Key-indexed maps used for measurement caching, slot recycling and key lookups.
//!
//! With `std` the maps are hashed; without it they fall back to ordered maps, so the key
//! bound changes from `Hash + Eq` to `Ord`.
#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
pub(crate) type KeyMap<K, V> = HashMap<K, V>;
#[cfg(not(feature = "std"))]
pub(crate) type KeyMap<K, V> = BTreeMap<K, V>;

/// Bound for node keys: anything usable as a map key under the active feature set.
#[cfg(feature = "std")]
pub trait NodeKeyBound: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq> NodeKeyBound for K {}

/// Bound for node keys: anything usable as a map key under the active feature set.
#[cfg(not(feature = "std"))]
pub trait NodeKeyBound: Ord {}
#[cfg(not(feature = "std"))]
impl<K: Ord> NodeKeyBound for K {}
