use alloc::vec::Vec;

use crate::key::{KeyMap, NodeKeyBound};

/// Assigns render slots to node keys across frames.
///
/// A key that stays on screen keeps its slot no matter how its index moves, so reordering the
/// data without changing keys never swaps content between slots. Keys that leave the screen
/// free their slots for reuse, lowest slot first.
#[derive(Clone, Debug)]
pub struct SlotRecycler<K> {
    slots: KeyMap<K, usize>,
    free: Vec<usize>, // descending, so `pop` yields the lowest
    allocated: usize,
}

impl<K> Default for SlotRecycler<K> {
    fn default() -> Self {
        Self {
            slots: KeyMap::default(),
            free: Vec::new(),
            allocated: 0,
        }
    }
}

impl<K: NodeKeyBound + Clone> SlotRecycler<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total slots ever created (the render pool size).
    pub fn capacity(&self) -> usize {
        self.allocated
    }

    pub fn slot_of(&self, key: &K) -> Option<usize> {
        self.slots.get(key).copied()
    }

    /// Assigns slots for this frame's keys, returned in the same order.
    ///
    /// A key repeated within one frame resolves to a single slot.
    pub fn assign(&mut self, keys: &[K]) -> Vec<usize> {
        let mut retained: KeyMap<K, usize> = KeyMap::default();
        let mut out: Vec<Option<usize>> = Vec::with_capacity(keys.len());
        for key in keys {
            if let Some(&slot) = retained.get(key) {
                out.push(Some(slot));
            } else if let Some(slot) = self.slots.remove(key) {
                retained.insert(key.clone(), slot);
                out.push(Some(slot));
            } else {
                out.push(None);
            }
        }

        // Whatever was not retained went off screen.
        let released = self.slots.len();
        self.free.extend(core::mem::take(&mut self.slots).into_values());
        if released > 0 {
            self.free.sort_unstable_by(|a, b| b.cmp(a));
        }

        for (key, slot) in keys.iter().zip(out.iter_mut()) {
            if slot.is_some() {
                continue;
            }
            let assigned = match retained.get(key) {
                Some(&s) => s,
                None => {
                    let s = self.free.pop().unwrap_or_else(|| {
                        self.allocated += 1;
                        self.allocated - 1
                    });
                    retained.insert(key.clone(), s);
                    s
                }
            };
            *slot = Some(assigned);
        }

        self.slots = retained;
        out.into_iter().map(|s| s.unwrap_or(0)).collect()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.allocated = 0;
    }
}
