use alloc::vec::Vec;

/// Cumulative node heights, indexed for `O(log n)` prefix queries and point updates.
///
/// Slot `i` (1-based) holds the sum of the `lowbit(i)` heights ending at node `i - 1`.
#[derive(Clone, Debug, Default)]
pub(crate) struct HeightIndex {
    slots: Vec<u64>,
    total: u64,
    top_step: usize,
}

impl HeightIndex {
    pub(crate) fn from_heights(heights: &[u32]) -> Self {
        let n = heights.len();
        let mut slots = alloc::vec![0u64; n + 1];
        let mut total = 0u64;
        for (i, &h) in heights.iter().enumerate() {
            let slot = i + 1;
            total = total.saturating_add(h as u64);
            slots[slot] = slots[slot].saturating_add(h as u64);
            let parent = slot + lowbit(slot);
            if parent <= n {
                slots[parent] = slots[parent].saturating_add(slots[slot]);
            }
        }
        Self {
            slots,
            total,
            top_step: top_step(n),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len().saturating_sub(1)
    }

    pub(crate) fn total(&self) -> u64 {
        self.total
    }

    /// Sum of the heights of the first `count` nodes.
    pub(crate) fn prefix(&self, count: usize) -> u64 {
        let mut slot = count.min(self.len());
        let mut sum = 0u64;
        while slot > 0 {
            sum = sum.saturating_add(self.slots[slot]);
            slot &= slot - 1;
        }
        sum
    }

    /// Replaces the height of node `index` (`old` must be its current height).
    pub(crate) fn replace(&mut self, index: usize, old: u32, new: u32) {
        let n = self.len();
        if index >= n || old == new {
            return;
        }
        let grow = new > old;
        let diff = new.abs_diff(old) as u64;
        self.total = if grow {
            self.total.saturating_add(diff)
        } else {
            self.total.saturating_sub(diff)
        };
        let mut slot = index + 1;
        while slot <= n {
            self.slots[slot] = if grow {
                self.slots[slot].saturating_add(diff)
            } else {
                debug_assert!(self.slots[slot] >= diff, "height index underflow at {slot}");
                self.slots[slot].saturating_sub(diff)
            };
            slot += lowbit(slot);
        }
    }

    /// Number of leading nodes whose cumulative height is `<= target`.
    ///
    /// For an offset inside the list this is the index of the node covering it; zero-height
    /// nodes at that offset are skipped.
    pub(crate) fn nodes_within(&self, mut target: u64) -> usize {
        let n = self.len();
        let mut consumed = 0usize;
        let mut step = self.top_step;
        while step != 0 {
            let next = consumed + step;
            if next <= n && self.slots[next] <= target {
                target -= self.slots[next];
                consumed = next;
            }
            step >>= 1;
        }
        consumed
    }
}

fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}

fn top_step(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    1usize << (usize::BITS - 1 - n.leading_zeros())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_sums_match_linear_scan() {
        let heights = [40u32, 65, 0, 65, 40, 65, 65];
        let index = HeightIndex::from_heights(&heights);
        let mut acc = 0u64;
        for (i, &h) in heights.iter().enumerate() {
            assert_eq!(index.prefix(i), acc);
            acc += h as u64;
        }
        assert_eq!(index.total(), acc);
        assert_eq!(index.prefix(heights.len() + 5), acc);
    }

    #[test]
    fn replace_updates_totals_and_lookups() {
        let mut index = HeightIndex::from_heights(&[10, 10, 10]);
        index.replace(1, 10, 30);
        assert_eq!(index.total(), 50);
        assert_eq!(index.prefix(2), 40);
        assert_eq!(index.nodes_within(39), 1);
        assert_eq!(index.nodes_within(40), 2);

        index.replace(1, 30, 0);
        assert_eq!(index.total(), 20);
        // Node 1 is empty: offset 10 belongs to node 2.
        assert_eq!(index.nodes_within(10), 2);
    }

    #[test]
    fn empty_index_is_inert() {
        let index = HeightIndex::from_heights(&[]);
        assert_eq!(index.len(), 0);
        assert_eq!(index.total(), 0);
        assert_eq!(index.nodes_within(100), 0);
    }
}
