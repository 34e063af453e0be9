use alloc::sync::Arc;

/// Supplies the height of node `i` in the scroll axis.
///
/// Negative values are treated as zero.
pub type HeightProvider = Arc<dyn Fn(usize) -> i64 + Send + Sync>;

/// Supplies the stable identity of node `i`.
pub type KeyProvider<K> = Arc<dyn Fn(usize) -> K + Send + Sync>;

/// Configuration for [`crate::ListEngine`].
///
/// Closures are stored in `Arc`s, so cloning options to tweak a field and passing them back
/// through `ListEngine::set_options` is cheap.
pub struct ListOptions<K = usize> {
    pub count: usize,
    pub node_height: HeightProvider,
    pub node_key: KeyProvider<K>,

    /// Extra nodes rendered on each side of the visible range.
    pub overscan: usize,

    /// Content padding before the first node.
    pub padding_start: u32,
    /// Content padding after the last node.
    pub padding_end: u32,

    pub initial_offset: u64,
    pub initial_viewport_extent: u32,
}

impl<K> Clone for ListOptions<K> {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            node_height: Arc::clone(&self.node_height),
            node_key: Arc::clone(&self.node_key),
            overscan: self.overscan,
            padding_start: self.padding_start,
            padding_end: self.padding_end,
            initial_offset: self.initial_offset,
            initial_viewport_extent: self.initial_viewport_extent,
        }
    }
}

impl ListOptions<usize> {
    /// Options for a list whose nodes are identified by their index.
    pub fn new(count: usize, node_height: impl Fn(usize) -> i64 + Send + Sync + 'static) -> Self {
        Self::new_with_key(count, node_height, |i| i)
    }
}

impl<K> ListOptions<K> {
    /// Options with a custom key mapping.
    ///
    /// Measured heights follow keys: after a reorder, `node_key(i)` must return the identity of
    /// whatever now sits at index `i`.
    pub fn new_with_key(
        count: usize,
        node_height: impl Fn(usize) -> i64 + Send + Sync + 'static,
        node_key: impl Fn(usize) -> K + Send + Sync + 'static,
    ) -> Self {
        Self {
            count,
            node_height: Arc::new(node_height),
            node_key: Arc::new(node_key),
            overscan: 1,
            padding_start: 0,
            padding_end: 0,
            initial_offset: 0,
            initial_viewport_extent: 0,
        }
    }

    pub fn with_node_height(
        mut self,
        node_height: impl Fn(usize) -> i64 + Send + Sync + 'static,
    ) -> Self {
        self.node_height = Arc::new(node_height);
        self
    }

    pub fn with_node_key(mut self, node_key: impl Fn(usize) -> K + Send + Sync + 'static) -> Self {
        self.node_key = Arc::new(node_key);
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_padding(mut self, padding_start: u32, padding_end: u32) -> Self {
        self.padding_start = padding_start;
        self.padding_end = padding_end;
        self
    }

    pub fn with_initial_offset(mut self, initial_offset: u64) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_initial_viewport_extent(mut self, extent: u32) -> Self {
        self.initial_viewport_extent = extent;
        self
    }
}

impl<K> core::fmt::Debug for ListOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListOptions")
            .field("count", &self.count)
            .field("overscan", &self.overscan)
            .field("padding_start", &self.padding_start)
            .field("padding_end", &self.padding_end)
            .field("initial_offset", &self.initial_offset)
            .field("initial_viewport_extent", &self.initial_viewport_extent)
            .finish_non_exhaustive()
    }
}
