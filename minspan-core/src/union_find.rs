//! Disjoint-set forest over dense integer indices.
//!
//! Kruskal's algorithm uses it for cycle detection and the verification pass
//! replays an MST through a fresh instance. Union by size combined with path
//! compression keeps every operation amortised near-constant.

/// A union-find structure over the elements `0..len`.
///
/// # Examples
/// ```
/// use minspan_core::UnionFind;
///
/// let mut components = UnionFind::new(4);
/// assert!(components.union(0, 1));
/// assert!(!components.union(1, 0));
/// assert!(components.connected(0, 1));
/// assert!(!components.connected(0, 2));
/// assert_eq!(components.count(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl UnionFind {
    /// Creates `len` singleton components.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            count: len,
        }
    }

    /// Returns the number of elements tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the structure tracks no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of distinct components.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the root of the component containing `node`, compressing the
    /// path walked.
    ///
    /// # Panics
    /// Panics when `node >= self.len()`.
    pub fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Returns `true` when `left` and `right` share a root.
    ///
    /// # Panics
    /// Panics when either index is out of range.
    pub fn connected(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// Returns `false` without changes when they are already joined. The
    /// smaller tree is attached beneath the larger; on equal sizes `left`'s
    /// root wins.
    ///
    /// # Panics
    /// Panics when either index is out of range.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return false;
        }
        if self.size[left] < self.size[right] {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        self.size[left] += self.size[right];
        self.count -= 1;
        true
    }
}
