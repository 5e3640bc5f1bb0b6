//! Binary heap keyed by a caller-supplied scoring function.

/// Whether [`ScoreHeap::pop`] yields the smallest or the largest score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapOrder {
    Min,
    Max,
}

/// A binary heap over items scored by a function.
///
/// The ordering is explicit rather than encoded through score negation:
/// a `Min` heap pops the numerically smallest score first, a `Max` heap
/// the largest. Push and pop are O(log n).
pub struct ScoreHeap<T, F>
where
    F: Fn(&T) -> f64,
{
    items: Vec<T>,
    score: F,
    order: HeapOrder,
}

impl<T, F> ScoreHeap<T, F>
where
    F: Fn(&T) -> f64,
{
    /// Creates a heap that pops the smallest score first.
    #[must_use]
    pub fn min(score: F) -> Self {
        Self {
            items: Vec::new(),
            score,
            order: HeapOrder::Min,
        }
    }

    /// Creates a heap that pops the largest score first.
    #[must_use]
    pub fn max(score: F) -> Self {
        Self {
            items: Vec::new(),
            score,
            order: HeapOrder::Max,
        }
    }

    /// Number of items in the heap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the heap holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item that the next `pop` would remove.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Adds an item, restoring the heap invariant.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.bubble_up(self.items.len() - 1);
    }

    /// Removes and returns the extremal item, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let top = self.items.pop();
        if !self.items.is_empty() {
            self.sink(0);
        }
        top
    }

    /// Returns `true` when index `a` must sit above index `b`.
    fn ahead(&self, a: usize, b: usize) -> bool {
        let sa = (self.score)(&self.items[a]);
        let sb = (self.score)(&self.items[b]);
        match self.order {
            HeapOrder::Min => sa < sb,
            HeapOrder::Max => sa > sb,
        }
    }

    fn bubble_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.ahead(i, parent) {
                break;
            }
            self.items.swap(i, parent);
            i = parent;
        }
    }

    fn sink(&mut self, mut i: usize) {
        let n = self.items.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut best = i;
            if left < n && self.ahead(left, best) {
                best = left;
            }
            if right < n && self.ahead(right, best) {
                best = right;
            }
            if best == i {
                break;
            }
            self.items.swap(i, best);
            i = best;
        }
    }
}
