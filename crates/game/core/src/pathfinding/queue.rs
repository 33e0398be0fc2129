use crate::state::Position;

/// Heap slot: a position and the priority it was pushed with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueueEntry {
    pub position: Position,
    pub priority: i32,
}

/// Array-backed binary min-heap of positions keyed by integer priority.
///
/// Every parent's priority is `<=` both children's. Equal priorities are
/// ordered by whatever the sift operations leave behind, so callers must not
/// rely on FIFO behaviour for ties.
#[derive(Clone, Debug, Default)]
pub struct PriorityQueue {
    heap: Vec<QueueEntry>,
}

impl PriorityQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drops every entry but keeps the allocation.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Lowest priority currently queued.
    pub fn peek_priority(&self) -> Option<i32> {
        self.heap.first().map(|entry| entry.priority)
    }

    /// Inserts in O(log n).
    pub fn push(&mut self, position: Position, priority: i32) {
        self.heap.push(QueueEntry { position, priority });
        self.sift_up(self.heap.len() - 1);
    }

    /// Removes the lowest-priority entry in O(log n).
    pub fn pop(&mut self) -> Option<Position> {
        self.pop_entry().map(|entry| entry.position)
    }

    /// Like [`pop`](Self::pop) but also returns the priority.
    pub fn pop_entry(&mut self) -> Option<QueueEntry> {
        let last = self.heap.pop()?;
        if self.heap.is_empty() {
            return Some(last);
        }

        let root = std::mem::replace(&mut self.heap[0], last);
        self.sift_down(0);
        Some(root)
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[index].priority >= self.heap[parent].priority {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = index * 2 + 1;
            let right = left + 1;
            let priority = self.heap[index].priority;

            let left_smaller = left < len && self.heap[left].priority < priority;
            let right_smaller = right < len && self.heap[right].priority < priority;
            if !left_smaller && !right_smaller {
                break;
            }

            // Prefer the left child on ties.
            let child = if right >= len || self.heap[left].priority <= self.heap[right].priority {
                left
            } else {
                right
            };
            self.heap.swap(index, child);
            index = child;
        }
    }
}
