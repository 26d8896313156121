use super::node::{NodeID, Priority};

/// The open set of a search: a binary min-heap that also knows where each Node sits in it.
///
/// Every Node is in the heap at most once. Lowering the key of a queued Node moves the existing
/// entry instead of pushing a second one.
#[derive(Clone, Debug, Default)]
pub(crate) struct Frontier {
    heap: Vec<(Priority, NodeID)>,
    /// heap slot of every queued Node, indexed by NodeID
    slots: Vec<Option<usize>>,
}

impl Frontier {
    pub fn with_capacity(capacity: usize) -> Frontier {
        Frontier {
            heap: Vec::with_capacity(capacity),
            slots: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, id: NodeID) -> bool {
        self.slots.get(id).copied().flatten().is_some()
    }

    pub fn push(&mut self, id: NodeID, priority: Priority) {
        debug_assert!(!self.contains(id), "Node {} queued twice", id);
        if id >= self.slots.len() {
            self.slots.resize(id + 1, None);
        }
        let slot = self.heap.len();
        self.heap.push((priority, id));
        self.slots[id] = Some(slot);
        self.sift_up(slot);
    }

    /// Removes and returns the Node with the smallest Priority.
    pub fn pop(&mut self) -> Option<NodeID> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let (_, id) = self.heap.pop()?;
        self.slots[id] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(id)
    }

    /// Lowers the Priority of a queued Node. Does nothing if the Node is not queued or the
    /// new Priority is not lower.
    pub fn decrease_key(&mut self, id: NodeID, priority: Priority) {
        let Some(slot) = self.slots.get(id).copied().flatten() else {
            return;
        };
        if priority < self.heap[slot].0 {
            self.heap[slot].0 = priority;
            self.sift_up(slot);
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.slots[self.heap[a].1] = Some(a);
        self.slots[self.heap[b].1] = Some(b);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[slot].0 >= self.heap[parent].0 {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < len && self.heap[left].0 < self.heap[smallest].0 {
                smallest = left;
            }
            if right < len && self.heap[right].0 < self.heap[smallest].0 {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }
}
