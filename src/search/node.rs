use crate::{Cost, Point};

/// Index of a [`SearchNode`] in the node table of a single search
pub(crate) type NodeID = usize;

/// A Point as seen by one run of the search.
///
/// `h` is computed once when the Node is created. `g` and `parent` may be lowered while the
/// Node is in the frontier and are frozen once it has been explored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SearchNode {
    pub pos: Point,
    pub g: Cost,
    pub h: Cost,
    pub parent: Option<NodeID>,
    /// discovery order, used to break ties between equally promising Nodes
    pub seq: usize,
}

impl SearchNode {
    pub fn new(pos: Point, g: Cost, h: Cost, parent: Option<NodeID>, seq: usize) -> SearchNode {
        SearchNode {
            pos,
            g,
            h,
            parent,
            seq,
        }
    }

    pub fn f(&self) -> Cost {
        self.g + self.h
    }

    /// The key the frontier orders Nodes by: lowest `f`, then lowest `h`, then earliest discovery.
    pub fn priority(&self) -> Priority {
        Priority {
            f: self.f(),
            h: self.h,
            seq: self.seq,
        }
    }

    pub fn relax(&mut self, g: Cost, parent: NodeID) {
        self.g = g;
        self.parent = Some(parent);
    }
}

/// Ordering key of a frontier entry. Smaller is better.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Priority {
    pub f: Cost,
    pub h: Cost,
    pub seq: usize,
}
