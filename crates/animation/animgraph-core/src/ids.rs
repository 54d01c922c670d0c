//! Opaque node handles and their allocator.

use serde::{Deserialize, Serialize};

/// Handle of a node (sub-controller or mixer) in the host's animation graph.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

/// Monotonic allocator for NodeId.
#[derive(Default, Debug)]
pub struct NodeIdAllocator {
    next: u32,
}

impl NodeIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc(&mut self) -> NodeId {
        let id = NodeId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}
