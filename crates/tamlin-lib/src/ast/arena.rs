//! Index arena for syntax tree nodes.
//!
//! Slots are addressed by [`NodeId`] and recycled through an intrusive
//! free list, so a long parse with heavy backtracking does not grow the
//! store beyond its live peak. Live-node and live-byte counters expose
//! the ownership discipline to tests: any failing parse must leave both
//! exactly where it found them.

use thiserror::Error;

use super::NodeKind;

/// Handle to an occupied slot in an [`Arena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A tagged tree node.
///
/// `data` is empty for grouping nodes and holds the matched bytes for
/// leaves. Links are indices into the owning arena; a node owns its
/// entire child subtree and its entire `next_sibling` chain.
#[derive(Debug)]
pub struct Node {
    pub kind: NodeKind,
    pub data: Box<[u8]>,
    pub first_child: Option<NodeId>,
    pub next_sibling: Option<NodeId>,
}

/// Allocation failure: an arena budget would be exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AllocError {
    /// The node-count budget is exhausted.
    #[error("node budget exhausted ({limit} nodes)")]
    Nodes { limit: u32 },

    /// The payload-byte budget is exhausted.
    #[error("payload budget exhausted ({limit} bytes)")]
    Data { limit: usize },
}

#[derive(Debug)]
enum Slot {
    Occupied(Node),
    Vacant { next_free: Option<u32> },
}

/// Node store with slot reuse and optional budgets.
///
/// Budgets make allocation fallible at a deterministic point, standing in
/// for the fixed-memory allocator the parser originally ran against.
/// An unbudgeted arena never fails to allocate.
#[derive(Debug)]
pub struct Arena {
    slots: Vec<Slot>,
    free_head: Option<u32>,
    live_nodes: u32,
    live_bytes: usize,
    max_nodes: Option<u32>,
    max_data_bytes: Option<usize>,
}

impl Arena {
    /// Create an empty, unbudgeted arena.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            live_nodes: 0,
            live_bytes: 0,
            max_nodes: None,
            max_data_bytes: None,
        }
    }

    /// Cap the number of live nodes; `alloc` fails once the cap is reached.
    pub fn with_max_nodes(mut self, limit: u32) -> Self {
        self.max_nodes = Some(limit);
        self
    }

    /// Cap the total live payload bytes; `alloc` fails once the cap is reached.
    pub fn with_max_data_bytes(mut self, limit: usize) -> Self {
        self.max_data_bytes = Some(limit);
        self
    }

    /// Allocate a node, copying `data` into an owned payload.
    ///
    /// Allocation is two steps (slot, then payload); if the payload budget
    /// fails after the slot was claimed, the slot is returned to the free
    /// list before the error surfaces. No path leaks.
    pub fn alloc(&mut self, kind: NodeKind, data: &[u8]) -> Result<NodeId, AllocError> {
        if let Some(limit) = self.max_nodes
            && self.live_nodes >= limit
        {
            return Err(AllocError::Nodes { limit });
        }
        let id = self.claim_slot(kind);
        if let Some(limit) = self.max_data_bytes
            && self.live_bytes + data.len() > limit
        {
            self.release(id);
            return Err(AllocError::Data { limit });
        }
        self.slot_mut(id).data = data.into();
        self.live_bytes += data.len();
        Ok(id)
    }

    fn claim_slot(&mut self, kind: NodeKind) -> NodeId {
        let node = Node {
            kind,
            data: Box::default(),
            first_child: None,
            next_sibling: None,
        };
        self.live_nodes += 1;
        match self.free_head {
            Some(index) => {
                let Slot::Vacant { next_free } = self.slots[index as usize] else {
                    unreachable!("free list points at occupied slot");
                };
                self.free_head = next_free;
                self.slots[index as usize] = Slot::Occupied(node);
                NodeId(index)
            }
            None => {
                let index = u32::try_from(self.slots.len()).expect("arena overflow");
                self.slots.push(Slot::Occupied(node));
                NodeId(index)
            }
        }
    }

    /// Append `child` at the end of `parent`'s child chain.
    pub fn attach_child(&mut self, parent: NodeId, child: NodeId) {
        match self.node(parent).first_child {
            None => self.slot_mut(parent).first_child = Some(child),
            Some(first) => {
                let mut cur = first;
                while let Some(next) = self.node(cur).next_sibling {
                    cur = next;
                }
                self.slot_mut(cur).next_sibling = Some(child);
            }
        }
    }

    pub(crate) fn set_first_child(&mut self, id: NodeId, child: Option<NodeId>) {
        self.slot_mut(id).first_child = child;
    }

    pub(crate) fn set_next_sibling(&mut self, id: NodeId, sibling: Option<NodeId>) {
        self.slot_mut(id).next_sibling = sibling;
    }

    /// Free one node. Its children and siblings are untouched; use
    /// [`Arena::release_forest`] to free a whole chain.
    ///
    /// Panics if the slot is already vacant.
    pub fn release(&mut self, id: NodeId) {
        let slot = &mut self.slots[id.index()];
        let Slot::Occupied(node) = slot else {
            panic!("release of vacant slot {}", id.0);
        };
        self.live_nodes -= 1;
        self.live_bytes -= node.data.len();
        *slot = Slot::Vacant {
            next_free: self.free_head,
        };
        self.free_head = Some(id.0);
    }

    /// Free a node, its entire child subtree, and all following siblings.
    ///
    /// This is the chain view every combinator unwinds with on failure.
    /// Iterative, and a no-op on `None`.
    pub fn release_forest(&mut self, head: Option<NodeId>) {
        let mut pending = Vec::new();
        pending.extend(head);
        while let Some(id) = pending.pop() {
            let node = self.node(id);
            pending.extend(node.next_sibling);
            pending.extend(node.first_child);
            self.release(id);
        }
    }

    /// Borrow a node. Panics if the slot is vacant.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        match &self.slots[id.index()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("access to vacant slot {}", id.0),
        }
    }

    #[inline]
    fn slot_mut(&mut self, id: NodeId) -> &mut Node {
        match &mut self.slots[id.index()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("access to vacant slot {}", id.0),
        }
    }

    #[inline]
    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.node(id).kind
    }

    #[inline]
    pub fn data(&self, id: NodeId) -> &[u8] {
        &self.node(id).data
    }

    #[inline]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).first_child
    }

    #[inline]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).next_sibling
    }

    /// Iterate over `id`'s direct children in chain order.
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            arena: self,
            cur: self.first_child(id),
        }
    }

    /// Number of live (occupied) nodes.
    #[inline]
    pub fn live_nodes(&self) -> u32 {
        self.live_nodes
    }

    /// Total payload bytes held by live nodes.
    #[inline]
    pub fn live_bytes(&self) -> usize {
        self.live_bytes
    }

    /// Number of slots ever claimed, vacant ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a node's direct children.
pub struct Children<'a> {
    arena: &'a Arena,
    cur: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.cur?;
        self.cur = self.arena.next_sibling(id);
        Some(id)
    }
}
