use crate::arc::ArcId;

/// A non-owning handle to a [`crate::Graph`] node.
///
/// Stable for the lifetime of the `Graph` that produced it; cheap to copy,
/// compare, and hash, since it is just an index into the graph's node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

/// The occupancy state of a node's slot in its search tree.
///
/// `Terminal` and `Orphan` stand in for the original algorithm's two
/// sentinel arc pointers: they are tags, never dereferenced as real arcs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Parent {
    /// Not part of either search tree.
    Unset,
    /// A root: directly connected to the source or sink supernode.
    Terminal,
    /// Awaiting reparenting during the adoption phase.
    Orphan,
    /// A real arc leading to this node's parent in its search tree.
    Arc(ArcId),
}

/// This node's position in the singly-linked active-node queue.
///
/// Spells out the two bits the original packs into a self-referential
/// pointer (`next == self` for the tail sentinel, `next == null` for "not
/// queued") as distinct states, since a safe arena index can't carry that
/// ambiguity without an extra branch at every read site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ActiveLink {
    NotQueued,
    /// Last node in the queue.
    QueueTail,
    /// Followed by another queued node.
    Linked(NodeId),
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Node {
    pub(crate) first: Option<ArcId>,
    pub(crate) parent: Parent,
    pub(crate) active_next: ActiveLink,
    /// Link in the singly-linked orphan list; `None` both for "not in the
    /// list" and "last in the list" (the orphan list has no idempotence
    /// requirement, unlike the active queue, so the ambiguity is harmless).
    pub(crate) orphan_next: Option<NodeId>,
    pub(crate) is_sink: bool,
    pub(crate) dist: u32,
    pub(crate) counter: u64,
    pub(crate) tr_cap: i64,
}

impl Node {
    pub(crate) fn new() -> Self {
        Self {
            first: None,
            parent: Parent::Unset,
            active_next: ActiveLink::NotQueued,
            orphan_next: None,
            is_sink: false,
            dist: 0,
            counter: 0,
            tr_cap: 0,
        }
    }
}
