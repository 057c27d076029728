use log::debug;

use crate::arc::{Arc, ArcId};
use crate::node::{ActiveLink, Node, NodeId, Parent};

/// A max-flow/min-cut problem instance and, after [`Graph::run`], its
/// solution.
///
/// Implements the Boykov-Kolmogorov augmenting-path algorithm (see
/// [`Graph::run`] for the phase breakdown): two search trees grown over a
/// residual graph, path augmentation, and orphan adoption. Build the graph
/// with [`Graph::add_node`], [`Graph::set_tweights`] and [`Graph::add_edge`],
/// call [`Graph::run`], then read [`Graph::flow`] and [`Graph::is_source`].
///
/// # Example
/// ```
/// use max_flow::Graph;
///
/// let mut g = Graph::new();
/// let nodes: Vec<_> = (0..2).map(|_| g.add_node()).collect();
/// g.set_tweights(nodes[0], 1, 5);
/// g.set_tweights(nodes[1], 2, 6);
/// g.add_edge(nodes[0], nodes[1], 3, 4);
/// g.run();
/// assert_eq!(g.flow(), 3);
/// ```
#[derive(Debug, Default)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) arcs: Vec<Arc>,

    pub(crate) flow: i64,
    pub(crate) counter: u64,
    finished: bool,

    pub(crate) queue_first: Option<NodeId>,
    pub(crate) queue_last: Option<NodeId>,
    pub(crate) orphan_first: Option<NodeId>,
    pub(crate) orphan_last: Option<NodeId>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node to the graph and returns a handle to it.
    pub fn add_node(&mut self) -> NodeId {
        self.nodes.push(Node::new());
        NodeId((self.nodes.len() - 1) as u32)
    }

    /// Sets the terminal capacities of `node`: the residual capacity of the
    /// implicit source→node arc and of the node→sink arc.
    ///
    /// Must be called at most once per node; a second call is not detected
    /// and leaves the graph in an unspecified state.
    pub fn set_tweights(&mut self, node: NodeId, cap_source: i64, cap_sink: i64) {
        debug_assert_eq!(
            self.node(node).tr_cap,
            0,
            "set_tweights called twice for the same node"
        );
        self.flow += cap_source.min(cap_sink);
        self.node_mut(node).tr_cap = cap_source - cap_sink;
    }

    /// Adds a pair of sister arcs between `from` and `to`, with independent
    /// residual capacities in each direction.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, cap: i64, rev_cap: i64) {
        let forward_id = ArcId(self.arcs.len() as u32);
        let backward_id = ArcId(self.arcs.len() as u32 + 1);

        self.arcs.push(Arc {
            head: to,
            next: self.node(from).first,
            sister: backward_id,
            r_cap: cap,
        });
        self.arcs.push(Arc {
            head: from,
            next: self.node(to).first,
            sister: forward_id,
            r_cap: rev_cap,
        });

        self.node_mut(from).first = Some(forward_id);
        self.node_mut(to).first = Some(backward_id);
    }

    /// The total flow found by [`Graph::run`]. Meaningless before `run` is
    /// called.
    pub fn flow(&self) -> i64 {
        self.flow
    }

    /// Whether `node` lies in the source side of the minimum cut found by
    /// [`Graph::run`]. Meaningless before `run` is called.
    pub fn is_source(&self, node: NodeId) -> bool {
        !matches!(self.node(node).parent, Parent::Unset) && !self.node(node).is_sink
    }

    /// Runs the Boykov-Kolmogorov algorithm to completion. Idempotent: a
    /// second call is a no-op.
    ///
    /// Alternates three phases until the active queue is empty:
    /// growth (extend the source/sink trees until they touch), augmentation
    /// (push flow along the discovered path), and adoption (reparent or
    /// expel nodes orphaned by saturated arcs).
    pub fn run(&mut self) {
        if self.finished {
            return;
        }

        self.init();

        let mut current: Option<NodeId> = None;
        loop {
            let i = match current.take() {
                Some(i) if !matches!(self.node(i).parent, Parent::Unset) => Some(i),
                _ => self.next_active(),
            };
            let Some(i) = i else { break };

            let bridge = self.grow(i);
            self.counter += 1;

            let Some(bridge) = bridge else {
                current = None;
                continue;
            };

            current = Some(i);
            self.augment(bridge);
            self.adopt_all();
        }

        debug!("max-flow run finished with flow = {}", self.flow);
        self.finished = true;
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0 as usize]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0 as usize]
    }

    pub(crate) fn arc(&self, id: ArcId) -> &Arc {
        &self.arcs[id.0 as usize]
    }

    pub(crate) fn arc_mut(&mut self, id: ArcId) -> &mut Arc {
        &mut self.arcs[id.0 as usize]
    }

    fn init(&mut self) {
        self.queue_first = None;
        self.queue_last = None;

        for idx in 0..self.nodes.len() {
            let id = NodeId(idx as u32);
            let node = self.node_mut(id);
            node.active_next = ActiveLink::NotQueued;
            node.counter = 0;

            if node.tr_cap > 0 {
                node.is_sink = false;
                node.parent = Parent::Terminal;
                node.dist = 1;
                self.set_active(id);
            } else if node.tr_cap < 0 {
                node.is_sink = true;
                node.parent = Parent::Terminal;
                node.dist = 1;
                self.set_active(id);
            } else {
                node.parent = Parent::Unset;
            }
        }

        self.counter = 0;
    }

    /// Appends `i` to the active queue, unless it is already linked.
    pub(crate) fn set_active(&mut self, i: NodeId) {
        if self.node(i).active_next != ActiveLink::NotQueued {
            return;
        }

        self.node_mut(i).active_next = ActiveLink::QueueTail;
        if let Some(last) = self.queue_last {
            self.node_mut(last).active_next = ActiveLink::Linked(i);
        } else {
            self.queue_first = Some(i);
        }
        self.queue_last = Some(i);
    }

    /// Pops the head of the active queue, skipping nodes that have since
    /// been expelled from their tree.
    pub(crate) fn next_active(&mut self) -> Option<NodeId> {
        loop {
            let i = self.queue_first?;

            match self.node(i).active_next {
                ActiveLink::QueueTail => {
                    self.queue_first = None;
                    self.queue_last = None;
                }
                ActiveLink::Linked(next) => {
                    self.queue_first = Some(next);
                }
                ActiveLink::NotQueued => unreachable!("queue head must be linked"),
            }
            self.node_mut(i).active_next = ActiveLink::NotQueued;

            if !matches!(self.node(i).parent, Parent::Unset) {
                return Some(i);
            }
        }
    }

    /// Pushes `i` to the head of the orphan list (used for orphans
    /// discovered while augmenting).
    pub(crate) fn push_orphan_front(&mut self, i: NodeId) {
        self.node_mut(i).orphan_next = self.orphan_first;
        self.orphan_first = Some(i);
        if self.orphan_last.is_none() {
            self.orphan_last = Some(i);
        }
    }

    /// Appends `i` to the tail of the orphan list (used for orphans
    /// discovered while expelling a node from its tree).
    pub(crate) fn push_orphan_back(&mut self, i: NodeId) {
        self.node_mut(i).orphan_next = None;
        if let Some(last) = self.orphan_last {
            self.node_mut(last).orphan_next = Some(i);
        } else {
            self.orphan_first = Some(i);
        }
        self.orphan_last = Some(i);
    }

    fn pop_orphan(&mut self) -> Option<NodeId> {
        let i = self.orphan_first?;
        self.orphan_first = self.node(i).orphan_next;
        if self.orphan_first.is_none() {
            self.orphan_last = None;
        }
        Some(i)
    }

    fn adopt_all(&mut self) {
        while let Some(i) = self.pop_orphan() {
            if self.node(i).is_sink {
                self.process_sink_orphan(i);
            } else {
                self.process_source_orphan(i);
            }
        }
    }
}
