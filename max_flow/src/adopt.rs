use crate::arc::ArcId;
use crate::graph::Graph;
use crate::node::{NodeId, Parent};

const INFINITE_DIST: u32 = u32::MAX;

impl Graph {
    /// Reparents or expels a sink-tree orphan.
    pub(crate) fn process_sink_orphan(&mut self, i: NodeId) {
        self.process_orphan(i, true);
    }

    /// Reparents or expels a source-tree orphan.
    ///
    /// Candidates must satisfy `node.is_sink == is_sink`; for the source
    /// tree that means `!node.is_sink`, matching [`Graph::process_sink_orphan`]'s
    /// `node.is_sink` test rather than testing `is_sink` on the wrong side.
    pub(crate) fn process_source_orphan(&mut self, i: NodeId) {
        self.process_orphan(i, false);
    }

    fn process_orphan(&mut self, i: NodeId, is_sink: bool) {
        let mut best_arc: Option<ArcId> = None;
        let mut best_dist = INFINITE_DIST;

        let mut next = self.node(i).first;
        while let Some(a0) = next {
            next = self.arc(a0).next;

            if self.tree_residual(a0, is_sink) == 0 {
                continue;
            }

            let head = self.arc(a0).head;
            if self.node(head).is_sink != is_sink || matches!(self.node(head).parent, Parent::Unset)
            {
                continue;
            }

            if let Some(dist) = self.candidate_distance(head) {
                if dist < best_dist {
                    best_arc = Some(a0);
                    best_dist = dist;
                }
            }
        }

        if let Some(a0) = best_arc {
            self.node_mut(i).parent = Parent::Arc(a0);
            self.node_mut(i).counter = self.counter;
            self.node_mut(i).dist = best_dist + 1;
            return;
        }

        self.node_mut(i).parent = Parent::Unset;
        self.node_mut(i).counter = 0;

        let mut next = self.node(i).first;
        while let Some(a0) = next {
            next = self.arc(a0).next;
            let j = self.arc(a0).head;

            let parent = self.node(j).parent;
            if self.node(j).is_sink != is_sink || matches!(parent, Parent::Unset) {
                continue;
            }

            if self.tree_residual(a0, is_sink) != 0 {
                self.set_active(j);
            }

            if let Parent::Arc(pa) = parent {
                if self.arc(pa).head == i {
                    self.node_mut(j).parent = Parent::Orphan;
                    self.push_orphan_back(j);
                }
            }
        }
    }

    /// Residual capacity of `a0` in the direction needed to grow/reconnect
    /// `a0`'s tail's tree: forward capacity for the source tree, the
    /// sister's capacity for the sink tree.
    fn tree_residual(&self, a0: ArcId, is_sink: bool) -> i64 {
        if is_sink {
            self.arc(a0).r_cap
        } else {
            self.arc(self.arc(a0).sister).r_cap
        }
    }

    /// Distance from `start` to its tree's terminal, walking the parent
    /// chain. Uses and refreshes the per-node `(counter, dist)` cache so
    /// repeated candidate evaluations within the same adoption round share
    /// work. `None` if the chain runs into a node that is itself currently
    /// an orphan.
    fn candidate_distance(&mut self, start: NodeId) -> Option<u32> {
        let mut j = start;
        let mut d: i64 = 0;
        let total = loop {
            if self.node(j).counter == self.counter {
                d += self.node(j).dist as i64;
                break Some(d);
            }
            let parent = self.node(j).parent;
            d += 1;
            match parent {
                Parent::Terminal => {
                    self.node_mut(j).counter = self.counter;
                    self.node_mut(j).dist = 1;
                    break Some(d);
                }
                Parent::Orphan => break None,
                Parent::Arc(a) => j = self.arc(a).head,
                Parent::Unset => unreachable!("tree path must be intact"),
            }
        }?;

        let mut j = start;
        let mut d = total;
        while self.node(j).counter != self.counter {
            self.node_mut(j).counter = self.counter;
            self.node_mut(j).dist = d as u32;
            d -= 1;
            let Parent::Arc(a) = self.node(j).parent else {
                unreachable!("marking pass must stay on the path walked above")
            };
            j = self.arc(a).head;
        }

        Some(total as u32)
    }
}
