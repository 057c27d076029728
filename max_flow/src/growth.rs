use crate::arc::ArcId;
use crate::graph::Graph;
use crate::node::{NodeId, Parent};

impl Graph {
    /// Grows `i`'s search tree by one layer of residual-graph neighbours.
    ///
    /// Returns the arc bridging the two trees, oriented from the source-tree
    /// endpoint to the sink-tree endpoint, the moment growth finds a
    /// neighbour already claimed by the opposite tree. `None` means `i` is
    /// exhausted: growth never re-activates it, so it falls out of the
    /// active queue for good unless adoption reclaims it later.
    pub(crate) fn grow(&mut self, i: NodeId) -> Option<ArcId> {
        let is_sink = self.node(i).is_sink;
        let i_dist = self.node(i).dist;
        let i_counter = self.node(i).counter;

        let mut next = self.node(i).first;
        while let Some(a) = next {
            next = self.arc(a).next;

            let residual = if is_sink {
                self.arc(self.arc(a).sister).r_cap
            } else {
                self.arc(a).r_cap
            };
            if residual == 0 {
                continue;
            }

            let j = self.arc(a).head;
            let sister = self.arc(a).sister;

            match self.node(j).parent {
                Parent::Unset => {
                    let node = self.node_mut(j);
                    node.is_sink = is_sink;
                    node.parent = Parent::Arc(sister);
                    node.counter = i_counter;
                    node.dist = i_dist + 1;
                    self.set_active(j);
                }
                _ if self.node(j).is_sink != is_sink => {
                    return Some(if is_sink { sister } else { a });
                }
                _ if self.node(j).counter <= i_counter && self.node(j).dist > i_dist => {
                    let node = self.node_mut(j);
                    node.parent = Parent::Arc(sister);
                    node.counter = i_counter;
                    node.dist = i_dist + 1;
                }
                _ => {}
            }
        }

        None
    }
}
