use crate::arc::ArcId;
use crate::graph::Graph;
use crate::node::Parent;

impl Graph {
    /// Pushes flow along the augmenting path through `bridge`, the arc
    /// found by [`Graph::grow`] connecting the source and sink trees.
    ///
    /// Two passes: find the bottleneck residual capacity along the whole
    /// path (source root to bridge to sink root), then push it, arc by arc.
    /// Any tree arc saturated by the push turns its downstream endpoint
    /// into an orphan queued for adoption.
    pub(crate) fn augment(&mut self, bridge: ArcId) {
        let sister = self.arc(bridge).sister;

        let mut bottleneck = self.arc(bridge).r_cap;

        let mut i = self.arc(sister).head;
        let source_root = loop {
            match self.node(i).parent {
                Parent::Terminal => break i,
                Parent::Arc(a) => {
                    let back = self.arc(a).sister;
                    bottleneck = bottleneck.min(self.arc(back).r_cap);
                    i = self.arc(a).head;
                }
                Parent::Unset | Parent::Orphan => {
                    unreachable!("augmenting path must be an intact tree path")
                }
            }
        };
        bottleneck = bottleneck.min(self.node(source_root).tr_cap);

        let mut i = self.arc(bridge).head;
        let sink_root = loop {
            match self.node(i).parent {
                Parent::Terminal => break i,
                Parent::Arc(a) => {
                    bottleneck = bottleneck.min(self.arc(a).r_cap);
                    i = self.arc(a).head;
                }
                Parent::Unset | Parent::Orphan => {
                    unreachable!("augmenting path must be an intact tree path")
                }
            }
        };
        bottleneck = bottleneck.min(-self.node(sink_root).tr_cap);

        self.arc_mut(sister).r_cap += bottleneck;
        self.arc_mut(bridge).r_cap -= bottleneck;

        let mut i = self.arc(sister).head;
        loop {
            let a = match self.node(i).parent {
                Parent::Terminal => break,
                Parent::Arc(a) => a,
                Parent::Unset | Parent::Orphan => unreachable!("path mutated mid-augment"),
            };
            let back = self.arc(a).sister;
            self.arc_mut(a).r_cap += bottleneck;
            self.arc_mut(back).r_cap -= bottleneck;
            if self.arc(back).r_cap == 0 {
                self.node_mut(i).parent = Parent::Orphan;
                self.push_orphan_front(i);
            }
            i = self.arc(a).head;
        }
        self.node_mut(i).tr_cap -= bottleneck;
        if self.node(i).tr_cap == 0 {
            self.node_mut(i).parent = Parent::Orphan;
            self.push_orphan_front(i);
        }

        let mut i = self.arc(bridge).head;
        loop {
            let a = match self.node(i).parent {
                Parent::Terminal => break,
                Parent::Arc(a) => a,
                Parent::Unset | Parent::Orphan => unreachable!("path mutated mid-augment"),
            };
            let back = self.arc(a).sister;
            self.arc_mut(back).r_cap += bottleneck;
            self.arc_mut(a).r_cap -= bottleneck;
            if self.arc(a).r_cap == 0 {
                self.node_mut(i).parent = Parent::Orphan;
                self.push_orphan_front(i);
            }
            i = self.arc(a).head;
        }
        self.node_mut(i).tr_cap += bottleneck;
        if self.node(i).tr_cap == 0 {
            self.node_mut(i).parent = Parent::Orphan;
            self.push_orphan_front(i);
        }

        self.flow += bottleneck;
    }
}
