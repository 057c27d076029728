use crate::node::NodeId;

/// A non-owning handle to a [`crate::Graph`] arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArcId(pub(crate) u32);

/// One directed arc of the residual graph.
///
/// Arcs are always created in sister pairs: `arc(a.sister).sister == a`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Arc {
    pub(crate) head: NodeId,
    pub(crate) next: Option<ArcId>,
    pub(crate) sister: ArcId,
    pub(crate) r_cap: i64,
}
