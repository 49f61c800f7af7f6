//! Graph derivation from the current selection
//!
//! Derivation is a pure, total recomputation: every call rebuilds the whole
//! node and link set from scratch. There is no incremental patching and no
//! identity carried across calls beyond the actor name strings.

use super::link::GraphLink;
use super::node::GraphNode;
use super::selection::SelectionSet;
use super::style::LINK_PALETTE;
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use serde::Serialize;

/// A fully derived co-star graph: actor nodes plus labeled, styled links
#[derive(Debug, Clone, Default, Serialize)]
pub struct CostarGraph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

impl CostarGraph {
    /// Number of actor nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of co-star links
    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}

/// Derive the full co-star graph from a selection
///
/// Nodes are the first-seen-order union of every cast member across the
/// selection. Links are emitted per movie, in selection order: for a cast
/// `[a0, a1, ..., an-1]`, every index `k` in `1..n` is paired as source with
/// every other index `j` as target, labeled with the movie title and styled
/// with the palette entry for the movie's selection position.
///
/// Index 0 never appears as a source, only as a target. That asymmetry is
/// long-standing renderer-observed behavior and is kept as is; see the
/// pairing tests before changing it.
pub fn derive(selection: &SelectionSet) -> CostarGraph {
    let mut ids: IndexSet<String, FxBuildHasher> = IndexSet::default();
    for movie in selection.iter() {
        for actor in &movie.starring {
            ids.insert(actor.clone());
        }
    }
    let nodes = ids.into_iter().map(GraphNode::new).collect();

    let mut links = Vec::new();
    for (position, movie) in selection.iter().enumerate() {
        let style = LINK_PALETTE[position];
        let cast = &movie.starring;
        for k in 1..cast.len() {
            for j in 0..cast.len() {
                if j == k {
                    continue;
                }
                links.push(GraphLink::new(&cast[k], &cast[j], &movie.title, style));
            }
        }
    }

    CostarGraph { nodes, links }
}
