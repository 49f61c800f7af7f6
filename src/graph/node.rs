//! Node type for the derived co-star graph

use serde::Serialize;

/// An actor in the derived graph
///
/// Identity is the actor name itself; nodes carry no state that survives
/// re-derivation.
#[derive(Debug, Clone, Serialize)]
pub struct GraphNode {
    /// Actor name, unique within one derived graph
    pub id: String,
}

impl GraphNode {
    /// Create a new node for an actor name
    pub fn new(id: impl Into<String>) -> Self {
        GraphNode { id: id.into() }
    }
}

impl PartialEq for GraphNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for GraphNode {}

impl std::hash::Hash for GraphNode {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
