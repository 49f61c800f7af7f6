//! Session state container
//!
//! Holds the four pieces of mutable state (search query, selection, focus,
//! viewport) behind explicit transition methods. Every transition re-derives
//! the graph and render config synchronously and in full before returning,
//! so observers always see a consistent snapshot. Single-threaded by design:
//! one session, one owner; a multi-session host must serialize access per
//! session (e.g. behind an `RwLock`, as the HTTP layer does).

use crate::catalog::{Catalog, MovieRecord};
use crate::graph::{derive, CostarGraph, SelectionSet};
use crate::render::{resolve, RenderConfig, Viewport};
use tracing::debug;

/// Page size of the cached search-results view
///
/// The query box always shows the first page of nine candidates.
pub const RESULTS_PAGE_SIZE: usize = 9;

/// One user's engine state plus its derived outputs
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    query: String,
    results: Vec<MovieRecord>,
    selection: SelectionSet,
    focused: Option<String>,
    viewport: Viewport,
    graph: CostarGraph,
    config: RenderConfig,
}

impl Session {
    /// Create a session over a loaded catalog
    ///
    /// Starts with an empty query (which matches every eligible movie), an
    /// empty selection, no focus, and a zero-sized viewport.
    pub fn new(catalog: Catalog) -> Self {
        let results = first_page(&catalog, "");
        let viewport = Viewport::default();
        Session {
            catalog,
            query: String::new(),
            results,
            selection: SelectionSet::new(),
            focused: None,
            viewport,
            graph: CostarGraph::default(),
            config: resolve(None, viewport),
        }
    }

    /// Update the search query and refresh the cached results page
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.results = first_page(&self.catalog, &self.query);
        debug!("query {:?} matched {} candidates", self.query, self.results.len());
    }

    /// Run an ad-hoc catalog search without touching session state
    pub fn search(&self, query: &str, page_size: usize, page_number: usize) -> Vec<&MovieRecord> {
        self.catalog.search(query, page_size, page_number)
    }

    /// Add a movie to the selection and re-derive
    pub fn add_movie(&mut self, movie: MovieRecord) {
        debug!("adding {:?} to selection", movie.title);
        self.selection.add(movie);
        self.recompute();
    }

    /// Remove a movie from the selection by title and re-derive
    pub fn remove_movie(&mut self, title: &str) {
        debug!("removing {title:?} from selection");
        self.selection.remove(title);
        self.recompute();
    }

    /// Record a node click from the rendering boundary
    ///
    /// The click callback is the sole source of focus updates; `None` clears
    /// the focus.
    pub fn set_focus(&mut self, node: Option<String>) {
        self.focused = node;
        self.recompute();
    }

    /// Record a new measured rendering-surface size
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.recompute();
    }

    /// Re-derive graph and config from the current state
    ///
    /// Total recomputation; no diffing against the previous outputs.
    fn recompute(&mut self) {
        self.graph = derive(&self.selection);
        self.config = resolve(self.focused.as_deref(), self.viewport);
        debug!(
            "derived {} nodes, {} links from {} selected movies",
            self.graph.node_count(),
            self.graph.link_count(),
            self.selection.len()
        );
    }

    /// Current search query
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Cached first page of search results for the current query
    pub fn results(&self) -> &[MovieRecord] {
        &self.results
    }

    /// Current selection
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Currently focused node, if any
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Last measured viewport
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The derived graph for the current selection
    pub fn graph(&self) -> &CostarGraph {
        &self.graph
    }

    /// The derived render config for the current focus and viewport
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// The catalog this session reads from
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

fn first_page(catalog: &Catalog, query: &str) -> Vec<MovieRecord> {
    catalog
        .search(query, RESULTS_PAGE_SIZE, 1)
        .into_iter()
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_session() -> Session {
        Session::new(Catalog::from_records(vec![
            MovieRecord::new("Aladdin", ["Scott Weinger", "Robin Williams", "Linda Larkin"]),
            MovieRecord::new("The Lion King", ["Matthew Broderick", "James Earl Jones"]),
            MovieRecord::new("Mulan", ["Ming-Na Wen", "Eddie Murphy"]),
        ]))
    }

    #[test]
    fn test_new_session_shows_first_results_page() {
        let session = test_session();
        assert_eq!(session.query(), "");
        assert_eq!(session.results().len(), 3);
        assert!(session.selection().is_empty());
        assert_eq!(session.graph().node_count(), 0);
    }

    #[test]
    fn test_set_query_refreshes_results() {
        let mut session = test_session();
        session.set_query("mu");
        assert_eq!(session.results().len(), 1);
        assert_eq!(session.results()[0].title, "Mulan");

        session.set_query("");
        assert_eq!(session.results().len(), 3);
    }

    #[test]
    fn test_add_movie_rederives_graph() {
        let mut session = test_session();
        let aladdin = session.catalog().get("Aladdin").unwrap().clone();
        session.add_movie(aladdin);

        assert_eq!(session.graph().node_count(), 3);
        assert_eq!(session.graph().link_count(), 4);
    }

    #[test]
    fn test_remove_movie_rederives_graph() {
        let mut session = test_session();
        let aladdin = session.catalog().get("Aladdin").unwrap().clone();
        let mulan = session.catalog().get("Mulan").unwrap().clone();
        session.add_movie(aladdin);
        session.add_movie(mulan);
        assert_eq!(session.graph().node_count(), 5);

        session.remove_movie("Aladdin");
        assert_eq!(session.graph().node_count(), 2);
        assert_eq!(session.selection().titles(), ["Mulan"]);
    }

    #[test]
    fn test_focus_flows_into_config() {
        let mut session = test_session();
        let aladdin = session.catalog().get("Aladdin").unwrap().clone();
        session.add_movie(aladdin);

        session.set_focus(Some("Robin Williams".to_string()));
        assert_eq!(session.focused(), Some("Robin Williams"));

        // Of the four Aladdin links, only (Linda -> Scott) misses Robin
        let visible = session
            .graph()
            .links
            .iter()
            .filter(|l| session.config().label_visible(l))
            .count();
        assert_eq!(visible, 3);

        session.set_focus(None);
        assert!(session.graph().links.iter().all(|l| !session.config().label_visible(l)));
    }

    #[test]
    fn test_viewport_flows_into_config() {
        let mut session = test_session();
        session.set_viewport(Viewport::new(600, 800));
        assert_eq!(session.config().height, 600);
        assert_eq!(session.config().width, 800);
    }

    #[test]
    fn test_focus_does_not_affect_graph_shape() {
        let mut session = test_session();
        let mulan = session.catalog().get("Mulan").unwrap().clone();
        session.add_movie(mulan);
        let before = session.graph().link_count();

        session.set_focus(Some("Ming-Na Wen".to_string()));
        assert_eq!(session.graph().link_count(), before);
    }
}
