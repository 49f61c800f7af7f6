//! HTTP handlers for the graph API

use crate::render::Viewport;
use crate::session::Session;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared session handle; one writer at a time, so derivation never reads a
/// half-mutated selection.
pub type SharedSession = Arc<RwLock<Session>>;

fn default_page_size() -> usize {
    crate::session::RESULTS_PAGE_SIZE
}

fn default_page() -> usize {
    1
}

/// Request for a catalog search
#[derive(Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_page")]
    pub page: usize,
}

/// Request naming a catalog movie by title
#[derive(Deserialize)]
pub struct TitleRequest {
    pub title: String,
}

/// Node-click payload from the renderer; `null` clears the focus
#[derive(Deserialize)]
pub struct FocusRequest {
    pub node: Option<String>,
}

/// Handler for catalog search
pub async fn search_handler(
    State(session): State<SharedSession>,
    Json(payload): Json<SearchRequest>,
) -> impl IntoResponse {
    let session = session.read().await;
    let movies = session.search(&payload.query, payload.page_size, payload.page);
    Json(json!({ "movies": movies }))
}

/// Handler for adding a movie to the selection
///
/// The title must name an eligible catalog record; anything search would not
/// surface is reported as not found.
pub async fn select_handler(
    State(session): State<SharedSession>,
    Json(payload): Json<TitleRequest>,
) -> impl IntoResponse {
    let mut session = session.write().await;
    let movie = match session.catalog().get(&payload.title) {
        Some(movie) if movie.is_eligible() => movie.clone(),
        _ => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("no eligible movie titled {:?}", payload.title) })),
            )
                .into_response()
        }
    };
    session.add_movie(movie);
    Json(json!({ "selected": session.selection().titles() })).into_response()
}

/// Handler for removing a movie from the selection
///
/// Removing an unselected title is a no-op, mirrored as a success.
pub async fn deselect_handler(
    State(session): State<SharedSession>,
    Json(payload): Json<TitleRequest>,
) -> impl IntoResponse {
    let mut session = session.write().await;
    session.remove_movie(&payload.title);
    Json(json!({ "selected": session.selection().titles() }))
}

/// Handler for the renderer's node-click callback
pub async fn focus_handler(
    State(session): State<SharedSession>,
    Json(payload): Json<FocusRequest>,
) -> impl IntoResponse {
    let mut session = session.write().await;
    session.set_focus(payload.node);
    Json(json!({ "focused": session.focused() }))
}

/// Handler for viewport measurement updates
pub async fn viewport_handler(
    State(session): State<SharedSession>,
    Json(payload): Json<Viewport>,
) -> impl IntoResponse {
    let mut session = session.write().await;
    session.set_viewport(payload);
    Json(json!({ "height": payload.height, "width": payload.width }))
}

/// Handler returning the derived graph and render config
pub async fn graph_handler(State(session): State<SharedSession>) -> impl IntoResponse {
    let session = session.read().await;
    Json(json!({
        "nodes": session.graph().nodes,
        "links": session.graph().links,
        "config": session.config(),
    }))
}

/// Handler for system status
pub async fn status_handler(State(session): State<SharedSession>) -> impl IntoResponse {
    let session = session.read().await;
    Json(json!({
        "status": "healthy",
        "version": crate::VERSION,
        "catalog": {
            "records": session.catalog().len(),
            "eligible": session.catalog().eligible_count(),
        },
        "graph": {
            "nodes": session.graph().node_count(),
            "links": session.graph().link_count(),
        },
    }))
}
