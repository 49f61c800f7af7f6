//! HTTP server for the graph API

use super::handler::{
    deselect_handler, focus_handler, graph_handler, search_handler, select_handler,
    status_handler, viewport_handler, SharedSession,
};
use crate::session::Session;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Build the API router over a shared session
pub fn router(session: SharedSession) -> Router {
    Router::new()
        .route("/api/search", post(search_handler))
        .route("/api/select", post(select_handler))
        .route("/api/deselect", post(deselect_handler))
        .route("/api/focus", post(focus_handler))
        .route("/api/viewport", post(viewport_handler))
        .route("/api/graph", get(graph_handler))
        .route("/api/status", get(status_handler))
        .layer(CorsLayer::permissive())
        .with_state(session)
}

/// HTTP server hosting one session for a rendering frontend
pub struct HttpServer {
    session: SharedSession,
    port: u16,
}

impl HttpServer {
    /// Create a new HTTP server around a session
    pub fn new(session: Session, port: u16) -> Self {
        Self {
            session: Arc::new(RwLock::new(session)),
            port,
        }
    }

    /// Handle to the shared session
    pub fn session(&self) -> SharedSession {
        Arc::clone(&self.session)
    }

    /// Start the HTTP server
    pub async fn start(&self) -> Result<(), Box<dyn std::error::Error>> {
        let app = router(Arc::clone(&self.session));

        let addr = format!("0.0.0.0:{}", self.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!("graph API available at http://localhost:{}", self.port);

        axum::serve(listener, app).await?;

        Ok(())
    }
}
