use anyhow::Context;
use costar::{Catalog, HttpServer, Session};

const DEFAULT_CATALOG_PATH: &str = "data/movies.json";
const DEFAULT_PORT: u16 = 7474;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let catalog_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string());
    let catalog = Catalog::load_from_file(&catalog_path)
        .with_context(|| format!("loading catalog from {catalog_path}"))?;

    let port = std::env::var("COSTAR_HTTP_PORT")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    println!("Costar Graph Engine v{}", costar::version());
    println!("==========================================");
    println!();
    println!("Catalog: {} records ({} eligible)", catalog.len(), catalog.eligible_count());
    println!("Graph API on http://localhost:{port}");
    println!("  POST /api/search    {{\"query\": \"...\"}}");
    println!("  POST /api/select    {{\"title\": \"...\"}}");
    println!("  POST /api/deselect  {{\"title\": \"...\"}}");
    println!("  POST /api/focus     {{\"node\": \"...\"|null}}");
    println!("  POST /api/viewport  {{\"height\": h, \"width\": w}}");
    println!("  GET  /api/graph");
    println!();
    println!("✅ Server ready. Press Ctrl+C to stop.");
    println!();

    let server = HttpServer::new(Session::new(catalog), port);
    if let Err(e) = server.start().await {
        eprintln!("Server error: {}", e);
    }

    Ok(())
}
