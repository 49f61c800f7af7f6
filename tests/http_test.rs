use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use costar::{router, Catalog, MovieRecord, Session};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceExt;

fn app() -> Router {
    let catalog = Catalog::from_records(vec![
        MovieRecord::new("Aladdin", ["Scott Weinger", "Robin Williams", "Linda Larkin"]),
        MovieRecord::new("The Lion King", ["Matthew Broderick", "James Earl Jones"]),
        MovieRecord::new("Fantasia", Vec::<String>::new()),
    ]);
    router(Arc::new(RwLock::new(Session::new(catalog))))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_status_reports_catalog_and_graph_counts() {
    let app = app();
    let (status, body) = send(&app, "GET", "/api/status", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["catalog"]["records"], 3);
    assert_eq!(body["catalog"]["eligible"], 2);
    assert_eq!(body["graph"]["nodes"], 0);
}

#[tokio::test]
async fn test_search_endpoint_filters_and_paginates() {
    let app = app();

    let (status, body) = send(&app, "POST", "/api/search", Some(json!({"query": "lion"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["movies"].as_array().unwrap().len(), 1);
    assert_eq!(body["movies"][0]["Title"], "The Lion King");

    let (_, body) = send(
        &app,
        "POST",
        "/api/search",
        Some(json!({"query": "", "page_size": 1, "page": 2})),
    )
    .await;
    assert_eq!(body["movies"].as_array().unwrap().len(), 1);
    assert_eq!(body["movies"][0]["Title"], "The Lion King");
}

#[tokio::test]
async fn test_select_focus_graph_flow() {
    let app = app();

    let (status, body) =
        send(&app, "POST", "/api/select", Some(json!({"title": "Aladdin"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["selected"][0], "Aladdin");

    let (_, body) = send(
        &app,
        "POST",
        "/api/viewport",
        Some(json!({"height": 480, "width": 640})),
    )
    .await;
    assert_eq!(body["height"], 480);

    let (_, body) = send(
        &app,
        "POST",
        "/api/focus",
        Some(json!({"node": "Robin Williams"})),
    )
    .await;
    assert_eq!(body["focused"], "Robin Williams");

    let (status, body) = send(&app, "GET", "/api/graph", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nodes"].as_array().unwrap().len(), 3);
    assert_eq!(body["links"].as_array().unwrap().len(), 4);
    assert_eq!(body["links"][0]["highlightColor"], "lightblue");
    assert_eq!(body["links"][0]["type"], "STRAIGHT");
    assert_eq!(body["config"]["focusedNode"], "Robin Williams");
    assert_eq!(body["config"]["height"], 480);
    assert_eq!(body["config"]["width"], 640);
    assert_eq!(body["config"]["d3"]["gravity"], -1500);
}

#[tokio::test]
async fn test_select_unknown_or_ineligible_title_is_not_found() {
    let app = app();

    let (status, _) = send(&app, "POST", "/api/select", Some(json!({"title": "Frozen"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Fantasia exists but has no cast, so search would never surface it
    let (status, _) =
        send(&app, "POST", "/api/select", Some(json!({"title": "Fantasia"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deselect_absent_title_is_a_no_op() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/deselect",
        Some(json!({"title": "Aladdin"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["selected"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_clearing_focus_with_null() {
    let app = app();

    send(&app, "POST", "/api/select", Some(json!({"title": "Aladdin"}))).await;
    send(
        &app,
        "POST",
        "/api/focus",
        Some(json!({"node": "Linda Larkin"})),
    )
    .await;

    let (_, body) = send(&app, "POST", "/api/focus", Some(json!({"node": null}))).await;
    assert_eq!(body["focused"], Value::Null);

    let (_, body) = send(&app, "GET", "/api/graph", None).await;
    assert!(body["config"].get("focusedNode").is_none());
}
