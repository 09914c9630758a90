mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use chrono::Utc;
use housing_dashboard::api::handlers::instrument_list_handler;
use housing_dashboard::domain::entities::Instrument;

fn instruments_app(state: housing_dashboard::AppState) -> Router {
    Router::new()
        .route("/api/instruments", get(instrument_list_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_instrument_list_success() {
    let state = common::create_test_state(
        Vec::new(),
        vec![
            Instrument::new(1, "violin".to_string(), "strings".to_string(), Utc::now()),
            Instrument::new(2, "trumpet".to_string(), "brass".to_string(), Utc::now()),
        ],
    );

    let server = TestServer::new(instruments_app(state)).unwrap();

    let response = server.get("/api/instruments").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json["items"].as_array().unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], 1);
    assert_eq!(items[0]["name"], "violin");
    assert_eq!(items[1]["category"], "brass");
}

#[tokio::test]
async fn test_instrument_list_empty() {
    let state = common::create_test_state(Vec::new(), Vec::new());
    let server = TestServer::new(instruments_app(state)).unwrap();

    let response = server.get("/api/instruments").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["items"].as_array().unwrap().len(), 0);
}
