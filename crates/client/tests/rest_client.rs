//! RestClient against an in-process axum server standing in for the
//! simulation service.

use std::net::SocketAddr;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::post;
use axum::Json;
use client::{ClientError, RestClient, SimulationService};
use serde_json::{Value, json};
use types::{SimulationRequest, TradeAction};

fn canned_response(cycles: u64, initial_price: f64) -> Value {
    json!({
        "statistics": {
            "initial_price": initial_price, "final_price": 110.5, "price_change": 10.5,
            "price_change_percent": 10.5, "max_price": 112.0, "min_price": 98.0,
            "total_transactions": 1, "buy_transactions": 1, "sell_transactions": 0
        },
        "price_history": [initial_price, 110.5],
        "cycles": [],
        "logs": [],
        "agent_states": [{
            "cycle": cycles,
            "market_price": 110.5,
            "investors": {
                "InversorRacional_A1": {"fiat_balance": 500.0, "crypto_balance": 5.0, "risk_tolerance": 0.1}
            }
        }],
        "transactions": [
            {"cycle": 1, "sender": "Mercado01", "receiver": "InversorRacional_A1", "action": "buy", "price": 110.5}
        ]
    })
}

/// Echoes the request back through the canned payload so tests can check
/// the body arrived intact.
async fn simulate(Json(body): Json<Value>) -> Json<Value> {
    let cycles = body["cycles"].as_u64().unwrap_or(0);
    let initial_price = body["initial_price"].as_f64().unwrap_or(0.0);
    Json(canned_response(cycles, initial_price))
}

async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn test_simulate_posts_request_and_parses_response() {
    let addr = spawn(Router::new().route("/api/simulate", post(simulate))).await;
    let client = RestClient::new(format!("http://{}", addr));

    let response = client
        .simulate(SimulationRequest::new(10, 100.0))
        .await
        .unwrap();

    assert_eq!(response.statistics.initial_price, 100.0);
    assert_eq!(response.price_history, vec![100.0, 110.5]);
    assert_eq!(response.agent_states[0].cycle, Some(10));
    assert_eq!(response.transactions[0].action, TradeAction::Buy);
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let app = Router::new().route(
        "/api/simulate",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "engine crashed") }),
    );
    let addr = spawn(app).await;
    let client = RestClient::new(format!("http://{}", addr));

    let err = client
        .simulate(SimulationRequest::default())
        .await
        .unwrap_err();

    match err {
        ClientError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "engine crashed");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let app = Router::new().route(
        "/api/simulate",
        post(|| async { Json(json!({"price_history": [1.0]})) }),
    );
    let addr = spawn(app).await;
    let client = RestClient::new(format!("http://{}", addr));

    let err = client
        .simulate(SimulationRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_service_is_http_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = RestClient::new(format!("http://{}", addr));
    let err = client
        .simulate(SimulationRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}
