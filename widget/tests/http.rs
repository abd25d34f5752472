//! End-to-end conversions against an in-process backend stub.

mod support;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{http::StatusCode, routing::post, Json, Router};
use common::{
    format::Locale,
    models::{FailureReason, WorkflowState},
    render::RenderModel,
};
use connectors::{credentials::StaticCredentials, exchange::ExchangeEndpoint};
use serde_json::{json, Value};
use support::{usd_pkr_catalog, RecordingView};
use widget::workflow::ConverterWidget;

async fn serve(app: Router) -> String {
    let addr = SocketAddr::from(([127, 0, 0, 1], 0));
    let server = axum::Server::bind(&addr).serve(app.into_make_service());
    let addr = server.local_addr();
    tokio::spawn(server);
    format!("http://{}/exchange/", addr)
}

fn widget_for(url: String) -> ConverterWidget<RecordingView> {
    let backend = Arc::new(ExchangeEndpoint::new(
        url,
        Arc::new(StaticCredentials::new("token")),
    ));
    let catalog = usd_pkr_catalog();
    let mut widget =
        ConverterWidget::new(backend, RecordingView::default(), catalog.clone(), Locale::English);
    widget.apply_catalog(catalog);
    widget
}

#[tokio::test]
async fn usd_to_pkr_renders_rate_and_converted_amount() {
    let app = Router::new().route(
        "/exchange/",
        post(|Json(body): Json<Value>| async move {
            Json(json!({
                "status": "success",
                "base_currency": body["base"],
                "target_currency": body["target"],
                "amount": body["amount"],
                "converted_amount": "2785.00",
                "exchange_rate": "278.5",
            }))
        }),
    );
    let mut widget = widget_for(serve(app).await);

    widget.set_amount("10");
    assert!(matches!(widget.submit().await, WorkflowState::Success(_)));

    match widget.view().last_shown() {
        Some(RenderModel::Result(card)) => {
            assert_eq!(card.rate, "1 USD = 278.500000 PKR");
            assert_eq!(card.converted_amount, "Rs2,785.00");
        }
        other => panic!("unexpected render: {:?}", other),
    }
}

#[tokio::test]
async fn server_error_is_network_error_and_submit_is_reenabled() {
    let app = Router::new().route(
        "/exchange/",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"status": "error", "message": "boom"})),
            )
        }),
    );
    let mut widget = widget_for(serve(app).await);

    assert_eq!(
        widget.submit().await,
        &WorkflowState::Failure(FailureReason::NetworkError)
    );
    assert!(widget.view().submit_enabled());
    assert!(!widget.view().busy());
}

#[tokio::test]
async fn non_finite_figures_are_a_network_error() {
    let app = Router::new().route(
        "/exchange/",
        post(|| async {
            Json(json!({
                "status": "success",
                "base_currency": "USD",
                "target_currency": "PKR",
                "amount": "10",
                "converted_amount": "NaN",
                "exchange_rate": "inf",
            }))
        }),
    );
    let mut widget = widget_for(serve(app).await);

    assert_eq!(
        widget.submit().await,
        &WorkflowState::Failure(FailureReason::NetworkError)
    );
    assert!(matches!(
        widget.view().last_shown(),
        Some(RenderModel::Error(_))
    ));
}
