mod common;

use common::{TestApp, UnreachableQuoteStore};
use reqwest::Client;
use std::sync::Arc;

#[tokio::test]
async fn ok_returns_plain_ok() {
    let app = TestApp::spawn().await;

    let response = Client::new()
        .get(format!("{}/ok", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn ok_does_not_depend_on_the_database() {
    let app = TestApp::spawn_with_store(Arc::new(UnreachableQuoteStore)).await;

    let response = Client::new()
        .get(format!("{}/ok", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn readiness_reflects_store_health() {
    let healthy = TestApp::spawn().await;
    let broken = TestApp::spawn_with_store(Arc::new(UnreachableQuoteStore)).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", healthy.address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 200);

    let response = client
        .get(format!("{}/ready", broken.address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 503);
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = TestApp::spawn().await;

    let response = Client::new()
        .get(format!("{}/ok", app.address))
        .header("x-request-id", "probe-1")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.headers()["x-request-id"], "probe-1");
}
