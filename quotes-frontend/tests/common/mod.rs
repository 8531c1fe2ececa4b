#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, Response},
    Router,
};
use quotes_frontend::services::QuotesClient;
use quotes_frontend::startup::build_router;
use quotes_frontend::AppState;
use std::sync::Arc;
use tower::util::ServiceExt;

/// Router wired to a quotes API at `api_url`.
pub fn app(api_url: &str) -> Router {
    build_router(AppState::new(Arc::new(QuotesClient::new(api_url))))
}

/// An address nothing is listening on.
pub fn unreachable_api_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind probe port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

pub async fn get_page(app: Router) -> Response<Body> {
    app.oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_form(app: Router, form: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header("x-request-id", "form-request")
            .body(Body::from(form.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
