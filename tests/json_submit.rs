use axum::{
    body::Body,
    http::{request::Parts, Request, StatusCode},
    routing::any,
    Router,
};
use http_body_util::BodyExt;
use json_envelope::{Envelope, EnvelopeError};
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot`

async fn submit(parts: Parts) -> Result<Envelope, EnvelopeError> {
    let mut envelope = Envelope::default();
    envelope.require_json_submit(&parts)?;
    envelope.set_message("created");
    Ok(envelope)
}

fn test_app() -> Router {
    Router::new().route("/submit", any(submit))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn plain_post_is_rejected_with_400() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/submit")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "bad_request");
}

#[tokio::test]
async fn ajax_get_is_rejected_even_with_json_headers() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/submit")
                .header("x-requested-with", "XMLHttpRequest")
                .header("accept", "application/json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn ajax_json_post_gets_the_full_envelope() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/submit")
                .header("x-requested-with", "XMLHttpRequest")
                .header("content-type", "application/json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["error", "field_errors", "message", "_redirect", "content"]);
    assert_eq!(body["error"], Value::Bool(false));
    assert_eq!(body["message"], "created");
    assert_eq!(body["_redirect"], Value::Bool(false));
}

#[tokio::test]
async fn accept_header_alone_negotiates_json() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/submit")
                .header("x-requested-with", "XMLHttpRequest")
                .header("accept", "application/json, text/javascript")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
