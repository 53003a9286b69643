use crate::ValidJson;

use axum::{
    body::Body,
    extract::FromRequest,
    http::{Request, StatusCode},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Reading {
    volume_m3: f64,
}

fn json_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn given_valid_body_when_extracting_then_deserialized() {
    let result = ValidJson::<Reading>::from_request(json_request(r#"{"volume_m3": 12.5}"#), &()).await;

    assert_eq!(result.unwrap().0.volume_m3, 12.5);
}

#[tokio::test]
async fn given_malformed_body_when_extracting_then_400() {
    let result = ValidJson::<Reading>::from_request(json_request("{not json"), &()).await;

    assert_eq!(result.err().unwrap().status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn given_wrongly_typed_field_when_extracting_then_400() {
    let result =
        ValidJson::<Reading>::from_request(json_request(r#"{"volume_m3": "lots"}"#), &()).await;

    assert_eq!(result.err().unwrap().status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn given_missing_content_type_when_extracting_then_400() {
    let request = Request::builder()
        .method("POST")
        .body(Body::from(r#"{"volume_m3": 1.0}"#))
        .unwrap();

    let result = ValidJson::<Reading>::from_request(request, &()).await;

    assert_eq!(result.err().unwrap().status(), StatusCode::BAD_REQUEST);
}
