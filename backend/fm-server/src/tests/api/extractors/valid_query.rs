use crate::ValidQuery;

use axum::{
    body::Body,
    extract::FromRequestParts,
    http::{Request, StatusCode},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Filter {
    port: Option<String>,
}

async fn extract(uri: &str) -> Result<ValidQuery<Filter>, crate::ApiError> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (mut parts, _body) = request.into_parts();
    ValidQuery::<Filter>::from_request_parts(&mut parts, &()).await
}

#[tokio::test]
async fn given_single_parameter_when_extracting_then_deserialized() {
    let ValidQuery(filter) = extract("/predictions?port=Rotterdam").await.unwrap();

    assert_eq!(filter.port.as_deref(), Some("Rotterdam"));
}

#[tokio::test]
async fn given_no_query_string_when_extracting_then_filters_absent() {
    let ValidQuery(filter) = extract("/predictions").await.unwrap();

    assert!(filter.port.is_none());
}

#[tokio::test]
async fn given_duplicated_parameter_when_extracting_then_400() {
    let result = extract("/predictions?port=a&port=b").await;

    assert_eq!(result.err().unwrap().status(), StatusCode::BAD_REQUEST);
}
