use axum::{http::StatusCode, response::IntoResponse};
use http_body_util::BodyExt;
use serde_json::Value;

use workflows_api::auth::AuthError;
use workflows_api::error::{handle_service_error, is_prod_like, ApiError};
use workflows_lib::errors_service::ServiceError;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ==================== API ERROR TESTS ====================

#[tokio::test]
async fn test_api_error_bad_request() {
    let response = ApiError::BadRequest("invalid input".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "bad_request");
    assert_eq!(body["message"], "invalid input");
}

#[tokio::test]
async fn test_api_error_unauthorized_carries_challenge() {
    let response = ApiError::Unauthorized("no token".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers().get("www-authenticate").unwrap(), "Bearer");
}

#[tokio::test]
async fn test_api_error_helper_end_user_not_found() {
    let response = ApiError::end_user_not_found().into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_api_error_helper_invalid_approval_state() {
    let response = ApiError::invalid_approval_state("escalated").into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("escalated"));
}

// ==================== AUTH ERROR MAPPING ====================

#[tokio::test]
async fn test_auth_errors_map_to_status() {
    let unauthorized = ApiError::from(AuthError::Unauthorized).into_response();
    assert_eq!(unauthorized.status(), StatusCode::UNAUTHORIZED);

    let defect = ApiError::from(AuthError::Defect("roles null".to_string())).into_response();
    assert_eq!(defect.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let lookup = ApiError::from(AuthError::Lookup(ServiceError::NotFound)).into_response();
    assert_eq!(lookup.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_defect_details_are_not_exposed() {
    let response = ApiError::from(AuthError::Defect("user u-1 has roles null".to_string())).into_response();
    let body = body_json(response).await;
    assert!(!body["message"].as_str().unwrap().contains("u-1"));
}

// ==================== ENVIRONMENT ====================

#[test]
fn test_is_prod_like() {
    assert!(!is_prod_like("local"));
    assert!(!is_prod_like("dev01"));
    assert!(!is_prod_like("test01"));
    assert!(is_prod_like("prod"));
    assert!(is_prod_like("PROD01"));
}

// ==================== SERVICE ERROR MAPPING ====================

#[tokio::test]
async fn test_handle_service_error_validation_always_shown() {
    let err = ServiceError::Validation("first name cannot be empty".to_string());
    let response = handle_service_error(err, "prod", "test_op").into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "first name cannot be empty");
}

#[tokio::test]
async fn test_handle_service_error_email_exists_is_conflict() {
    let response = handle_service_error(ServiceError::EmailAlreadyExists, "prod", "test_op").into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_handle_service_error_not_found() {
    let response = handle_service_error(ServiceError::NotFound, "prod", "test_op").into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_handle_service_error_hides_internals_in_prod() {
    let err = ServiceError::Internal(anyhow::anyhow!("pool timed out"));
    let response = handle_service_error(err, "prod01", "test_op").into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["message"], "internal server error");
}

#[tokio::test]
async fn test_handle_service_error_shows_internals_outside_prod() {
    let err = ServiceError::InvalidApprovalState("escalated".to_string());
    let response = handle_service_error(err, "local", "test_op").into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("escalated"));
}
