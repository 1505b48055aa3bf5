//! Error-to-status mapping and input-bound validation.

use actix_web::ResponseError;
use publisher_service::error::AppError;
use publisher_service::handlers::analytics::AnalyticsParams;
use publisher_service::handlers::feed::FeedQueryParams;
use publisher_service::handlers::posts::CreatePostRequest;
use publisher_service::models::Role;
use validator::Validate;

#[test]
fn errors_map_to_expected_statuses() {
    assert_eq!(AppError::Validation("x".into()).status_code(), 400);
    assert_eq!(AppError::Unauthorized("x".into()).status_code(), 401);
    assert_eq!(AppError::Forbidden("x".into()).status_code(), 403);
    assert_eq!(AppError::NotFound("x".into()).status_code(), 404);
    assert_eq!(AppError::Internal("x".into()).status_code(), 500);
    assert_eq!(
        AppError::Database(sqlx::Error::RowNotFound).status_code(),
        500
    );
}

#[test]
fn database_details_are_not_leaked_to_clients() {
    let body = AppError::Database(sqlx::Error::PoolTimedOut).error_response();
    let bytes = actix_web::body::to_bytes(body.into_body());
    let bytes = tokio_test::block_on(bytes).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["error"], "Database error");
    assert_eq!(json["status"], 500);
}

#[test]
fn feed_limit_bounds_are_enforced_before_any_query() {
    let valid = FeedQueryParams {
        cursor: None,
        limit: Some(30),
        q: None,
    };
    assert!(valid.validate().is_ok());

    let too_small = FeedQueryParams {
        cursor: None,
        limit: Some(0),
        q: None,
    };
    assert!(too_small.validate().is_err());

    let too_large = FeedQueryParams {
        cursor: None,
        limit: Some(31),
        q: None,
    };
    assert!(too_large.validate().is_err());

    let defaulted = FeedQueryParams {
        cursor: None,
        limit: None,
        q: None,
    };
    assert!(defaulted.validate().is_ok());
}

#[test]
fn analytics_window_bounds_are_enforced() {
    for days in [7u32, 30, 90] {
        let params = AnalyticsParams { days: Some(days) };
        assert!(params.validate().is_ok());
    }
    for days in [0u32, 6, 91] {
        let params = AnalyticsParams { days: Some(days) };
        assert!(params.validate().is_err());
    }
}

#[test]
fn empty_title_or_content_is_rejected() {
    let missing_title = CreatePostRequest {
        title: "".into(),
        content: "body".into(),
    };
    assert!(missing_title.validate().is_err());

    let missing_content = CreatePostRequest {
        title: "t".into(),
        content: "".into(),
    };
    assert!(missing_content.validate().is_err());

    let ok = CreatePostRequest {
        title: "t".into(),
        content: "body".into(),
    };
    assert!(ok.validate().is_ok());
}

#[test]
fn role_claims_use_uppercase_wire_form() {
    assert_eq!(
        serde_json::from_str::<Role>("\"PUBLISHER\"").unwrap(),
        Role::Publisher
    );
    assert_eq!(serde_json::from_str::<Role>("\"USER\"").unwrap(), Role::User);
    assert!(serde_json::from_str::<Role>("\"ADMIN\"").is_err());
}
