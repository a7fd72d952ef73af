//! # Request ID レイヤーのテスト
//!
//! `MakeRequestUuidV7` と `make_request_span` をレイヤーに組み込んだときの振る舞いを検証する。
//! クライアント提供値の引き継ぎは book-service の統合テストで確認する。
//!
//! - レスポンスに `X-Request-Id` ヘッダーが含まれる
//! - 自動生成の `X-Request-Id` が UUID v7 形式である

use axum::{Json, Router, body::Body, routing::get};
use bookshelf_shared::observability::{MakeRequestUuidV7, make_request_span};
use http::{Request, StatusCode};
use tower::ServiceExt;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

/// サービスと同じレイヤー構成（Request ID 関連のみ）の最小ルーター
fn test_app() -> Router {
    Router::new()
        .route(
            "/health",
            get(|| async { Json(serde_json::json!({"status": "ok"})) }),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}

#[tokio::test]
async fn test_レスポンスにx_request_idヘッダーが含まれる() {
    let response = test_app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_自動生成のx_request_idはuuid_v7形式() {
    let response = test_app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let value = response
        .headers()
        .get("x-request-id")
        .unwrap()
        .to_str()
        .unwrap();
    let uuid = uuid::Uuid::parse_str(value).unwrap();
    assert_eq!(uuid.get_version_num(), 7);
}
