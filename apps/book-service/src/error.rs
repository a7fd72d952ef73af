//! # Book Service エラー定義
//!
//! Book Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! | エラー | HTTP ステータス |
//! |--------|----------------|
//! | `BadRequest` | 400（デコード失敗、ID が整数でない、バリデーション違反） |
//! | `NotFound` | 404 |
//! | `Database` | 500（原因のテキストを detail に入れ、SpanTrace 付きでログにも出す） |

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bookshelf_domain::DomainError;
use bookshelf_shared::ErrorResponse;
use thiserror::Error;

/// Book Service で発生するエラー
#[derive(Debug, Error)]
pub enum CoreError {
    /// 不正なリクエスト
    #[error("不正なリクエスト: {0}")]
    BadRequest(String),

    /// リソースが見つからない
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(#[from] bookshelf_infra::InfraError),
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => CoreError::BadRequest(msg),
            not_found @ DomainError::NotFound { .. } => CoreError::NotFound(not_found.to_string()),
        }
    }
}

impl From<JsonRejection> for CoreError {
    /// axum の JSON 抽出失敗（構文エラー、型不一致、Content-Type 不足）はすべて 400 にする
    fn from(rejection: JsonRejection) -> Self {
        CoreError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let body = match self {
            CoreError::BadRequest(msg) => ErrorResponse::bad_request(msg),
            CoreError::NotFound(msg) => ErrorResponse::not_found(msg),
            CoreError::Database(e) => {
                tracing::error!(error = %e, span_trace = %e.span_trace(), "データベースエラー");
                ErrorResponse::internal_error(e.to_string())
            }
        };

        let status = StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(CoreError::BadRequest("x".to_string()), StatusCode::BAD_REQUEST)]
    #[case(CoreError::NotFound("x".to_string()), StatusCode::NOT_FOUND)]
    #[case(CoreError::Database(sqlx::Error::PoolTimedOut.into()), StatusCode::INTERNAL_SERVER_ERROR)]
    fn test_エラー種別ごとのステータスコード(#[case] error: CoreError, #[case] expected: StatusCode) {
        let response = error.into_response();
        assert_eq!(response.status(), expected);
    }

    #[test]
    fn test_validationはbad_requestに変換される() {
        let error: CoreError = DomainError::Validation("タイトルは必須です".to_string()).into();
        assert!(matches!(error, CoreError::BadRequest(msg) if msg == "タイトルは必須です"));
    }

    #[test]
    fn test_domainのnot_foundはnot_foundに変換される() {
        let error: CoreError = DomainError::NotFound {
            entity_type: "Book",
            id:          "3".to_string(),
        }
        .into();
        assert!(matches!(error, CoreError::NotFound(msg) if msg == "Book が見つかりません: 3"));
    }
}
