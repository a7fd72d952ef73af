//! # アプリケーション構築
//!
//! State の組み立てとルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{Router, routing::get};
use bookshelf_infra::repository::BookRepository;
use bookshelf_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::handler::{
    BookState,
    ReadinessState,
    create_book,
    delete_book,
    get_book,
    health_check,
    list_books,
    readiness_check,
    update_book,
};

/// ルーターを構築する
pub fn build_app(
    book_repository: Arc<dyn BookRepository>,
    readiness_state: Arc<ReadinessState>,
) -> Router {
    let book_state = Arc::new(BookState { book_repository });

    Router::new()
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(readiness_state),
        )
        // 書籍 API
        .route("/api/books", get(list_books).post(create_book))
        .route(
            "/api/books/{id}",
            get(get_book).put(update_book).delete(delete_book),
        )
        .with_state(book_state)
        // 下に書いたレイヤーほど外側
        // 1. SetRequestIdLayer: UUID v7 を生成（クライアント提供値があればそれを使う）
        // 2. TraceLayer: request_id を含むスパンでリクエストを囲む
        // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
