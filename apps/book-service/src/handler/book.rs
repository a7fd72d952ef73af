//! # 書籍ハンドラ
//!
//! 書籍の CRUD API を提供する。
//!
//! ## エンドポイント
//!
//! - `POST /api/books` - 書籍作成
//! - `GET /api/books` - 書籍一覧
//! - `GET /api/books/{id}` - 書籍取得
//! - `PUT /api/books/{id}` - 書籍更新
//! - `DELETE /api/books/{id}` - 書籍削除

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use bookshelf_domain::{
    DomainError,
    book::{Book, BookAuthor, BookId, BookTitle, NewBook},
};
use bookshelf_infra::repository::BookRepository;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// 書籍 API の共有状態
pub struct BookState {
    pub book_repository: Arc<dyn BookRepository>,
}

// --- リクエスト/レスポンス型 ---

/// 書籍作成・更新リクエスト
///
/// ボディに `id` が含まれていても無視する（ID はパスまたはストアが決める）。
#[derive(Debug, Deserialize)]
pub struct BookRequest {
    pub title:  String,
    pub author: String,
}

impl BookRequest {
    fn into_new_book(self) -> Result<NewBook, DomainError> {
        Ok(NewBook::new(
            BookTitle::new(self.title)?,
            BookAuthor::new(self.author)?,
        ))
    }
}

/// 書籍 DTO
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookDto {
    pub id:     i64,
    pub title:  String,
    pub author: String,
}

impl From<Book> for BookDto {
    fn from(book: Book) -> Self {
        Self {
            id:     book.id().as_i64(),
            title:  book.title().as_str().to_string(),
            author: book.author().as_str().to_string(),
        }
    }
}

/// 書籍作成レスポンス
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedBookDto {
    pub id: i64,
}

fn not_found(id: BookId) -> CoreError {
    DomainError::NotFound {
        entity_type: "Book",
        id:          id.to_string(),
    }
    .into()
}

// --- ハンドラ ---

/// POST /api/books
///
/// ## レスポンス
///
/// - `201 Created`: `{"id": n}`
/// - `400 Bad Request`: JSON デコード失敗、タイトル・著者が空
/// - `500 Internal Server Error`: ストア障害
#[tracing::instrument(skip_all)]
pub async fn create_book(
    State(state): State<Arc<BookState>>,
    payload: Result<Json<BookRequest>, JsonRejection>,
) -> Result<impl IntoResponse, CoreError> {
    let Json(req) = payload?;
    let new_book = req.into_new_book()?;

    let id = state.book_repository.insert(&new_book).await?;
    tracing::info!(book_id = %id, "書籍を作成しました");

    Ok((
        StatusCode::CREATED,
        Json(CreatedBookDto { id: id.as_i64() }),
    ))
}

/// GET /api/books
///
/// 全書籍を返す。0 件の場合は空配列。
#[tracing::instrument(skip_all)]
pub async fn list_books(
    State(state): State<Arc<BookState>>,
) -> Result<impl IntoResponse, CoreError> {
    let books = state.book_repository.find_all().await?;

    let items: Vec<BookDto> = books.into_iter().map(BookDto::from).collect();
    Ok((StatusCode::OK, Json(items)))
}

/// GET /api/books/{id}
///
/// ## レスポンス
///
/// - `200 OK`: 書籍
/// - `400 Bad Request`: ID が整数でない
/// - `404 Not Found`: 書籍が存在しない
/// - `500 Internal Server Error`: ストア障害
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_book(
    State(state): State<Arc<BookState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, CoreError> {
    let book_id: BookId = id.parse()?;

    let book = state
        .book_repository
        .find_by_id(book_id)
        .await?
        .ok_or_else(|| not_found(book_id))?;

    Ok((StatusCode::OK, Json(BookDto::from(book))))
}

/// PUT /api/books/{id}
///
/// タイトルと著者を置き換える。
///
/// ## レスポンス
///
/// - `200 OK`: 更新成功（ボディなし）
/// - `400 Bad Request`: ID が整数でない、JSON デコード失敗、バリデーション違反
/// - `404 Not Found`: 書籍が存在しない
/// - `500 Internal Server Error`: ストア障害
#[tracing::instrument(skip_all, fields(%id))]
pub async fn update_book(
    State(state): State<Arc<BookState>>,
    Path(id): Path<String>,
    payload: Result<Json<BookRequest>, JsonRejection>,
) -> Result<impl IntoResponse, CoreError> {
    let book_id: BookId = id.parse()?;
    let Json(req) = payload?;
    let book = req.into_new_book()?.with_id(book_id);

    if !state.book_repository.update(&book).await? {
        return Err(not_found(book_id));
    }

    Ok(StatusCode::OK)
}

/// DELETE /api/books/{id}
///
/// ## レスポンス
///
/// - `204 No Content`: 削除成功
/// - `400 Bad Request`: ID が整数でない
/// - `404 Not Found`: 書籍が存在しない
/// - `500 Internal Server Error`: ストア障害
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_book(
    State(state): State<Arc<BookState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, CoreError> {
    let book_id: BookId = id.parse()?;

    if !state.book_repository.delete(book_id).await? {
        return Err(not_found(book_id));
    }
    tracing::info!(book_id = %book_id, "書籍を削除しました");

    Ok(StatusCode::NO_CONTENT)
}
