//! # BookRepository
//!
//! 書籍の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **パラメータバインド**: すべての値は `$n` プレースホルダで渡す（文字列連結しない）
//! - **影響行数の返却**: `update` / `delete` は対象行の有無を `bool` で返し、
//!   存在しない ID の扱いは呼び出し側で決める
//! - **実行時クエリ**: `sqlx::query_as` を使用し、ビルド時に DB 接続を要求しない

use async_trait::async_trait;
use bookshelf_domain::book::{Book, BookAuthor, BookId, BookTitle, NewBook};
use sqlx::PgPool;

use crate::error::InfraError;

/// 書籍リポジトリトレイト
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// 書籍を挿入し、採番された ID を返す
    async fn insert(&self, book: &NewBook) -> Result<BookId, InfraError>;

    /// ID で書籍を検索する
    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, InfraError>;

    /// 全書籍を取得する（ID 昇順）
    async fn find_all(&self) -> Result<Vec<Book>, InfraError>;

    /// タイトル・著者を置き換える
    ///
    /// 対象行が存在しなかった場合は `Ok(false)` を返す。
    async fn update(&self, book: &Book) -> Result<bool, InfraError>;

    /// 書籍を削除する
    ///
    /// 対象行が存在しなかった場合は `Ok(false)` を返す。
    async fn delete(&self, id: BookId) -> Result<bool, InfraError>;
}

/// PostgreSQL 実装の BookRepository
#[derive(Debug, Clone)]
pub struct PostgresBookRepository {
    pool: PgPool,
}

impl PostgresBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// `books` テーブルの 1 行
type BookRow = (i64, String, String);

/// DB の行を書籍エンティティに変換する
///
/// 検証は書き込み時に済んでいるため、読み出した値はそのまま使う。
/// 既存データに空文字などが含まれていても一覧全体を失敗させない。
fn book_from_row((id, title, author): BookRow) -> Book {
    Book::new(
        BookId::new(id),
        BookTitle::from_db(title),
        BookAuthor::from_db(author),
    )
}

#[async_trait]
impl BookRepository for PostgresBookRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, book: &NewBook) -> Result<BookId, InfraError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO books (title, author)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(book.title().as_str())
        .bind(book.author().as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(BookId::new(id))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, InfraError> {
        let row: Option<BookRow> = sqlx::query_as(
            r#"
            SELECT id, title, author
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(book_from_row))
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Book>, InfraError> {
        let rows: Vec<BookRow> = sqlx::query_as(
            r#"
            SELECT id, title, author
            FROM books
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(book_from_row).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %book.id()))]
    async fn update(&self, book: &Book) -> Result<bool, InfraError> {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = $2, author = $3
            WHERE id = $1
            "#,
        )
        .bind(book.id().as_i64())
        .bind(book.title().as_str())
        .bind(book.author().as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: BookId) -> Result<bool, InfraError> {
        let result = sqlx::query(
            r#"
            DELETE FROM books
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
