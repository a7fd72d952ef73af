//! # リポジトリ実装
//!
//! ## 設計方針
//!
//! - **依存性逆転**: サービス層はトレイト（`Arc<dyn BookRepository>`）にのみ依存する
//! - **データベース抽象化**: sqlx を使用し、PostgreSQL 固有の処理をカプセル化
//! - **テスタビリティ**: トレイト経由で差し替え可能（[`crate::mock`] を参照）

pub mod book_repository;

pub use book_repository::{BookRepository, PostgresBookRepository};
