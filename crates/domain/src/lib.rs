//! # Bookshelf ドメイン層
//!
//! 書籍管理のドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! book-service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB）や HTTP には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`book`] - 書籍エンティティと値オブジェクト
//! - [`error`] - ドメイン層で発生するエラーの定義
//!
//! ## 使用例
//!
//! ```rust
//! use bookshelf_domain::{
//!     DomainError,
//!     book::{BookAuthor, BookTitle, NewBook},
//! };
//!
//! let new_book = NewBook::new(BookTitle::new("Dune")?, BookAuthor::new("Herbert")?);
//! assert_eq!(new_book.title().as_str(), "Dune");
//!
//! let error = BookTitle::new("   ").unwrap_err();
//! assert!(matches!(error, DomainError::Validation(_)));
//! # Ok::<(), DomainError>(())
//! ```

#[macro_use]
mod macros;

pub mod book;
pub mod error;

pub use error::DomainError;
