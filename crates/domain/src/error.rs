//! # ドメイン層エラー定義
//!
//! ビジネスルール違反やドメイン固有の例外状態を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 入力値の検証失敗 |
//! | `NotFound` | 404 Not Found | エンティティが存在しない |
//!
//! ## 使用例
//!
//! ```rust
//! use bookshelf_domain::DomainError;
//!
//! fn find_book(id: i64) -> Result<(), DomainError> {
//!     Err(DomainError::NotFound {
//!         entity_type: "Book",
//!         id:          id.to_string(),
//!     })
//! }
//!
//! assert_eq!(
//!     find_book(42).unwrap_err().to_string(),
//!     "Book が見つかりません: 42"
//! );
//! ```

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// - 必須フィールドが未入力
    /// - 文字数制限の超過
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// エンティティが見つからない
    #[error("{entity_type} が見つかりません: {id}")]
    NotFound {
        /// エンティティの種類（"Book" など）
        entity_type: &'static str,
        /// 検索に使用した識別子
        id:          String,
    },
}
