//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供

pub mod book;
pub mod health;

pub use book::{BookState, create_book, delete_book, get_book, list_books, update_book};
pub use health::{ReadinessState, health_check, readiness_check};
