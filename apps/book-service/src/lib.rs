//! # Book Service
//!
//! 書籍の CRUD を HTTP/JSON で公開するサービス。
//!
//! `main.rs` はインフラ初期化とサーバー起動のみを行い、
//! ルーター構築とハンドラはこのライブラリに置く（統合テストから利用するため）。

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
