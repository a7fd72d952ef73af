//! # Book Service サーバー
//!
//! 書籍の CRUD API を提供する HTTP サーバー。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `BOOK_SERVICE_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `BOOK_SERVICE_PORT` | No | ポート番号（デフォルト: `8080`） |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//! | `DATABASE_MAX_CONNECTIONS` | No | 接続プールの最大接続数（デフォルト: `10`） |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! DATABASE_URL=postgres://... cargo run -p bookshelf-book-service
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use bookshelf_book_service::{
    app_builder::build_app,
    config::BookServiceConfig,
    handler::ReadinessState,
};
use bookshelf_infra::{db, repository::PostgresBookRepository};
use bookshelf_shared::observability::{TracingConfig, init_tracing};
use tokio::{net::TcpListener, signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("book-service");
    init_tracing(tracing_config.clone());
    let _app_span = tracing::info_span!("app", service = %tracing_config.service_name).entered();

    let config = BookServiceConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "Book Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    let pool = db::create_pool(&config.database_url, config.database_max_connections)
        .await
        .context("データベース接続に失敗しました")?;
    tracing::info!("データベースに接続しました");

    let book_repository = Arc::new(PostgresBookRepository::new(pool.clone()));
    let readiness_state = Arc::new(ReadinessState { pool: pool.clone() });
    let app = build_app(book_repository, readiness_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("バインドアドレスが不正です")?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("{addr} へのバインドに失敗しました"))?;
    tracing::info!("Book Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("サーバーが異常終了しました")?;

    pool.close().await;
    tracing::info!("Book Service サーバーを停止しました");

    Ok(())
}

/// Ctrl+C または SIGTERM を待つ
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::warn!(%error, "Ctrl+C ハンドラの登録に失敗しました");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "SIGTERM ハンドラの登録に失敗しました");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("シャットダウンシグナルを受信しました。処理中のリクエストを完了させます");
}
