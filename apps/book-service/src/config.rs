//! # Book Service 設定
//!
//! 環境変数から Book Service サーバーの設定を読み込む。
//!
//! | 変数名 | 必須 | デフォルト |
//! |--------|------|-----------|
//! | `BOOK_SERVICE_HOST` | No | `0.0.0.0` |
//! | `BOOK_SERVICE_PORT` | No | `8080` |
//! | `DATABASE_URL` | **Yes** | - |
//! | `DATABASE_MAX_CONNECTIONS` | No | `10` |

use std::env;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 必須の環境変数が未設定
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    /// 値の形式が不正
    #[error("{name} の値が不正です: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Book Service サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookServiceConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
    /// データベース接続 URL
    pub database_url: String,
    /// 接続プールの最大接続数
    pub database_max_connections: u32,
}

impl BookServiceConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の取得関数から設定を読み込む
    ///
    /// テストではプロセス環境変数を書き換えずに済むよう、こちらを使う。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: lookup("BOOK_SERVICE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or("BOOK_SERVICE_PORT", lookup("BOOK_SERVICE_PORT"), DEFAULT_PORT)?,
            database_url: lookup("DATABASE_URL")
                .filter(|url| !url.is_empty())
                .ok_or(ConfigError::Missing("DATABASE_URL"))?,
            database_max_connections: parse_or(
                "DATABASE_MAX_CONNECTIONS",
                lookup("DATABASE_MAX_CONNECTIONS"),
                DEFAULT_MAX_CONNECTIONS,
            )?,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<BookServiceConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        BookServiceConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_database_urlのみ指定するとデフォルト値が使われる() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/bookshelf")]).unwrap();

        assert_eq!(
            config,
            BookServiceConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
                database_url: "postgres://localhost/bookshelf".to_string(),
                database_max_connections: 10,
            }
        );
    }

    #[test]
    fn test_全項目を指定できる() {
        let config = load(&[
            ("BOOK_SERVICE_HOST", "127.0.0.1"),
            ("BOOK_SERVICE_PORT", "3000"),
            ("DATABASE_URL", "postgres://db/books"),
            ("DATABASE_MAX_CONNECTIONS", "4"),
        ])
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.database_max_connections, 4);
    }

    #[test]
    fn test_database_url未設定はエラー() {
        assert_eq!(load(&[]), Err(ConfigError::Missing("DATABASE_URL")));
        assert_eq!(
            load(&[("DATABASE_URL", "")]),
            Err(ConfigError::Missing("DATABASE_URL"))
        );
    }

    #[test]
    fn test_不正なポート番号はエラー() {
        let result = load(&[
            ("DATABASE_URL", "postgres://localhost/bookshelf"),
            ("BOOK_SERVICE_PORT", "eighty"),
        ]);

        assert_eq!(
            result,
            Err(ConfigError::Invalid {
                name:  "BOOK_SERVICE_PORT",
                value: "eighty".to_string(),
            })
        );
    }
}
