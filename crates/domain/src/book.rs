//! # 書籍
//!
//! 書籍エンティティと、それを構成する値オブジェクトを定義する。
//!
//! ## ライフサイクル
//!
//! 1. [`NewBook`] を組み立てて永続化する（ID はストアが採番する）
//! 2. 採番された [`BookId`] を持つ [`Book`] として参照される
//! 3. タイトル・著者は置き換え可能。ID は不変
//! 4. 物理削除される（論理削除は持たない）

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// タイトル・著者の最大文字数（`books` テーブルの VARCHAR(255) に合わせる）
pub const MAX_TEXT_LENGTH: usize = 255;

/// 書籍の一意識別子
///
/// データベースの `BIGSERIAL` で採番される。アプリケーション側では生成しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display)]
#[serde(transparent)]
#[display("{_0}")]
pub struct BookId(i64);

impl BookId {
    /// DB やパスパラメータの整数値から ID を作成する
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// 内部の整数値を取得する
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::str::FromStr for BookId {
    type Err = DomainError;

    /// パスパラメータ（`/api/books/{id}`）から ID をパースする
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self).map_err(|e| {
            DomainError::Validation(format!("書籍 ID は整数である必要があります: {s:?} ({e})"))
        })
    }
}

define_validated_string! {
    /// 書籍のタイトル（必須、最大 255 文字）
    pub struct BookTitle {
        label: "タイトル",
        max_length: MAX_TEXT_LENGTH,
    }
}

define_validated_string! {
    /// 書籍の著者（必須、最大 255 文字）
    pub struct BookAuthor {
        label: "著者",
        max_length: MAX_TEXT_LENGTH,
    }
}

/// 永続化前の書籍
///
/// ID を持たない。ストアへの挿入時に ID が採番される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    title:  BookTitle,
    author: BookAuthor,
}

impl NewBook {
    pub fn new(title: BookTitle, author: BookAuthor) -> Self {
        Self { title, author }
    }

    pub fn title(&self) -> &BookTitle {
        &self.title
    }

    pub fn author(&self) -> &BookAuthor {
        &self.author
    }

    /// 採番された ID を付与して [`Book`] にする
    pub fn with_id(self, id: BookId) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
        }
    }
}

/// 書籍エンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id:     BookId,
    title:  BookTitle,
    author: BookAuthor,
}

impl Book {
    pub fn new(id: BookId, title: BookTitle, author: BookAuthor) -> Self {
        Self { id, title, author }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &BookTitle {
        &self.title
    }

    pub fn author(&self) -> &BookAuthor {
        &self.author
    }

    /// タイトルと著者を置き換えた書籍を返す（ID は維持）
    pub fn with_details(self, title: BookTitle, author: BookAuthor) -> Self {
        Self {
            id: self.id,
            title,
            author,
        }
    }
}
