//! # テスト用モックリポジトリ
//!
//! ハンドラテストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! bookshelf-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bookshelf_domain::book::{Book, BookId, NewBook};

use crate::{error::InfraError, repository::BookRepository};

#[derive(Default)]
struct MockBookStore {
    /// 最後に採番した ID（BIGSERIAL と同じく 1 始まり）
    last_id: i64,
    books:   Vec<Book>,
}

// ===== MockBookRepository =====

/// インメモリの BookRepository
///
/// `Clone` しても内部ストアは共有される。テストからの状態確認に使う。
#[derive(Clone, Default)]
pub struct MockBookRepository {
    store: Arc<Mutex<MockBookStore>>,
}

impl MockBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 書籍を直接追加する（採番カウンタも進める）
    pub fn add_book(&self, book: Book) {
        let mut store = self.store.lock().unwrap();
        store.last_id = store.last_id.max(book.id().as_i64());
        store.books.push(book);
    }

    /// 保持している書籍のスナップショット
    pub fn books(&self) -> Vec<Book> {
        self.store.lock().unwrap().books.clone()
    }
}

#[async_trait]
impl BookRepository for MockBookRepository {
    async fn insert(&self, book: &NewBook) -> Result<BookId, InfraError> {
        let mut store = self.store.lock().unwrap();
        store.last_id += 1;
        let id = BookId::new(store.last_id);
        store.books.push(book.clone().with_id(id));
        Ok(id)
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, InfraError> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .books
            .iter()
            .find(|b| b.id() == id)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Book>, InfraError> {
        let mut books = self.store.lock().unwrap().books.clone();
        books.sort_by_key(Book::id);
        Ok(books)
    }

    async fn update(&self, book: &Book) -> Result<bool, InfraError> {
        let mut store = self.store.lock().unwrap();
        match store.books.iter_mut().find(|b| b.id() == book.id()) {
            Some(existing) => {
                *existing = book.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: BookId) -> Result<bool, InfraError> {
        let mut store = self.store.lock().unwrap();
        let before = store.books.len();
        store.books.retain(|b| b.id() != id);
        Ok(store.books.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use bookshelf_domain::book::{BookAuthor, BookTitle};
    use pretty_assertions::assert_eq;

    use super::*;

    fn new_book(title: &str, author: &str) -> NewBook {
        NewBook::new(
            BookTitle::new(title).unwrap(),
            BookAuthor::new(author).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_insertで1から順にidが採番される() {
        let sut = MockBookRepository::new();

        let first = sut.insert(&new_book("Dune", "Herbert")).await.unwrap();
        let second = sut.insert(&new_book("Emma", "Austen")).await.unwrap();

        assert_eq!(first, BookId::new(1));
        assert_eq!(second, BookId::new(2));
    }

    #[tokio::test]
    async fn test_削除済みのidは再利用されない() {
        let sut = MockBookRepository::new();
        let id = sut.insert(&new_book("Dune", "Herbert")).await.unwrap();
        sut.delete(id).await.unwrap();

        let next = sut.insert(&new_book("Emma", "Austen")).await.unwrap();

        assert_eq!(next, BookId::new(2));
    }

    #[tokio::test]
    async fn test_存在しないidのupdateとdeleteはfalseを返す() {
        let sut = MockBookRepository::new();
        let ghost = new_book("Dune", "Herbert").with_id(BookId::new(99));

        assert!(!sut.update(&ghost).await.unwrap());
        assert!(!sut.delete(BookId::new(99)).await.unwrap());
    }
}
