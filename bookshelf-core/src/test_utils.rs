//! Test helpers
//!
//! In-memory mock store and convenient controller factories.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Notify, RwLock};

use bookshelf_client::{Book, BookStore, Result, TransportError};

use crate::controller::SyncController;

/// In-memory [`BookStore`] with scriptable failure and call counting.
pub struct MockBookStore {
    books: RwLock<Vec<Book>>,
    next_id: AtomicU64,
    /// When Some, every operation fails with a network error carrying this
    /// detail.
    fail: RwLock<Option<String>>,
    /// When set, write operations block until the notify fires.
    gate: RwLock<Option<Arc<Notify>>>,
    calls: AtomicUsize,
}

impl MockBookStore {
    pub fn new() -> Self {
        Self {
            books: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(100),
            fail: RwLock::new(None),
            gate: RwLock::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    /// Replace the server-side collection.
    pub async fn seed(&self, books: Vec<Book>) {
        *self.books.write().await = books;
    }

    /// Make every following operation fail (`None` restores success).
    pub async fn set_fail(&self, detail: Option<&str>) {
        *self.fail.write().await = detail.map(str::to_string);
    }

    /// Make write operations wait; returns the release handle.
    pub async fn hold_writes(&self) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        *self.gate.write().await = Some(notify.clone());
        notify
    }

    /// Number of operations attempted against the store.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn check(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(detail) = self.fail.read().await.clone() {
            return Err(TransportError::Network(detail));
        }
        Ok(())
    }

    async fn wait_for_gate(&self) {
        let gate = self.gate.read().await.clone();
        if let Some(notify) = gate {
            notify.notified().await;
        }
    }
}

#[async_trait]
impl BookStore for MockBookStore {
    async fn list_all(&self) -> Result<Vec<Book>> {
        self.check().await?;
        Ok(self.books.read().await.clone())
    }

    async fn create(&self, book: &Book) -> Result<Book> {
        self.check().await?;
        self.wait_for_gate().await;
        let mut created = book.clone();
        created.id = self.next_id.fetch_add(1, Ordering::SeqCst).to_string();
        self.books.write().await.push(created.clone());
        Ok(created)
    }

    async fn replace(&self, id: &str, book: &Book) -> Result<Book> {
        self.check().await?;
        self.wait_for_gate().await;
        let mut stored = book.clone();
        stored.id = id.to_string();
        let mut books = self.books.write().await;
        if let Some(slot) = books.iter_mut().find(|b| b.id == id) {
            *slot = stored.clone();
        }
        Ok(stored)
    }

    async fn remove(&self, id: &str) -> Result<()> {
        self.check().await?;
        self.books.write().await.retain(|b| b.id != id);
        Ok(())
    }
}

// ===== Factories =====

/// Controller over a fresh mock store.
pub fn create_test_controller() -> (Arc<SyncController>, Arc<MockBookStore>) {
    let store = Arc::new(MockBookStore::new());
    let controller = Arc::new(SyncController::new(store.clone()));
    (controller, store)
}

/// A complete book whose text fields are derived from the id.
pub fn test_book(id: &str) -> Book {
    Book {
        id: id.to_string(),
        title: format!("Title {id}"),
        author: format!("Author {id}"),
        genre: format!("Genre {id}"),
        description: format!("Description {id}"),
    }
}
