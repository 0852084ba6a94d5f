//! Store trait for the book collection resource

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Book;

/// The four remote operations over the book collection.
///
/// Implementations make exactly one attempt per call and keep no state
/// between calls; every response reflects server state at call time.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Fetch the full collection, in server order.
    async fn list_all(&self) -> Result<Vec<Book>>;

    /// Create a record. The submitted record carries no identifier; the
    /// returned record carries the server-assigned one.
    async fn create(&self, book: &Book) -> Result<Book>;

    /// Overwrite the record at `id` with the full submitted record and
    /// return it as stored.
    async fn replace(&self, id: &str, book: &Book) -> Result<Book>;

    /// Delete the record at `id`. Acknowledgement only.
    async fn remove(&self, id: &str) -> Result<()>;
}
