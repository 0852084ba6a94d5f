//! # bookshelf-client
//!
//! Resource client for a single REST book-collection endpoint.
//!
//! The crate translates four logical operations into HTTP requests against
//! one configured collection resource and translates responses back into
//! [`Book`] values or a [`TransportError`]:
//!
//! | Operation | Method | Path |
//! |-----------|--------|--------|
//! | list      | GET    | `/`    |
//! | create    | POST   | `/`    |
//! | replace   | PUT    | `/{id}`|
//! | delete    | DELETE | `/{id}`|
//!
//! Every call is a single attempt: no retry, no caching. The operations are
//! exposed behind the [`BookStore`] trait so that consumers (notably the
//! synchronization controller in `bookshelf-core`) can be exercised against
//! an in-memory implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bookshelf_client::{Book, BookStore, ClientConfig, RestBookStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = RestBookStore::new(&ClientConfig::default());
//!
//!     let books = store.list_all().await?;
//!     for book in &books {
//!         println!("{} ({})", book.title, book.author);
//!     }
//!
//!     let created = store
//!         .create(&Book {
//!             title: "Dom Casmurro".to_string(),
//!             author: "Machado de Assis".to_string(),
//!             genre: "Romance".to_string(),
//!             description: "Bento Santiago looks back on his life.".to_string(),
//!             ..Book::default()
//!         })
//!         .await?;
//!     println!("assigned id: {}", created.id);
//!     Ok(())
//! }
//! ```
//!
//! ## TLS Backend
//!
//! - **`native-tls`** *(default)* — use the platform TLS implementation.
//! - **`rustls`** — use rustls, recommended for cross-compilation.

mod config;
mod error;
mod rest;
mod store;
mod types;

// Re-export error types
pub use error::{Result, TransportError};

// Re-export the store trait and its HTTP implementation
pub use rest::RestBookStore;
pub use store::BookStore;

// Re-export types
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use types::Book;
