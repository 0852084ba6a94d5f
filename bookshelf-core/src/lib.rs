//! # bookshelf-core
//!
//! Client-side synchronization controller for a remote book collection.
//!
//! The controller is the single source of truth for the collection, the
//! in-progress edit buffer, the active screen and the transient status
//! message. Every user intent is applied by calling the resource client
//! (the [`BookStore`] trait from `bookshelf-client`) and reconciling the
//! result into local state in one atomic step; every transport failure is
//! converted into user-facing status text and never propagates further.
//!
//! The rendering layer is an external collaborator: it reads state through
//! [`SyncController::snapshot`] and feeds user interaction back in as
//! [`Intent`] values. It never mutates state itself.

pub mod controller;
pub mod intent;
pub mod model;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use bookshelf_client::{Book, BookStore, TransportError};
pub use controller::{SyncController, STATUS_TTL};
pub use intent::{Field, Intent};
pub use model::{FormMode, Screen, ShelfState};
