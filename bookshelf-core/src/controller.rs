//! Synchronization controller
//!
//! The single owner of the shelf state. Every operation calls the store at
//! most once and folds the outcome back into the state in one atomic step
//! under the write lock; store calls themselves are awaited without holding
//! the lock. Failures become status text and never propagate to the caller.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use bookshelf_client::{BookStore, TransportError};

use crate::intent::{Field, Intent};
use crate::model::{FormMode, Screen, ShelfState};

/// How long a status message stays visible unless superseded.
pub const STATUS_TTL: Duration = Duration::from_secs(3);

// User-facing outcome texts, one per settled operation.
const MSG_LOAD_FAILED: &str = "Failed to load books.";
const MSG_FILL_ALL_FIELDS: &str = "Fill in all fields.";
const MSG_ADDED: &str = "Book added successfully.";
const MSG_ADD_FAILED: &str = "Failed to add book.";
const MSG_UPDATED: &str = "Book updated successfully.";
const MSG_UPDATE_FAILED: &str = "Failed to update book.";
const MSG_DELETED: &str = "Book deleted successfully.";
const MSG_DELETE_FAILED: &str = "Failed to delete book.";

/// Client-side synchronization controller for one book collection.
pub struct SyncController {
    store: Arc<dyn BookStore>,
    state: Arc<RwLock<ShelfState>>,
}

impl SyncController {
    /// Controller over the given store, starting on an empty list screen.
    #[must_use]
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self {
            store,
            state: Arc::new(RwLock::new(ShelfState::default())),
        }
    }

    /// Read-only copy of the current state for the rendering layer.
    pub async fn snapshot(&self) -> ShelfState {
        self.state.read().await.clone()
    }

    /// Dispatch one rendering-boundary intent.
    pub async fn handle(&self, intent: Intent) {
        match intent {
            Intent::EditField(field, value) => self.edit_field(field, value).await,
            Intent::RequestAdd => self.request_add().await,
            Intent::RequestEdit(id) => self.request_edit(&id).await,
            Intent::Submit => self.submit().await,
            Intent::Cancel => self.cancel().await,
            Intent::DeleteEntry(id) => self.delete_entry(&id).await,
        }
    }

    /// Load the collection from the server.
    ///
    /// Called once on first activation; the only operation not triggered by
    /// a user intent. On failure the collection stays empty and the user is
    /// told, but the list screen comes up either way.
    pub async fn initialize(&self) {
        match self.store.list_all().await {
            Ok(books) => {
                log::debug!("loaded {} books", books.len());
                let mut state = self.state.write().await;
                state.books = books;
                state.screen = Screen::List;
            }
            Err(e) => {
                log_store_failure("load books", &e);
                let mut state = self.state.write().await;
                state.screen = Screen::List;
                self.set_status(&mut state, MSG_LOAD_FAILED);
            }
        }
    }

    /// Open the form with a blank draft.
    pub async fn request_add(&self) {
        let mut state = self.state.write().await;
        state.reset_form();
        state.screen = Screen::Form;
        state.form_generation += 1;
    }

    /// Open the form pre-filled with a copy of the entry carrying `id`.
    ///
    /// No transition when the id is not in the collection.
    pub async fn request_edit(&self, id: &str) {
        let mut state = self.state.write().await;
        let Some(book) = state.book_by_id(id).cloned() else {
            log::debug!("edit requested for unknown id {id}");
            return;
        };
        state.draft = book;
        state.mode = FormMode::Editing(id.to_string());
        state.screen = Screen::Form;
        state.form_generation += 1;
    }

    /// Overwrite one field of the edit buffer. Pure assignment; the
    /// collection is untouched and nothing is validated here.
    pub async fn edit_field(&self, field: Field, value: String) {
        let mut state = self.state.write().await;
        if state.screen != Screen::Form {
            return;
        }
        let slot = match field {
            Field::Title => &mut state.draft.title,
            Field::Author => &mut state.draft.author,
            Field::Genre => &mut state.draft.genre,
            Field::Description => &mut state.draft.description,
        };
        *slot = value;
    }

    /// Persist the draft: create in new mode, replace-by-id in edit mode.
    ///
    /// An incomplete draft short-circuits without contacting the server.
    /// Only a successful submit leaves the form; a failure keeps the draft
    /// and the screen exactly as they were so the user can retry or cancel.
    pub async fn submit(&self) {
        let (draft, mode, generation) = {
            let mut state = self.state.write().await;
            if state.screen != Screen::Form {
                return;
            }
            if !state.draft.is_complete() {
                self.set_status(&mut state, MSG_FILL_ALL_FIELDS);
                return;
            }
            (
                state.draft.clone(),
                state.mode.clone(),
                state.form_generation,
            )
        };

        let result = match &mode {
            FormMode::New => self.store.create(&draft).await,
            FormMode::Editing(id) => self.store.replace(id, &draft).await,
        };

        let mut state = self.state.write().await;
        if state.form_generation != generation {
            // The form was cancelled or superseded while the request was in
            // flight; the result no longer has a home.
            log::debug!("discarding stale submit result");
            return;
        }

        match (mode, result) {
            (FormMode::New, Ok(book)) => {
                state.apply_created(book);
                self.set_status(&mut state, MSG_ADDED);
                state.leave_form();
            }
            (FormMode::Editing(id), Ok(book)) => {
                state.apply_replaced(&id, book);
                self.set_status(&mut state, MSG_UPDATED);
                state.leave_form();
            }
            (FormMode::New, Err(e)) => {
                log_store_failure("create book", &e);
                self.set_status(&mut state, MSG_ADD_FAILED);
            }
            (FormMode::Editing(_), Err(e)) => {
                log_store_failure("update book", &e);
                self.set_status(&mut state, MSG_UPDATE_FAILED);
            }
        }
    }

    /// Leave the form, discarding the draft. Never contacts the server and
    /// shows no status message.
    pub async fn cancel(&self) {
        let mut state = self.state.write().await;
        if state.screen != Screen::Form {
            return;
        }
        state.leave_form();
    }

    /// Delete the entry carrying `id` from the list screen.
    ///
    /// The screen never changes as a result of a delete, whatever the
    /// outcome.
    pub async fn delete_entry(&self, id: &str) {
        {
            let state = self.state.read().await;
            if state.screen != Screen::List {
                return;
            }
        }

        match self.store.remove(id).await {
            Ok(()) => {
                let mut state = self.state.write().await;
                state.apply_removed(id);
                self.set_status(&mut state, MSG_DELETED);
            }
            Err(e) => {
                log_store_failure("delete book", &e);
                let mut state = self.state.write().await;
                self.set_status(&mut state, MSG_DELETE_FAILED);
            }
        }
    }

    /// Show a status message and schedule its expiry.
    ///
    /// The expiry task only clears the message it was scheduled for: a
    /// newer message bumps the sequence number and the old timer fires as a
    /// no-op.
    fn set_status(&self, state: &mut ShelfState, message: &str) {
        state.status = Some(message.to_string());
        state.status_seq += 1;

        let seq = state.status_seq;
        let shared = Arc::clone(&self.state);
        tokio::spawn(async move {
            tokio::time::sleep(STATUS_TTL).await;
            let mut state = shared.write().await;
            if state.status_seq == seq {
                state.status = None;
            }
        });
    }
}

/// Log a store failure at the level its classification calls for.
fn log_store_failure(operation: &str, error: &TransportError) {
    if error.is_expected() {
        log::warn!("failed to {operation}: {error}");
    } else {
        log::error!("failed to {operation}: {error}");
    }
}
