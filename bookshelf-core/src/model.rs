//! Controller-owned view state
//!
//! One struct holds everything the rendering layer may read: the
//! collection, the edit buffer, the form mode, the active screen and the
//! status message. The controller is the only place allowed to mutate it.
//! The pure reconciliation helpers here keep the ordering rules in one
//! spot: append at the end, replace in place, remove in place, never
//! re-sort.

use serde::Serialize;

use bookshelf_client::Book;

/// Which render path is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Screen {
    /// The collection overview.
    #[default]
    List,
    /// The create/edit form.
    Form,
}

/// Whether submit creates a new record or replaces an existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum FormMode {
    /// The buffer holds a brand-new draft.
    #[default]
    New,
    /// The buffer holds a copy of the collection entry with this id.
    Editing(String),
}

/// Snapshot of everything the rendering layer may read.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ShelfState {
    /// Records currently believed to exist server-side, in server order.
    pub books: Vec<Book>,

    /// The draft being composed while the form screen is active.
    pub draft: Book,

    /// Create vs replace-by-id on submit.
    pub mode: FormMode,

    /// Active screen.
    pub screen: Screen,

    /// Outcome text of the last settled operation, while still visible.
    pub status: Option<String>,

    /// Sequence number of the current status message; an expiry timer only
    /// clears the message it was scheduled for.
    #[serde(skip)]
    pub(crate) status_seq: u64,

    /// Bumped on every transition into or out of the form. A store call
    /// dispatched from the form discards its result when the generation has
    /// moved on underneath it.
    #[serde(skip)]
    pub(crate) form_generation: u64,
}

impl ShelfState {
    /// Entry with the given id, if present.
    #[must_use]
    pub fn book_by_id(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Append a server-confirmed record at the end of the collection.
    pub(crate) fn apply_created(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Replace the entry whose identifier equals `id`, preserving its
    /// position. Identity is by id, not position; when no entry carries the
    /// id the collection stays unchanged and no error is raised.
    pub(crate) fn apply_replaced(&mut self, id: &str, book: Book) {
        if let Some(slot) = self.books.iter_mut().find(|b| b.id == id) {
            *slot = book;
        }
    }

    /// Remove the entry whose identifier equals `id`, keeping the order of
    /// the remainder.
    pub(crate) fn apply_removed(&mut self, id: &str) {
        self.books.retain(|b| b.id != id);
    }

    /// Reset the edit buffer to a blank create-mode draft.
    pub(crate) fn reset_form(&mut self) {
        self.draft = Book::default();
        self.mode = FormMode::New;
    }

    /// Leave the form screen, discarding the draft.
    pub(crate) fn leave_form(&mut self) {
        self.reset_form();
        self.screen = Screen::List;
        self.form_generation += 1;
    }
}
