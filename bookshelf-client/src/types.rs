//! Wire types for the collection endpoint

use serde::{Deserialize, Serialize};

/// One book record as the server stores it.
///
/// The struct exposes English field names; the wire names follow the server
/// contract and are mapped through serde renames.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Server-assigned identifier; empty until the record is persisted.
    /// An empty id is never sent on the wire, so a create request carries
    /// no identifier at all.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Title of the book.
    #[serde(rename = "titulo")]
    pub title: String,

    /// Author of the book.
    #[serde(rename = "autor")]
    pub author: String,

    /// Genre of the book.
    #[serde(rename = "genero")]
    pub genre: String,

    /// Free-text description.
    #[serde(rename = "descricao")]
    pub description: String,
}

impl Book {
    /// Whether all four text fields are filled in.
    ///
    /// A record may only be sent to the server once it is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty()
            && !self.author.is_empty()
            && !self.genre.is_empty()
            && !self.description.is_empty()
    }
}
