//! Source record

use super::shared::Note;
use super::{CustomTag, UserReference, Xref};
use serde::{Deserialize, Serialize};

/// One `SOUR` record: a document or artifact that genealogical assertions
/// cite. Citations elsewhere in the model point here by xref.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub xref: Xref,
    pub title: Option<String>,
    /// `ABBR` short title for sorting and display
    pub abbreviation: Option<String>,
    pub author: Option<String>,
    /// `PUBL` publication facts
    pub publication: Option<String>,
    /// `TEXT` verbatim source text, folded
    pub text: Option<String>,
    pub user_references: Vec<UserReference>,
    pub record_id: Option<String>,
    pub notes: Vec<Note>,
    pub custom: Vec<CustomTag>,
}

impl Source {
    pub fn new(xref: Xref) -> Self {
        Source {
            xref,
            title: None,
            abbreviation: None,
            author: None,
            publication: None,
            text: None,
            user_references: Vec::new(),
            record_id: None,
            notes: Vec::new(),
            custom: Vec::new(),
        }
    }
}
