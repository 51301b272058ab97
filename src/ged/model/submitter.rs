//! Submitter record

use super::shared::{Address, Note};
use super::{CustomTag, UserReference, Xref};
use serde::{Deserialize, Serialize};

/// One `SUBM` record: who supplied the file's data. The typed contact fields
/// (`EMAIL`/`FAX`/`WWW`) are 5.5.1-only; the mapper gates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submitter {
    pub xref: Xref,
    pub name: Option<String>,
    pub address: Option<Address>,
    pub phones: Vec<String>,
    pub emails: Vec<String>,
    pub faxes: Vec<String>,
    pub www: Vec<String>,
    pub language: Vec<String>,
    pub user_references: Vec<UserReference>,
    pub record_id: Option<String>,
    pub notes: Vec<Note>,
    pub custom: Vec<CustomTag>,
}

impl Submitter {
    pub fn new(xref: Xref) -> Self {
        Submitter {
            xref,
            name: None,
            address: None,
            phones: Vec::new(),
            emails: Vec::new(),
            faxes: Vec::new(),
            www: Vec::new(),
            language: Vec::new(),
            user_references: Vec::new(),
            record_id: None,
            notes: Vec::new(),
            custom: Vec::new(),
        }
    }
}
