//! Top-level note record

use super::{CustomTag, UserReference, Xref};
use serde::{Deserialize, Serialize};

/// One top-level `NOTE` record, shared by pointer from other records. The
/// text arrives fully folded (CONC/CONT already merged).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteRecord {
    pub xref: Xref,
    pub text: Option<String>,
    pub user_references: Vec<UserReference>,
    pub record_id: Option<String>,
    pub custom: Vec<CustomTag>,
}

impl NoteRecord {
    pub fn new(xref: Xref) -> Self {
        NoteRecord {
            xref,
            text: None,
            user_references: Vec::new(),
            record_id: None,
            custom: Vec::new(),
        }
    }
}
