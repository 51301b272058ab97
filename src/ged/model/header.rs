//! Header record
//!
//! The header carries file-level metadata: the producing system, the declared
//! GEDCOM version and character set, the submitter pointer, and so on. The
//! declared version drives the mapper's dialect gating and the declared
//! charset drives byte decoding, but both are also kept here verbatim so the
//! model can be re-serialized without loss.

use super::shared::Note;
use super::{CustomTag, Xref};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Header {
    pub source: Option<SourceSystem>,
    /// `DEST` — intended receiving system
    pub destination: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub submitter: Option<Xref>,
    pub file_name: Option<String>,
    pub copyright: Option<String>,
    pub gedcom_version: Option<GedcomVersion>,
    pub character_set: Option<CharacterSet>,
    pub language: Option<String>,
    pub notes: Vec<Note>,
    pub custom: Vec<CustomTag>,
}

/// `HEAD.SOUR` — the system that produced the file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SourceSystem {
    /// The system id, the `SOUR` line value itself
    pub system_id: Option<String>,
    pub version: Option<String>,
    pub product_name: Option<String>,
    pub corporation: Option<String>,
    pub custom: Vec<CustomTag>,
}

/// `HEAD.GEDC` — declared format version and form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GedcomVersion {
    pub version: Option<String>,
    /// `FORM`, normally `LINEAGE-LINKED`
    pub form: Option<String>,
    pub custom: Vec<CustomTag>,
}

/// `HEAD.CHAR` — declared character set and optional version.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CharacterSet {
    pub value: Option<String>,
    pub version: Option<String>,
    pub custom: Vec<CustomTag>,
}
