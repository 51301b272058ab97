//! The typed record graph
//!
//!     The root aggregate [Gedcom] owns every record exactly once, keyed by
//!     [Xref] in ordered tables (deterministic iteration is part of the parse
//!     contract). Relationships between records are stored as `Xref` keys and
//!     navigated through lookup accessors that take `&Gedcom` — never as
//!     direct links between records. Individuals and families reference each
//!     other bidirectionally in the format, and centralized ownership-by-id is
//!     what keeps that cycle-free.
//!
//!     Every record also carries a `custom` side list of [CustomTag] subtrees:
//!     anything the mapper did not recognize, preserved verbatim and in order,
//!     so re-serialization can reproduce input this crate does not understand.

pub mod family;
pub mod header;
pub mod individual;
pub mod note;
pub mod shared;
pub mod source;
pub mod submitter;

pub use family::Family;
pub use header::{CharacterSet, GedcomVersion, Header, SourceSystem};
pub use individual::{FamilyChild, FamilySpouse, Individual, NameVariant, PersonalName};
pub use note::NoteRecord;
pub use shared::{Address, Citation, Event, EventKind, Note, Place, UserReference};
pub use source::Source;
pub use submitter::Submitter;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A record id as written in the file, `@` delimiters included (`@I1@`).
///
/// Used both as the ownership key in [Gedcom]'s tables and as the value of
/// every relationship field.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Xref(String);

impl Xref {
    pub fn new(id: impl Into<String>) -> Self {
        Xref(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Xref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Xref {
    fn from(id: &str) -> Self {
        Xref(id.to_string())
    }
}

/// An unrecognized subtree, preserved verbatim for lossless round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomTag {
    pub tag: String,
    pub xref: Option<String>,
    pub value: Option<String>,
    pub children: Vec<CustomTag>,
}

/// The root aggregate: one parsed GEDCOM file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Gedcom {
    pub header: Header,
    pub individuals: BTreeMap<Xref, Individual>,
    pub families: BTreeMap<Xref, Family>,
    pub sources: BTreeMap<Xref, Source>,
    pub submitters: BTreeMap<Xref, Submitter>,
    pub notes: BTreeMap<Xref, NoteRecord>,
    /// Unrecognized top-level records, in source order
    pub custom: Vec<CustomTag>,
}

impl Gedcom {
    pub fn individual(&self, xref: &Xref) -> Option<&Individual> {
        self.individuals.get(xref)
    }

    pub fn family(&self, xref: &Xref) -> Option<&Family> {
        self.families.get(xref)
    }

    pub fn source(&self, xref: &Xref) -> Option<&Source> {
        self.sources.get(xref)
    }

    pub fn submitter(&self, xref: &Xref) -> Option<&Submitter> {
        self.submitters.get(xref)
    }

    pub fn note(&self, xref: &Xref) -> Option<&NoteRecord> {
        self.notes.get(xref)
    }
}
