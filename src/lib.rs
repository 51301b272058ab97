//! # ged-parser
//!
//! A parser and linker for the GEDCOM genealogical interchange format.
//!
//! GEDCOM files are line-oriented: every line carries a decimal level number,
//! an optional `@`-delimited record id, an uppercase tag and an optional value.
//! The level numbers encode a tree, and `@id@` values encode cross-references
//! between records that may point forward or backward in the file.
//!
//! This crate turns such a byte stream into a fully resolved, strongly typed
//! [`Gedcom`](ged::model::Gedcom) object graph plus an ordered list of
//! [`Diagnostic`](ged::diagnostics::Diagnostic)s. Real-world GEDCOM is
//! routinely non-conformant, so the parser recovers from everything it can
//! (recording a diagnostic) and only fails outright when no tree structure can
//! be established at all.
//!
//! See the [ged] module for the pipeline description, and
//! [ged::testing] for the test-support utilities.

pub mod ged;

pub use ged::diagnostics::{Diagnostic, Severity};
pub use ged::loader::GedcomLoader;
pub use ged::model::Gedcom;
pub use ged::{parse_gedcom, GedcomFile, ParseError};
