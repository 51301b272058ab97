//! Parsing pipeline for the GEDCOM format
//!
//!     This module provides the complete processing pipeline from raw bytes to
//!     the resolved record graph:
//!         1. Decoding: charset detection and byte decoding. See [encoding](encoding).
//!         2. Lexing: logical line reading. See [lexing](lexing).
//!         3. Parsing: level-driven tree building with continuation folding.
//!            See [parsing](parsing).
//!         4. Indexing: the cross-reference index over definitional records.
//!            See [xref](xref).
//!         5. Building: tag dispatch from tree nodes into typed records.
//!            See [building](building).
//!         6. Validation: post-mapping invariant checks. See [validate](validate).
//!
//! Parsing End To End
//!
//!     The stages are strictly sequential: each one fully consumes its
//!     predecessor's output. The xref index must be complete before any pointer
//!     is resolved, which is what makes forward references (a family naming an
//!     individual defined later in the file) work regardless of declaration
//!     order.
//!
//!     All recoverable conditions are accumulated into a [DiagnosticSink]
//!     (diagnostics::DiagnosticSink) and returned next to the model; the
//!     pipeline aborts only for the fatal cases in [ParseError]: an undecodable
//!     byte stream, a malformed level token, or empty input.
//!
//! Terminology
//!
//!     - parse: colloquial term for the entire pipeline (decode + lex + tree +
//!       index + build + validate)
//!     - build/mapping: the tag-dispatch phase that populates typed records
//!     - fold: merging CONC/CONT continuation lines into an ancestor's value

pub mod building;
pub mod diagnostics;
pub mod dialect;
pub mod encoding;
pub mod lexing;
pub mod loader;
pub mod model;
pub mod parsing;
pub mod testing;
pub mod validate;
pub mod xref;

use diagnostics::{Diagnostic, DiagnosticSink};
use model::Gedcom;
use std::fmt;

/// Fatal parse failures.
///
/// Everything else the parser encounters is recorded as a [Diagnostic] and
/// recovered from; these are the conditions under which no best-effort model
/// can be produced at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The byte stream could not be decoded with the detected character set
    Encoding(String),
    /// A line began with something that is not a non-negative decimal level
    MalformedLevel { line: usize, found: String },
    /// The input contained no GEDCOM lines at all
    EmptyInput,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Encoding(msg) => write!(f, "Undecodable byte stream: {}", msg),
            ParseError::MalformedLevel { line, found } => {
                write!(
                    f,
                    "Line {} does not begin with a non-negative level number: {:?}",
                    line, found
                )
            }
            ParseError::EmptyInput => write!(f, "Input contains no GEDCOM lines"),
        }
    }
}

impl std::error::Error for ParseError {}

/// The result of a full parse: the resolved record graph plus everything the
/// parser had to say about the input, in encounter order.
///
/// The model is always best-effort complete; callers inspect `diagnostics` to
/// decide whether the input was clean enough for their use case.
#[derive(Debug, Clone, PartialEq)]
pub struct GedcomFile {
    pub gedcom: Gedcom,
    pub diagnostics: Vec<Diagnostic>,
}

impl GedcomFile {
    /// True if no diagnostic of [Severity::Error](diagnostics::Severity) level
    /// was recorded.
    pub fn is_clean(&self) -> bool {
        !self
            .diagnostics
            .iter()
            .any(|d| d.severity == diagnostics::Severity::Error)
    }
}

/// Parse a GEDCOM byte stream through the complete pipeline.
///
/// This is the primary entry point. It performs charset detection, line
/// lexing, tree building, cross-reference indexing, record mapping and
/// post-mapping validation, in that order.
///
/// # Example
///
/// ```rust,ignore
/// let file = ged_parser::parse_gedcom(&bytes)?;
/// for diag in &file.diagnostics {
///     eprintln!("{}", diag);
/// }
/// let individuals = &file.gedcom.individuals;
/// ```
pub fn parse_gedcom(bytes: &[u8]) -> Result<GedcomFile, ParseError> {
    let mut sink = DiagnosticSink::new();

    let source = encoding::decode(bytes, &mut sink)?;
    let lines = lexing::lex(&source, &mut sink)?;
    log::debug!("lexed {} logical lines", lines.len());

    let tree = parsing::build_tree(&lines, &mut sink);
    let index = xref::XrefIndex::build(&tree, &mut sink);
    log::debug!("indexed {} cross-references", index.len());

    let gedcom = building::map_tree(&tree, &index, &mut sink);
    for diag in validate::validate(&gedcom) {
        sink.push(diag);
    }

    Ok(GedcomFile {
        gedcom,
        diagnostics: sink.into_diagnostics(),
    })
}
