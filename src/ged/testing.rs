//! Test-support utilities
//!
//!     GEDCOM test content is easy to get subtly wrong by hand: one bad level
//!     number or a missing header line and a test exercises the recovery path
//!     instead of the happy path it meant to cover. Tests therefore build
//!     their sources through [SampleBuilder], which always emits a well-formed
//!     header/trailer envelope, and only hand-write raw lines when the broken
//!     shape *is* the thing under test.
//!
//!     `parse_str` is the companion shortcut: parse a source string and panic
//!     on the fatal errors no well-formed sample should hit.

use super::{parse_gedcom, GedcomFile};

/// Parse a source string, panicking on fatal errors. Test helper only.
pub fn parse_str(source: &str) -> GedcomFile {
    parse_gedcom(source.as_bytes()).expect("parse failed")
}

/// Builder for well-formed GEDCOM test sources.
///
/// Emits a 5.5.1 UTF-8 header by default; `version` overrides the declared
/// dialect. Records are appended in call order, the trailer is appended by
/// `finish`.
///
/// # Example
///
/// ```rust,ignore
/// let source = SampleBuilder::new()
///     .individual("@I1@", "John /Doe/")
///     .family("@F1@", Some("@I1@"), None, &[])
///     .finish();
/// ```
pub struct SampleBuilder {
    version: String,
    records: Vec<String>,
}

impl SampleBuilder {
    pub fn new() -> Self {
        SampleBuilder {
            version: "5.5.1".to_string(),
            records: Vec::new(),
        }
    }

    /// Override the declared GEDCOM version (`5.5` selects the older dialect).
    pub fn version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }

    /// Append raw lines verbatim. The lines must carry their own levels and
    /// trailing structure; this is the escape hatch for malformed shapes.
    pub fn raw(mut self, lines: &str) -> Self {
        self.records.push(lines.trim_end().to_string());
        self
    }

    /// Append a minimal individual with one NAME line.
    pub fn individual(self, xref: &str, name: &str) -> Self {
        self.raw(&format!("0 {} INDI\n1 NAME {}", xref, name))
    }

    /// Append a family with optional spouses and any number of children.
    pub fn family(
        self,
        xref: &str,
        husband: Option<&str>,
        wife: Option<&str>,
        children: &[&str],
    ) -> Self {
        let mut lines = format!("0 {} FAM", xref);
        if let Some(husband) = husband {
            lines.push_str(&format!("\n1 HUSB {}", husband));
        }
        if let Some(wife) = wife {
            lines.push_str(&format!("\n1 WIFE {}", wife));
        }
        for child in children {
            lines.push_str(&format!("\n1 CHIL {}", child));
        }
        self.raw(&lines)
    }

    /// Append a submitter with a name.
    pub fn submitter(self, xref: &str, name: &str) -> Self {
        self.raw(&format!("0 {} SUBM\n1 NAME {}", xref, name))
    }

    /// Render the complete source, header and trailer included.
    pub fn finish(self) -> String {
        let mut out = format!(
            "0 HEAD\n1 SOUR ged-parser\n1 GEDC\n2 VERS {}\n2 FORM LINEAGE-LINKED\n1 CHAR UTF-8\n",
            self.version
        );
        for record in &self.records {
            out.push_str(record);
            out.push('\n');
        }
        out.push_str("0 TRLR\n");
        out
    }
}

impl Default for SampleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
