//! Diagnostic collection for the parsing pipeline
//!
//! Real-world GEDCOM files are routinely non-conformant, so the parser never
//! aborts on recoverable input. Instead every stage records what it had to
//! tolerate into a [DiagnosticSink], and the full ordered list is returned
//! next to the model. Severity is advisory: the caller decides which levels
//! make the file unacceptable for its use case.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Diagnostic severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// One recoverable condition encountered during parsing.
///
/// `line` is the 1-based source line the condition was observed on, when one
/// can be attributed; diagnostics produced by the post-mapping validator refer
/// to whole records and carry no line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub line: Option<usize>,
    pub message: String,
    pub code: Option<String>,
}

impl Diagnostic {
    pub fn new(severity: Severity, line: Option<usize>, message: String) -> Self {
        Self {
            severity,
            line,
            message,
            code: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}: {} (line {})", self.severity, self.message, line),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}

/// Ordered accumulator threaded through every pipeline stage.
///
/// Order is part of the contract: parsing the same input twice must produce
/// the identical diagnostics list, and index-building diagnostics always
/// precede mapping diagnostics because the stages run strictly in sequence.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn warn(&mut self, line: impl Into<Option<usize>>, code: &str, message: impl Into<String>) {
        self.push(Diagnostic::new(Severity::Warning, line.into(), message.into()).with_code(code));
    }

    pub fn info(&mut self, line: impl Into<Option<usize>>, code: &str, message: impl Into<String>) {
        self.push(Diagnostic::new(Severity::Info, line.into(), message.into()).with_code(code));
    }

    pub fn error(&mut self, line: impl Into<Option<usize>>, code: &str, message: impl Into<String>) {
        self.push(Diagnostic::new(Severity::Error, line.into(), message.into()).with_code(code));
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_creation() {
        let diag = Diagnostic::new(Severity::Warning, Some(12), "Duplicate id".to_string())
            .with_code("duplicate-xref");

        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(diag.line, Some(12));
        assert_eq!(diag.code, Some("duplicate-xref".to_string()));
    }

    #[test]
    fn test_display_with_and_without_line() {
        let with_line = Diagnostic::new(Severity::Warning, Some(3), "bad level".to_string());
        assert_eq!(with_line.to_string(), "warning: bad level (line 3)");

        let without = Diagnostic::new(Severity::Error, None, "missing name".to_string());
        assert_eq!(without.to_string(), "error: missing name");
    }

    #[test]
    fn test_sink_preserves_order() {
        let mut sink = DiagnosticSink::new();
        sink.warn(1, "a", "first");
        sink.info(None, "b", "second");
        sink.warn(9, "c", "third");

        let messages: Vec<_> = sink
            .diagnostics()
            .iter()
            .map(|d| d.message.as_str())
            .collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
    }
}
