//! Logical line reading
//!
//!     Every non-blank GEDCOM line has the shape:
//!
//!         LEVEL [@XREF@] TAG [VALUE]
//!
//!     where LEVEL is a non-negative decimal, the optional XREF marks a
//!     definitional record, TAG is an uppercase mnemonic or a `_`-prefixed
//!     custom tag, and VALUE is everything after the single space following
//!     the tag (internal spacing preserved verbatim).
//!
//!     The level token is the one thing this stage is strict about: a line
//!     whose first token is not a non-negative decimal leaves no way to place
//!     the line in the tree, so it is fatal. Everything else (blank lines,
//!     leading whitespace, dangling ids) is tolerated with a diagnostic.

use super::diagnostics::DiagnosticSink;
use super::ParseError;

/// One syntactically decomposed GEDCOM line. Transient; consumed by the tree
/// builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    pub level: u32,
    /// Definitional record id including its `@` delimiters, e.g. `@I1@`
    pub xref: Option<String>,
    pub tag: String,
    pub value: Option<String>,
    /// 1-based source line number, for diagnostics
    pub line_num: usize,
}

/// Split decoded source text into logical lines.
///
/// Blank lines are skipped (they are illegal in GEDCOM but common in the
/// wild), and lines with leading whitespace are accepted after a warning.
pub fn lex(source: &str, sink: &mut DiagnosticSink) -> Result<Vec<LogicalLine>, ParseError> {
    let mut lines = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let line_num = idx + 1;
        if raw.trim().is_empty() {
            sink.warn(line_num, "blank-line", "Blank line, which is not allowed");
            continue;
        }
        if let Some(line) = lex_line(raw, line_num, sink)? {
            lines.push(line);
        }
    }
    if lines.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    Ok(lines)
}

fn lex_line(
    raw: &str,
    line_num: usize,
    sink: &mut DiagnosticSink,
) -> Result<Option<LogicalLine>, ParseError> {
    let trimmed = raw.trim_start();
    if trimmed.len() != raw.len() {
        sink.warn(
            line_num,
            "leading-whitespace",
            "Line has leading whitespace, which is not allowed",
        );
    }
    let trimmed = trimmed.trim_end_matches('\r');

    let (level_token, rest) = split_token(trimmed);
    let level: u32 = match level_token.parse() {
        Ok(level) => level,
        Err(_) => {
            return Err(ParseError::MalformedLevel {
                line: line_num,
                found: level_token.to_string(),
            })
        }
    };

    let (mut token, mut rest) = split_token(rest);
    let mut xref = None;
    if token.starts_with('@') {
        if token.len() > 2 && token.ends_with('@') {
            xref = Some(token.to_string());
            (token, rest) = split_token(rest);
        } else {
            sink.warn(
                line_num,
                "malformed-xref",
                format!("Malformed record id {:?}; treating it as a tag", token),
            );
        }
    }

    if token.is_empty() {
        sink.warn(line_num, "missing-tag", "Line has a level but no tag; skipped");
        return Ok(None);
    }

    // Only the single separating space is consumed; the value keeps any
    // further spacing, which is significant for round-trip.
    let value = if rest.is_empty() {
        None
    } else {
        Some(rest.to_string())
    };

    Ok(Some(LogicalLine {
        level,
        xref,
        tag: token.to_string(),
        value,
        line_num,
    }))
}

/// Split off the first space-delimited token. The remainder keeps everything
/// after one separating space.
fn split_token(s: &str) -> (&str, &str) {
    match s.find(' ') {
        Some(pos) => (&s[..pos], &s[pos + 1..]),
        None => (s, ""),
    }
}
