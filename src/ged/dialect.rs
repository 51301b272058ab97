//! GEDCOM dialect detection and version gating
//!
//!     The format has two mutually back-incompatible minor versions in real
//!     circulation, 5.5 and 5.5.1. Several constructs (typed contact fields,
//!     phonetic/romanized name variants, place coordinates, restriction
//!     notices on events) exist only in 5.5.1. The mapper never rejects such
//!     data under a declared 5.5 — it loads it and records a warning that
//!     re-serialization cannot downgrade it without information loss.
//!
//!     Gating is centralized: context-free 5.5.1 tags live in the table below,
//!     and the handful of context-dependent cases (RESN on events, RELI on
//!     family events, STAT on child-to-family links) call
//!     [`Mapper::warn_551`](super::building) with an explicit description.

use super::diagnostics::DiagnosticSink;
use super::parsing::GedTree;

/// Declared format dialect, detected from `HEAD.GEDC.VERS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    V5_5,
    #[default]
    V5_5_1,
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::V5_5 => "5.5",
            Dialect::V5_5_1 => "5.5.1",
        }
    }
}

/// Tags that are 5.5.1-only in every context they can appear in.
/// Context-dependent gating is handled at the dispatch site.
const V551_ONLY_TAGS: &[(&str, &str)] = &[
    ("EMAIL", "email address"),
    ("FAX", "fax number"),
    ("WWW", "web address"),
    ("FONE", "phonetic name variation"),
    ("ROMN", "romanized name variation"),
    ("MAP", "place coordinates"),
    ("LATI", "place latitude"),
    ("LONG", "place longitude"),
    ("FACT", "attribute fact"),
];

/// Description of a context-free 5.5.1-only construct, if `tag` is one.
pub fn feature_551(tag: &str) -> Option<&'static str> {
    V551_ONLY_TAGS
        .iter()
        .find(|(t, _)| *t == tag)
        .map(|(_, desc)| *desc)
}

/// Detect the declared dialect from the header subtree.
///
/// Absent or unrecognized version strings warn and default to 5.5.1, the
/// later and more permissive dialect.
pub fn detect(tree: &GedTree, sink: &mut DiagnosticSink) -> Dialect {
    let version = find_declared_version(tree);
    match version.as_deref() {
        Some("5.5") => Dialect::V5_5,
        Some("5.5.1") => Dialect::V5_5_1,
        Some(other) => {
            sink.warn(
                None,
                "unrecognized-version",
                format!(
                    "Unrecognized GEDCOM version {:?}; assuming 5.5.1",
                    other
                ),
            );
            Dialect::V5_5_1
        }
        None => {
            sink.warn(
                None,
                "missing-version",
                "Header does not declare a GEDCOM version; assuming 5.5.1",
            );
            Dialect::V5_5_1
        }
    }
}

fn find_declared_version(tree: &GedTree) -> Option<String> {
    let head = tree
        .children(tree.root())
        .find(|&id| tree.node(id).tag == "HEAD")?;
    let gedc = tree.children(head).find(|&id| tree.node(id).tag == "GEDC")?;
    let vers = tree.children(gedc).find(|&id| tree.node(id).tag == "VERS")?;
    tree.node(vers).value.as_ref().map(|v| v.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ged::lexing::lex;
    use crate::ged::parsing::build_tree;
    use rstest::rstest;

    fn detect_from(source: &str) -> (Dialect, Vec<crate::ged::diagnostics::Diagnostic>) {
        let mut sink = DiagnosticSink::new();
        let lines = lex(source, &mut sink).expect("lex failed");
        let tree = build_tree(&lines, &mut sink);
        let dialect = detect(&tree, &mut sink);
        (dialect, sink.into_diagnostics())
    }

    #[rstest]
    #[case("5.5", Dialect::V5_5)]
    #[case("5.5.1", Dialect::V5_5_1)]
    fn test_declared_versions(#[case] version: &str, #[case] expected: Dialect) {
        let source = format!("0 HEAD\n1 GEDC\n2 VERS {}\n0 TRLR\n", version);
        let (dialect, diags) = detect_from(&source);
        assert_eq!(dialect, expected);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_unrecognized_version_defaults_with_warning() {
        let (dialect, diags) = detect_from("0 HEAD\n1 GEDC\n2 VERS 7.0\n0 TRLR\n");
        assert_eq!(dialect, Dialect::V5_5_1);
        assert!(diags
            .iter()
            .any(|d| d.code.as_deref() == Some("unrecognized-version")));
    }

    #[test]
    fn test_missing_version_defaults_with_warning() {
        let (dialect, diags) = detect_from("0 HEAD\n1 CHAR UTF-8\n0 TRLR\n");
        assert_eq!(dialect, Dialect::V5_5_1);
        assert!(diags
            .iter()
            .any(|d| d.code.as_deref() == Some("missing-version")));
    }

    #[test]
    fn test_551_table() {
        assert_eq!(feature_551("EMAIL"), Some("email address"));
        assert_eq!(feature_551("WWW"), Some("web address"));
        assert_eq!(feature_551("NAME"), None);
    }
}
