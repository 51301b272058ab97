//! Cross-reference index
//!
//!     A single pre-order pass over the tree registers every definitional
//!     record id against the node that defines it. The index is complete
//!     before any pointer is resolved, which is what lets a family reference
//!     an individual declared later in the file.
//!
//!     Duplicate ids are last-wins with a warning; pointer values referencing
//!     ids that never get defined are left to the mapper, which reports them
//!     per use site. Index-building diagnostics therefore always precede
//!     mapping diagnostics in the output list.

use super::diagnostics::DiagnosticSink;
use super::parsing::{GedTree, NodeId};
use std::collections::HashMap;

/// Immutable map from record id (with `@` delimiters) to defining node.
#[derive(Debug, Default)]
pub struct XrefIndex {
    map: HashMap<String, NodeId>,
}

impl XrefIndex {
    /// Build the index in one pre-order traversal.
    pub fn build(tree: &GedTree, sink: &mut DiagnosticSink) -> XrefIndex {
        let mut map: HashMap<String, NodeId> = HashMap::new();
        for id in tree.iter_preorder() {
            let node = tree.node(id);
            if let Some(xref) = &node.xref {
                if let Some(previous) = map.insert(xref.clone(), id) {
                    sink.warn(
                        node.line_num,
                        "duplicate-xref",
                        format!(
                            "Record id {} was already defined on line {}; the later definition wins",
                            xref,
                            tree.node(previous).line_num
                        ),
                    );
                }
            }
        }
        XrefIndex { map }
    }

    /// Look up the node defining `xref` (value includes its `@` delimiters).
    pub fn resolve(&self, xref: &str) -> Option<NodeId> {
        self.map.get(xref).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// True if a line value has the bracketed-id-reference shape (`@I1@`).
pub fn is_pointer(value: &str) -> bool {
    value.len() > 2 && value.starts_with('@') && value.ends_with('@') && !value.starts_with("@@")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ged::lexing::lex;
    use crate::ged::parsing::build_tree;

    fn index_of(source: &str) -> (GedTree, XrefIndex, Vec<crate::ged::diagnostics::Diagnostic>) {
        let mut sink = DiagnosticSink::new();
        let lines = lex(source, &mut sink).expect("lex failed");
        let tree = build_tree(&lines, &mut sink);
        let index = XrefIndex::build(&tree, &mut sink);
        (tree, index, sink.into_diagnostics())
    }

    #[test]
    fn test_registers_every_definition() {
        let (tree, index, diags) =
            index_of("0 HEAD\n0 @I1@ INDI\n0 @F1@ FAM\n0 @S1@ SOUR\n0 TRLR\n");
        assert_eq!(index.len(), 3);
        let indi = index.resolve("@I1@").unwrap();
        assert_eq!(tree.node(indi).tag, "INDI");
        assert!(diags.is_empty());
    }

    #[test]
    fn test_unknown_id_resolves_to_none() {
        let (_, index, _) = index_of("0 @I1@ INDI\n");
        assert_eq!(index.resolve("@I2@"), None);
    }

    #[test]
    fn test_duplicate_id_last_wins_with_warning() {
        let (tree, index, diags) =
            index_of("0 @I1@ INDI\n1 SEX M\n0 @I1@ INDI\n1 SEX F\n");
        let winner = index.resolve("@I1@").unwrap();
        assert_eq!(tree.node(winner).line_num, 3);
        let dups: Vec<_> = diags
            .iter()
            .filter(|d| d.code.as_deref() == Some("duplicate-xref"))
            .collect();
        assert_eq!(dups.len(), 1);
        assert_eq!(dups[0].line, Some(3));
    }

    #[test]
    fn test_pointer_shape() {
        assert!(is_pointer("@I1@"));
        assert!(is_pointer("@SUBMITTER@"));
        assert!(!is_pointer("plain text"));
        assert!(!is_pointer("@@"));
        assert!(!is_pointer("@unclosed"));
        // An escaped at-sign is not a pointer.
        assert!(!is_pointer("@@1900@"));
    }
}
