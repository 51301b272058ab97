//! Structural mapping from tree nodes to typed records
//!
//!     Mapping is a recursive descent over the tree with a tag-dispatch table
//!     per record context, expressed as an exhaustive `match` whose arms are
//!     the closed set of handler shapes: set a scalar, append to a list,
//!     recurse into a sub-mapper, or resolve a pointer. Every `match` carries
//!     the same fallthrough arm: an unrecognized tag is appended, with its
//!     whole subtree, to the enclosing record's custom side list — nothing is
//!     ever dropped.
//!
//! Pointers
//!
//!     Pointer fields are resolved against the [XrefIndex], which is complete
//!     before mapping begins, so declaration order in the file is irrelevant.
//!     An id that never gets defined yields an absent field plus one warning;
//!     partial exports reference missing records routinely and must load.
//!
//! Multiplicity
//!
//!     Singular fields keep the last occurrence and warn when a second one is
//!     seen; list fields append in encounter order.
//!
//! Dialect gating
//!
//!     The mapper is parameterized by the detected [Dialect]. Constructs that
//!     exist only in 5.5.1 are loaded under a declared 5.5 anyway, each with
//!     one warning that re-serialization cannot downgrade them without
//!     information loss (context-free tags via the [dialect] table,
//!     context-dependent ones via [Mapper::warn_551] at the dispatch site).

mod family;
mod header;
mod individual;
mod records;
mod shared;

use super::diagnostics::DiagnosticSink;
use super::dialect::{self, Dialect};
use super::model::{CustomTag, Gedcom, Xref};
use super::parsing::{GedTree, NodeId, TreeNode};
use super::xref::{is_pointer, XrefIndex};

/// Map the whole tree into the typed record graph.
pub fn map_tree(tree: &GedTree, index: &XrefIndex, sink: &mut DiagnosticSink) -> Gedcom {
    let dialect = dialect::detect(tree, sink);
    log::debug!("mapping records under dialect {}", dialect.as_str());
    Mapper {
        tree,
        index,
        dialect,
        sink,
    }
    .map()
}

/// Shared state for one mapping pass. The tree and index are immutable by the
/// time mapping starts; only the sink accumulates.
pub(crate) struct Mapper<'a> {
    pub(crate) tree: &'a GedTree,
    pub(crate) index: &'a XrefIndex,
    pub(crate) dialect: Dialect,
    pub(crate) sink: &'a mut DiagnosticSink,
}

impl<'a> Mapper<'a> {
    fn map(&mut self) -> Gedcom {
        let mut gedcom = Gedcom::default();
        let mut saw_header = false;
        let mut saw_trailer = false;

        let top_level: Vec<NodeId> = self.tree.children(self.tree.root()).collect();
        for id in top_level {
            let node = self.node(id);
            match node.tag.as_str() {
                "HEAD" => {
                    gedcom.header = self.map_header(id);
                    saw_header = true;
                }
                "TRLR" => saw_trailer = true,
                "INDI" => self.insert_individual(&mut gedcom, id),
                "FAM" => self.insert_family(&mut gedcom, id),
                "SOUR" => self.insert_source(&mut gedcom, id),
                "SUBM" => self.insert_submitter(&mut gedcom, id),
                "NOTE" => self.insert_note_record(&mut gedcom, id),
                _ => gedcom.custom.push(self.custom_tag(id)),
            }
        }

        if !saw_header {
            self.sink
                .warn(None, "missing-header", "File has no HEAD record");
        }
        if !saw_trailer {
            self.sink
                .warn(None, "missing-trailer", "File has no TRLR record");
        }
        gedcom
    }

    pub(crate) fn node(&self, id: NodeId) -> &'a TreeNode {
        self.tree.node(id)
    }

    pub(crate) fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.tree.children(id).collect()
    }

    /// The record id a top-level record must carry to be owned by the root
    /// aggregate. Records without one are preserved as custom subtrees.
    pub(crate) fn record_xref(
        &mut self,
        gedcom: &mut Gedcom,
        id: NodeId,
        what: &str,
    ) -> Option<Xref> {
        let node = self.node(id);
        match &node.xref {
            Some(xref) => Some(Xref::from(xref.as_str())),
            None => {
                self.sink.warn(
                    node.line_num,
                    "missing-record-id",
                    format!("{} record has no id and cannot be referenced; kept as custom data", what),
                );
                gedcom.custom.push(self.custom_tag(id));
                None
            }
        }
    }

    /// Set a singular scalar field from a node's (already folded) value.
    /// A second occurrence keeps the last value and warns. Children the
    /// grammar does not put under a scalar line are swept into `custom`.
    pub(crate) fn scalar(
        &mut self,
        id: NodeId,
        what: &str,
        slot: &mut Option<String>,
        custom: &mut Vec<CustomTag>,
    ) {
        let node = self.node(id);
        if slot.is_some() {
            self.warn_multiplicity(node.line_num, what);
        }
        *slot = node.value.clone();
        self.sweep_children(id, custom);
    }

    /// Append a node's value to a list field, in encounter order.
    pub(crate) fn list_value(
        &mut self,
        id: NodeId,
        list: &mut Vec<String>,
        custom: &mut Vec<CustomTag>,
    ) {
        if let Some(value) = self.node(id).value.clone() {
            list.push(value);
        }
        self.sweep_children(id, custom);
    }

    pub(crate) fn warn_multiplicity(&mut self, line: usize, what: &str) {
        self.sink.warn(
            line,
            "multiplicity",
            format!("More than one {} found; keeping the last", what),
        );
    }

    /// Resolve a pointer-valued node against the xref index.
    ///
    /// Both failure shapes are non-fatal: a value that is not pointer-shaped
    /// and an id that is never defined each warn and yield `None`.
    pub(crate) fn pointer(&mut self, id: NodeId, what: &str) -> Option<Xref> {
        let node = self.node(id);
        let value = match node.value.as_deref() {
            Some(v) if is_pointer(v) => v,
            other => {
                self.sink.warn(
                    node.line_num,
                    "malformed-pointer",
                    format!(
                        "{} should be a record pointer but was {:?}",
                        what,
                        other.unwrap_or("")
                    ),
                );
                return None;
            }
        };
        if self.index.resolve(value).is_none() {
            self.sink.warn(
                node.line_num,
                "unresolved-xref",
                format!("{} references {} which is not defined in this file", what, value),
            );
            return None;
        }
        Some(Xref::from(value))
    }

    /// Record a 5.5.1-only construct seen under a declared 5.5 dialect.
    /// Worded so callers know the data was loaded, not rejected.
    pub(crate) fn warn_551(&mut self, line: usize, feature: &str) {
        if self.dialect == Dialect::V5_5 {
            self.sink.warn(
                line,
                "dialect-551",
                format!(
                    "GEDCOM version is 5.5 but {} was specified, which is a GEDCOM 5.5.1 \
                     feature. Data loaded but cannot be re-written without information loss",
                    feature
                ),
            );
        }
    }

    /// Dialect-gate a context-free 5.5.1-only tag.
    pub(crate) fn check_551_tag(&mut self, id: NodeId) {
        let node = self.node(id);
        if let Some(feature) = dialect::feature_551(&node.tag) {
            self.warn_551(node.line_num, feature);
        }
    }

    /// Capture a subtree verbatim as a custom tag, preserving order and
    /// nesting. This is the fallthrough of every dispatch table.
    pub(crate) fn custom_tag(&self, id: NodeId) -> CustomTag {
        let node = self.node(id);
        CustomTag {
            tag: node.tag.clone(),
            xref: node.xref.clone(),
            value: node.value.clone(),
            children: self
                .tree
                .children(id)
                .map(|child| self.custom_tag(child))
                .collect(),
        }
    }

    /// Sweep all children of a scalar leaf into the enclosing custom list.
    /// Scalar lines have no recognized substructure, so anything beneath one
    /// is preserved rather than interpreted.
    pub(crate) fn sweep_children(&mut self, id: NodeId, custom: &mut Vec<CustomTag>) {
        for child in self.children(id) {
            custom.push(self.custom_tag(child));
        }
    }
}
