//! Hierarchical tree building
//!
//!     The level numbers on logical lines encode a tree: a line at level L is a
//!     child of the most recent line at level L-1. The builder keeps a stack of
//!     the currently open node per level and attaches each incoming line under
//!     the stack entry one level up.
//!
//! Recovery
//!
//!     A level may grow by at most one between consecutive lines. A bigger jump
//!     (1 straight to 3) cannot be placed, so it is clamped to previous+1 and
//!     recorded as a structural warning; the file is never abandoned over one
//!     bad line.
//!
//! Continuation folding
//!
//!     `CONC` and `CONT` lines are not structure: they continue the value of
//!     the line above them, without (`CONC`) or with (`CONT`) an inserted line
//!     break. They are folded into the open node they would have attached to
//!     and never become tree nodes themselves, so by the time mapping starts
//!     every node value is fully reassembled. Because a continuation is never
//!     pushed on the open stack, anything nested beneath one re-attaches to the
//!     nearest real ancestor through the ordinary clamping rule.
//!
//!     Nodes live in an arena owned by [GedTree] and refer to each other by
//!     [NodeId]; the parent link is a plain id, so no ownership cycles exist.

use super::diagnostics::DiagnosticSink;
use super::lexing::LogicalLine;

/// Tag that appends to the preceding value without a separator.
pub const TAG_CONC: &str = "CONC";
/// Tag that appends to the preceding value with a line break.
pub const TAG_CONT: &str = "CONT";

/// Index of a node in its [GedTree] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// One structural unit of the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub tag: String,
    /// Reassembled value; continuation merging is complete before mapping
    pub value: Option<String>,
    /// Definitional record id, present only on records that declare one
    pub xref: Option<String>,
    /// 1-based source line number, for diagnostics
    pub line_num: usize,
    pub parent: Option<NodeId>,
    /// Children in source order; order is semantically significant
    pub children: Vec<NodeId>,
}

/// Arena-owned tree over one GEDCOM file. The synthetic root (tag `""`) sits
/// at conceptual level 0 and owns the level-0 records as children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GedTree {
    nodes: Vec<TreeNode>,
}

impl GedTree {
    fn new() -> Self {
        GedTree {
            nodes: vec![TreeNode {
                tag: String::new(),
                value: None,
                xref: None,
                line_num: 0,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut TreeNode {
        &mut self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        // The synthetic root always exists.
        self.nodes.len() <= 1
    }

    /// Children of `id`, in source order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.node(id).children.iter().copied()
    }

    /// Depth-first pre-order walk of the whole tree, root excluded.
    pub fn iter_preorder(&self) -> impl Iterator<Item = NodeId> + '_ {
        let mut pending: Vec<NodeId> = self.node(self.root()).children.iter().rev().copied().collect();
        std::iter::from_fn(move || {
            let next = pending.pop()?;
            pending.extend(self.node(next).children.iter().rev().copied());
            Some(next)
        })
    }

    fn attach(&mut self, parent: NodeId, line: &LogicalLine) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode {
            tag: line.tag.clone(),
            value: line.value.clone(),
            xref: line.xref.clone(),
            line_num: line.line_num,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.node_mut(parent).children.push(id);
        id
    }

    fn fold_value(&mut self, target: NodeId, fragment: Option<&str>, line_break: bool) {
        let fragment = fragment.unwrap_or("");
        let node = self.node_mut(target);
        node.value = Some(match node.value.take() {
            Some(mut existing) => {
                if line_break {
                    existing.push('\n');
                }
                existing.push_str(fragment);
                existing
            }
            None => fragment.to_string(),
        });
    }
}

/// Build the tree from the logical line sequence.
///
/// Infallible by design: every structural problem the lexer let through is
/// recoverable here (clamping), and recovery is recorded in the sink.
pub fn build_tree(lines: &[LogicalLine], sink: &mut DiagnosticSink) -> GedTree {
    let mut tree = GedTree::new();
    // open[d] is the node new level-d lines attach under; open[0] is the root.
    let mut open: Vec<NodeId> = vec![tree.root()];

    for line in lines {
        let mut level = line.level as usize;
        if level >= open.len() {
            let previous = open.len().saturating_sub(2);
            sink.warn(
                line.line_num,
                "level-jump",
                format!(
                    "Level {} follows level {}; treating it as level {}",
                    line.level,
                    previous,
                    open.len() - 1
                ),
            );
            level = open.len() - 1;
        }
        let parent = open[level];

        if line.tag == TAG_CONC || line.tag == TAG_CONT {
            if level == 0 {
                sink.warn(
                    line.line_num,
                    "orphan-continuation",
                    format!("{} line at level 0 has nothing to continue; skipped", line.tag),
                );
                continue;
            }
            tree.fold_value(parent, line.value.as_deref(), line.tag == TAG_CONT);
            continue;
        }

        let id = tree.attach(parent, line);
        open.truncate(level + 1);
        open.push(id);
    }
    tree
}
