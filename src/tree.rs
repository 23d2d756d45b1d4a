//! Tree view nodes and expansion helpers.
//!
//! Nodes are addressed by a [`TreeNodePath`]: the child index at every level, starting from
//! the roots. Paths travel over the wire as comma-separated strings (`"0,2,1"`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{Cell, RowAction};

pub type TreeNodePath = Vec<usize>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TreeNode {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<RowAction>,
    pub cells: BTreeMap<String, Cell>,
    pub children: Vec<TreeNode>,
    pub disabled: bool,
    pub expandable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub value: String,
    /// `None` until [`enrich_with_expanded`] or a toggle assigns a state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expanded: Option<bool>,
}

impl TreeNode {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }

    /// Make this node expandable and attach `children`.
    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.expandable = true;
        self.children = children;
        self
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded == Some(true)
    }

    fn shows_children(&self) -> bool {
        self.expandable && !self.children.is_empty() && self.is_expanded()
    }
}

/// Give every expandable node without a state the state `expand`.
///
/// Nodes that already carry a state keep it. Recursion only follows expandable nodes.
pub fn enrich_with_expanded(node: &mut TreeNode, expand: bool) {
    if !node.expandable {
        return;
    }
    node.expanded.get_or_insert(expand);
    for child in node.children.iter_mut().filter(|c| c.expandable) {
        enrich_with_expanded(child, expand);
    }
}

pub fn node_at_path<'a>(roots: &'a [TreeNode], path: &[usize]) -> Option<&'a TreeNode> {
    let (first, rest) = path.split_first()?;
    rest.iter()
        .try_fold(roots.get(*first)?, |node, &i| node.children.get(i))
}

pub fn node_at_path_mut<'a>(roots: &'a mut [TreeNode], path: &[usize]) -> Option<&'a mut TreeNode> {
    let (first, rest) = path.split_first()?;
    rest.iter()
        .try_fold(roots.get_mut(*first)?, |node, &i| node.children.get_mut(i))
}

/// Open or close the node at `path`.
///
/// Only expandable nodes that already have children toggle. Returns the new state, or `None`
/// when nothing changed.
pub fn toggle_expanded(roots: &mut [TreeNode], path: &[usize]) -> Option<bool> {
    let node = node_at_path_mut(roots, path)?;
    if !node.expandable || node.children.is_empty() {
        return None;
    }
    let expanded = !node.is_expanded();
    node.expanded = Some(expanded);
    Some(expanded)
}

/// Nodes a renderer would draw, in display order, as `(path, depth)`.
pub fn visible_nodes(roots: &[TreeNode]) -> Vec<(TreeNodePath, usize)> {
    fn walk(nodes: &[TreeNode], prefix: &mut TreeNodePath, out: &mut Vec<(TreeNodePath, usize)>) {
        for (i, node) in nodes.iter().enumerate() {
            prefix.push(i);
            out.push((prefix.clone(), prefix.len() - 1));
            if node.shows_children() {
                walk(&node.children, prefix, out);
            }
            prefix.pop();
        }
    }

    let mut out = Vec::new();
    walk(roots, &mut Vec::new(), &mut out);
    out
}

pub fn path_to_string(path: &[usize]) -> String {
    path.iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Parse a comma-separated path. Returns `None` on any malformed index.
pub fn parse_path(text: &str) -> Option<TreeNodePath> {
    if text.trim().is_empty() {
        return Some(Vec::new());
    }
    text.split(',').map(|s| s.trim().parse().ok()).collect()
}
