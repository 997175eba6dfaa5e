//! Depth-bounded flattening of the navigation tree into sidebar rows

use super::tree::{Icon, NavTree, NodeId, NodeKind};

pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Persisted identity of an expandable node
pub fn section_key(title: &str, depth: usize) -> String {
    format!("{title}-{depth}")
}

/// Leaf activity: the root matches only itself, everything else by prefix
pub fn is_active(node_path: &str, current_path: &str) -> bool {
    if node_path == "/" {
        return current_path == "/";
    }
    current_path.starts_with(node_path)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    Section { key: String, expanded: bool },
    Link { path: String, active: bool },
    Header,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRow {
    pub node: NodeId,
    pub depth: usize,
    pub title: String,
    pub icon: Option<Icon>,
    pub kind: RowKind,
}

impl MenuRow {
    pub fn is_active(&self) -> bool {
        matches!(self.kind, RowKind::Link { active: true, .. })
    }

    pub fn section_key(&self) -> Option<&str> {
        match &self.kind {
            RowKind::Section { key, .. } => Some(key),
            _ => None,
        }
    }

    pub fn path(&self) -> Option<&str> {
        match &self.kind {
            RowKind::Link { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Walks `tree` in display order. Nodes at `max_depth` or deeper never
/// expand; they render as a link when they carry a path, else as a header.
pub fn flatten<F>(tree: &NavTree, is_expanded: F, current_path: &str, max_depth: usize) -> Vec<MenuRow>
where
    F: Fn(&str) -> bool,
{
    let mut rows = Vec::new();
    let mut stack: Vec<(NodeId, usize)> = tree.roots().iter().rev().map(|id| (*id, 0)).collect();

    while let Some((id, depth)) = stack.pop() {
        let Some(node) = tree.get(id) else {
            continue;
        };

        let nestable = node.kind() == NodeKind::Section && depth < max_depth;
        let kind = if nestable {
            let key = section_key(&node.title, depth);
            let expanded = is_expanded(&key);
            if expanded {
                stack.extend(node.children.iter().rev().map(|child| (*child, depth + 1)));
            }
            RowKind::Section { key, expanded }
        } else if let Some(path) = node.path.as_deref() {
            RowKind::Link {
                path: path.to_string(),
                active: is_active(path, current_path),
            }
        } else {
            RowKind::Header
        };

        rows.push(MenuRow {
            node: id,
            depth,
            title: node.title.clone(),
            icon: node.icon,
            kind,
        });
    }

    rows
}
