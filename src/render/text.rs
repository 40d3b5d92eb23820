//! Terminal renderer: one line per tree level, nodes bracketed.

use eyre::Result;
use std::fmt::Write;

use crate::tree::{BTree, NodeId};

/// Render the tree as a per-level listing:
///
/// ```text
/// level 0:  [10]
/// level 1:  [5 6 7]  [12 17 20 30]
/// ```
pub fn render_text(tree: &BTree) -> Result<String> {
    let Some(root) = tree.root() else {
        return Ok("(empty tree)\n".to_string());
    };

    let mut out = String::new();
    let mut level: Vec<NodeId> = vec![root];
    let mut depth = 0;

    while !level.is_empty() {
        let _ = write!(out, "level {depth}: ");
        let mut next = Vec::new();
        for &id in &level {
            let node = tree.node(id)?;
            let keys: Vec<String> = node.keys.iter().map(|k| k.to_string()).collect();
            let _ = write!(out, " [{}]", keys.join(" "));
            next.extend(node.children.iter().copied());
        }
        out.push('\n');
        level = next;
        depth += 1;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_says_so() {
        let tree = BTree::new(3).unwrap();
        assert_eq!(render_text(&tree).unwrap(), "(empty tree)\n");
    }

    #[test]
    fn levels_appear_top_down() {
        let mut tree = BTree::new(3).unwrap();
        for key in [10, 20, 5, 6, 12, 30, 7, 17] {
            tree.insert(key).unwrap();
        }
        let text = render_text(&tree).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "level 0:  [10]");
        assert_eq!(lines[1], "level 1:  [5 6 7] [12 17 20 30]");
    }
}
