//! # Layout Calculator
//!
//! Assigns canvas coordinates to every tree node with a recursive pre-order
//! walk. Positions are a presentation cache: they are recomputed from
//! scratch after every structural change and carry no semantic weight.
//!
//! ## Geometry
//!
//! Children are spread horizontally under their parent with spacing
//! `max(MIN_CHILD_SPACING, BASE_CHILD_SPACING / 2^level)` — the spread
//! shrinks geometrically with depth but never below the floor, so siblings
//! at any depth stay visually distinct. Each level sits
//! `LEVEL_VERTICAL_SPACING` below the previous one, and a child row is
//! centered under its parent:
//!
//! ```text
//!                   (x, y)
//!                 ┌───────┐
//!                 │ parent│
//!                 └───────┘
//!        ┌────────┬───┴────┬────────┐
//!     child0   child1   child2   child3
//!     start_x = x - (n-1) * spacing / 2
//! ```
//!
//! Any other non-overlapping heuristic would serve; consumers must not rely
//! on exact coordinates, only on distinct positions per node.

use eyre::Result;

use crate::config::{
    BASE_CHILD_SPACING, LEVEL_VERTICAL_SPACING, MIN_CHILD_SPACING, ROOT_X, ROOT_Y,
};
use crate::tree::{BTree, NodeId};

/// Canvas position of one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodePos {
    pub x: f32,
    pub y: f32,
    pub level: u32,
}

/// Whole-tree position table, indexed by [`NodeId`].
#[derive(Debug, Clone, Default)]
pub struct Layout {
    positions: Vec<Option<NodePos>>,
}

impl Layout {
    /// Recompute every node position for the tree's current shape.
    pub fn compute(tree: &BTree) -> Result<Self> {
        let mut layout = Self {
            positions: vec![None; tree.node_count()],
        };
        if let Some(root) = tree.root() {
            layout.place(tree, root, ROOT_X, ROOT_Y, 0)?;
        }
        Ok(layout)
    }

    fn place(&mut self, tree: &BTree, node_id: NodeId, x: f32, y: f32, level: u32) -> Result<()> {
        self.positions[node_id.index()] = Some(NodePos { x, y, level });

        let node = tree.node(node_id)?;
        if node.is_leaf() {
            return Ok(());
        }

        let spacing = (BASE_CHILD_SPACING / 2f32.powi(level as i32)).max(MIN_CHILD_SPACING);
        let total_width = spacing * (node.children.len() - 1) as f32;
        let start_x = x - total_width / 2.0;

        for (i, &child) in node.children.iter().enumerate() {
            self.place(
                tree,
                child,
                start_x + spacing * i as f32,
                y + LEVEL_VERTICAL_SPACING,
                level + 1,
            )?;
        }
        Ok(())
    }

    pub fn get(&self, id: NodeId) -> Option<NodePos> {
        self.positions.get(id.index()).copied().flatten()
    }

    /// Iterate over positioned nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, NodePos)> + '_ {
        self.positions
            .iter()
            .enumerate()
            .filter_map(|(i, pos)| pos.map(|p| (NodeId(i as u32), p)))
    }

    pub fn is_empty(&self) -> bool {
        self.positions.iter().all(|p| p.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> BTree {
        let mut tree = BTree::new(3).unwrap();
        for key in [10, 20, 5, 6, 12, 30, 7, 17] {
            tree.insert(key).unwrap();
        }
        tree
    }

    #[test]
    fn empty_tree_produces_empty_layout() {
        let tree = BTree::new(3).unwrap();
        let layout = Layout::compute(&tree).unwrap();
        assert!(layout.is_empty());
    }

    #[test]
    fn root_sits_at_the_canvas_anchor() {
        let mut tree = BTree::new(3).unwrap();
        tree.insert(10).unwrap();
        let layout = Layout::compute(&tree).unwrap();
        let pos = layout.get(tree.root().unwrap()).unwrap();
        assert_eq!(pos.x, ROOT_X);
        assert_eq!(pos.y, ROOT_Y);
        assert_eq!(pos.level, 0);
    }

    #[test]
    fn children_are_centered_under_the_parent() {
        let tree = sample_tree();
        let layout = Layout::compute(&tree).unwrap();

        let root = tree.node(tree.root().unwrap()).unwrap();
        assert_eq!(root.children.len(), 2);
        let left = layout.get(root.children[0]).unwrap();
        let right = layout.get(root.children[1]).unwrap();

        // Level-0 spacing is BASE_CHILD_SPACING, row centered on the root.
        assert_eq!(right.x - left.x, BASE_CHILD_SPACING);
        assert!(((left.x + right.x) / 2.0 - ROOT_X).abs() < f32::EPSILON);
        assert_eq!(left.y, ROOT_Y + LEVEL_VERTICAL_SPACING);
        assert_eq!(left.level, 1);
    }

    #[test]
    fn spacing_never_drops_below_the_floor() {
        // Enough keys for three levels at degree 2.
        let mut tree = BTree::new(2).unwrap();
        for key in 1..=40 {
            tree.insert(key).unwrap();
        }
        let layout = Layout::compute(&tree).unwrap();

        // Siblings on the deepest internal row are at least the floor apart.
        let mut by_level: std::collections::BTreeMap<u32, Vec<f32>> = Default::default();
        for (_, pos) in layout.iter() {
            by_level.entry(pos.level).or_default().push(pos.x);
        }
        let deepest = *by_level.keys().last().unwrap();
        assert!(deepest >= 2);

        // Spacing formula at depth >= 1 for BASE 200 floors at 120.
        let spacing =
            (BASE_CHILD_SPACING / 2f32.powi(deepest as i32 - 1)).max(MIN_CHILD_SPACING);
        assert_eq!(spacing, MIN_CHILD_SPACING);
    }

    #[test]
    fn every_node_gets_a_position() {
        let tree = sample_tree();
        let layout = Layout::compute(&tree).unwrap();
        assert_eq!(layout.iter().count(), tree.node_count());
    }
}
