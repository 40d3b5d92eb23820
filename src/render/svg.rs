//! SVG renderer: snapshot + layout in, standalone `<svg>` document out.

use eyre::{ensure, Result};
use std::fmt::Write;

use crate::config::{KEY_CELL_WIDTH, NODE_HEIGHT, SVG_MARGIN};
use crate::layout::Layout;
use crate::tree::{BTree, NodeId};

/// Pixel width of a node's rectangle. A keyless node (never rendered in a
/// settled tree, but possible mid-debugging) still gets one cell.
fn node_width(key_count: usize) -> f32 {
    KEY_CELL_WIDTH * key_count.max(1) as f32
}

/// Render the tree as a standalone SVG document.
///
/// The viewport is fitted to the layout's bounding box plus a margin, so the
/// output is self-contained regardless of tree size.
pub fn render_svg(tree: &BTree, layout: &Layout) -> Result<String> {
    let mut out = String::new();

    if tree.is_empty() {
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="80">"#);
        out.push('\n');
        out.push_str(r#"  <text x="100" y="44" text-anchor="middle">empty tree</text>"#);
        out.push('\n');
        out.push_str("</svg>\n");
        return Ok(out);
    }

    // Pass 1: bounding box over node rectangles.
    let mut min_x = f32::MAX;
    let mut max_x = f32::MIN;
    let mut max_y = f32::MIN;
    for (id, pos) in layout.iter() {
        let half = node_width(tree.node(id)?.keys.len()) / 2.0;
        min_x = min_x.min(pos.x - half);
        max_x = max_x.max(pos.x + half);
        max_y = max_y.max(pos.y + NODE_HEIGHT);
    }
    ensure!(min_x <= max_x, "layout has no positioned nodes for a non-empty tree");

    let dx = SVG_MARGIN - min_x;
    let width = max_x - min_x + 2.0 * SVG_MARGIN;
    let height = max_y + SVG_MARGIN;

    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width:.0}" height="{height:.0}">"#
    );

    // Connectors first so rectangles draw over the line ends.
    if let Some(root) = tree.root() {
        render_connectors(tree, layout, root, dx, &mut out)?;
    }
    for (id, pos) in layout.iter() {
        let node = tree.node(id)?;
        let w = node_width(node.keys.len());
        let left = pos.x + dx - w / 2.0;

        let _ = writeln!(
            out,
            r##"  <rect x="{left:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" rx="4" fill="#ffffff" stroke="#334155"/>"##,
            y = pos.y,
            h = NODE_HEIGHT,
        );
        for (i, key) in node.keys.iter().enumerate() {
            if i > 0 {
                let sep_x = left + KEY_CELL_WIDTH * i as f32;
                let _ = writeln!(
                    out,
                    r##"  <line x1="{sep_x:.1}" y1="{y:.1}" x2="{sep_x:.1}" y2="{y2:.1}" stroke="#334155"/>"##,
                    y = pos.y,
                    y2 = pos.y + NODE_HEIGHT,
                );
            }
            let cx = left + KEY_CELL_WIDTH * (i as f32 + 0.5);
            let _ = writeln!(
                out,
                r#"  <text x="{cx:.1}" y="{cy:.1}" text-anchor="middle" font-size="13">{key}</text>"#,
                cy = pos.y + NODE_HEIGHT / 2.0 + 4.0,
            );
        }
    }

    out.push_str("</svg>\n");
    Ok(out)
}

fn render_connectors(
    tree: &BTree,
    layout: &Layout,
    node_id: NodeId,
    dx: f32,
    out: &mut String,
) -> Result<()> {
    let node = tree.node(node_id)?;
    let Some(pos) = layout.get(node_id) else {
        return Ok(());
    };
    for &child in &node.children {
        if let Some(child_pos) = layout.get(child) {
            let _ = writeln!(
                out,
                r##"  <line x1="{x1:.1}" y1="{y1:.1}" x2="{x2:.1}" y2="{y2:.1}" stroke="#94a3b8"/>"##,
                x1 = pos.x + dx,
                y1 = pos.y + NODE_HEIGHT,
                x2 = child_pos.x + dx,
                y2 = child_pos.y,
            );
        }
        render_connectors(tree, layout, child, dx, out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> (BTree, Layout) {
        let mut tree = BTree::new(3).unwrap();
        for key in [10, 20, 5, 6, 12, 30, 7, 17] {
            tree.insert(key).unwrap();
        }
        let layout = Layout::compute(&tree).unwrap();
        (tree, layout)
    }

    #[test]
    fn empty_tree_renders_a_placeholder() {
        let tree = BTree::new(3).unwrap();
        let layout = Layout::compute(&tree).unwrap();
        let svg = render_svg(&tree, &layout).unwrap();
        assert!(svg.contains("empty tree"));
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn one_rect_per_node_one_connector_per_edge() {
        let (tree, layout) = sample_tree();
        let svg = render_svg(&tree, &layout).unwrap();

        let rects = svg.matches("<rect").count();
        assert_eq!(rects, tree.node_count());

        // Every node except the root hangs from exactly one connector.
        let connectors = svg
            .matches(r##"stroke="#94a3b8""##)
            .count();
        assert_eq!(connectors, tree.node_count() - 1);
    }

    #[test]
    fn every_key_appears_as_text() {
        let (tree, layout) = sample_tree();
        let svg = render_svg(&tree, &layout).unwrap();
        for key in [5, 6, 7, 10, 12, 17, 20, 30] {
            assert!(svg.contains(&format!(">{key}</text>")), "missing key {key}");
        }
    }
}
