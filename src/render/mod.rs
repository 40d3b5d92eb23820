//! # Renderers
//!
//! Pure functions from a tree snapshot (plus its layout) to output markup.
//! Rendering is strictly presentational: nothing here inspects or enforces
//! tree invariants, and both renderers take the tree by shared reference.
//!
//! ## SVG
//!
//! One `<rect>` per node sized by its key count, vertical separator lines
//! between key cells, centered key text, and a `<line>` connector from each
//! parent's bottom edge to each child's top edge:
//!
//! ```text
//!              ┌────┐
//!              │ 10 │
//!              └─┬──┘
//!        ┌───────┴────────┐
//!   ┌────┴────┐      ┌────┴─────────┐
//!   │ 5│ 6│ 7 │      │ 12│ 17│20│ 30│
//!   └─────────┘      └──────────────┘
//! ```
//!
//! ## Text
//!
//! A per-level listing for the REPL: each line shows one depth with its
//! nodes bracketed, which is enough to follow splits without a browser.

mod svg;
mod text;

pub use svg::render_svg;
pub use text::render_text;
