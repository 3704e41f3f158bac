//! Rendering exports for cause trees.
//!
//! Provides the textual formats downstream surfaces render from:
//! - DOT/Graphviz, with the root at one visual extreme
//! - a plain-text report (heading, category legend, nodes, links)
//! - JSON for interchange
//!
//! # Example
//!
//! ```rust,ignore
//! use rca_core::CauseTree;
//!
//! let tree = CauseTree::new("Tank overflowed");
//!
//! // Render with Graphviz: dot -Tpng tree.dot -o tree.png
//! let dot = tree.to_dot();
//!
//! // Plain-text summary for a report or ticket
//! let report = tree.to_report();
//! ```

use std::collections::HashMap;

use crate::error::Result;
use crate::tree::cause_tree::CauseTree;
use crate::tree::types::Category;

/// DOT export configuration.
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Graph direction: "RL" keeps the root at the right edge, the
    /// traditional cause-tree orientation. "TB", "LR", etc. also work.
    pub rankdir: String,
    /// Whether to use filled node style.
    pub filled_nodes: bool,
    /// Font name for labels.
    pub font_name: String,
    /// Font size for labels.
    pub font_size: u32,
    /// Node fill colors by category.
    pub category_colors: HashMap<Category, String>,
    /// Fill color for uncategorized nodes.
    pub uncategorized_color: String,
}

impl Default for DotConfig {
    fn default() -> Self {
        let mut category_colors = HashMap::new();
        category_colors.insert(Category::Organizational, "#87CEEB".to_string()); // Sky blue
        category_colors.insert(Category::Human, "#FFD700".to_string()); // Gold
        category_colors.insert(Category::Technical, "#DDA0DD".to_string()); // Plum

        Self {
            rankdir: "RL".to_string(),
            filled_nodes: true,
            font_name: "Helvetica".to_string(),
            font_size: 12,
            category_colors,
            uncategorized_color: "#F5F5F5".to_string(),
        }
    }
}

impl DotConfig {
    /// Create a top-down layout.
    pub fn top_down() -> Self {
        Self {
            rankdir: "TB".to_string(),
            ..Default::default()
        }
    }
}

impl CauseTree {
    /// Export to DOT/Graphviz format.
    ///
    /// Produces a DOT language representation that can be rendered with
    /// Graphviz tools like `dot` or `neato`. Nodes and edges appear in
    /// insertion order, so output for a given tree is deterministic.
    pub fn to_dot(&self) -> String {
        self.to_dot_with_config(&DotConfig::default())
    }

    /// Export to DOT format with custom configuration.
    pub fn to_dot_with_config(&self, config: &DotConfig) -> String {
        let mut dot = String::new();

        // Graph header
        dot.push_str("digraph CauseTree {\n");
        dot.push_str(&format!("    rankdir={};\n", config.rankdir));
        dot.push_str(&format!(
            "    node [shape=box, fontname=\"{}\", fontsize={}",
            config.font_name, config.font_size
        ));
        if config.filled_nodes {
            dot.push_str(", style=filled");
        }
        dot.push_str("];\n");
        dot.push('\n');

        // Nodes
        for node in self.list_nodes() {
            let node_id = format!("n{}", node.id.0.as_simple());
            let label = escape_dot_string(&truncate_label(&node.label, 60));
            let color = match node.category {
                Some(category) => config
                    .category_colors
                    .get(&category)
                    .map(|s| s.as_str())
                    .unwrap_or("#FFFFFF"),
                None => config.uncategorized_color.as_str(),
            };

            // The root gets a heavier outline
            let extra = if &node.id == self.root_id() {
                ", penwidth=3"
            } else {
                ""
            };

            dot.push_str(&format!(
                "    {} [label=\"{}\", fillcolor=\"{}\"{}];\n",
                node_id, label, color, extra
            ));
        }

        dot.push('\n');

        // Edges
        for edge in self.list_edges() {
            let parent_id = format!("n{}", edge.parent.0.as_simple());
            let child_id = format!("n{}", edge.child.0.as_simple());
            dot.push_str(&format!("    {} -> {};\n", parent_id, child_id));
        }

        dot.push_str("}\n");
        dot
    }

    /// Render the tree as a plain-text report.
    ///
    /// The report carries the root label as its heading, a legend of the
    /// three categories, the node list in insertion order (category tag
    /// in brackets where set), and a `parent -> child` link list in edge
    /// insertion order.
    pub fn to_report(&self) -> String {
        let heading = self
            .root()
            .map(|n| n.label.as_str())
            .unwrap_or("(untitled)");

        let mut report = String::new();
        report.push_str(heading);
        report.push('\n');
        report.push_str(&"=".repeat(heading.chars().count()));
        report.push_str("\n\n");

        report.push_str("Categories:\n");
        for category in Category::ALL {
            report.push_str(&format!("  {}: {}\n", category, category.description()));
        }
        report.push_str("  (unset): not yet categorized\n\n");

        report.push_str("Nodes:\n");
        for node in self.list_nodes() {
            match node.category {
                Some(category) => {
                    report.push_str(&format!("  - {} [{}]\n", node.label, category))
                }
                None => report.push_str(&format!("  - {}\n", node.label)),
            }
        }
        report.push('\n');

        report.push_str("Links:\n");
        for edge in self.list_edges() {
            let parent = self
                .get_node(&edge.parent)
                .map(|n| n.label.as_str())
                .unwrap_or("?");
            let child = self
                .get_node(&edge.child)
                .map(|n| n.label.as_str())
                .unwrap_or("?");
            report.push_str(&format!("  {} -> {}\n", parent, child));
        }

        report
    }

    /// Export as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// Helper functions

fn truncate_label(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

fn escape_dot_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
