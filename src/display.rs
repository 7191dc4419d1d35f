//! Terminal rendering of org charts.

use termtree::Tree;

use crate::errors::TreeResult;
use crate::tree::{NodeId, OrgTree};

impl OrgTree {
    /// Renders the whole chart, or a placeholder for an empty tree.
    /// The result carries no trailing newline.
    pub fn render(&self) -> String {
        match self.root() {
            Some(root) => {
                let rendered = self
                    .render_subtree(root)
                    .expect("root handle is live")
                    .to_string();
                rendered.trim_end().to_string()
            }
            None => "(empty organization)".to_string(),
        }
    }

    /// Builds a [`termtree::Tree`] of `title: name` labels for the subtree
    /// under `top`.
    pub fn render_subtree(&self, top: NodeId) -> TreeResult<Tree<String>> {
        let label = self.employee(top)?.to_string();

        let mut leaves = Vec::new();
        let mut child = self.leftmost_child(top)?;
        while let Some(c) = child {
            leaves.push(self.render_subtree(c)?);
            child = self.right_sibling(c)?;
        }

        Ok(Tree::new(label).with_leaves(leaves))
    }
}
