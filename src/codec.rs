//! Line-oriented text codec for org charts.
//!
//! One record per line: `<title>, <name>` opens a node, a lone `)` closes it
//! once all of its children have been emitted. The encoding is a pre-order
//! traversal; sibling order is hire order. A leaf still emits its own close
//! marker, so a single-node tree encodes as two lines.

use tracing::instrument;

use crate::errors::{TreeError, TreeResult};
use crate::tree::{NodeId, OrgTree};

/// Splits title from name on a node line. The first occurrence wins, so a
/// title containing `", "` cannot be round-tripped; keeping titles free of
/// the separator is the caller's responsibility.
const SEPARATOR: &str = ", ";

const CLOSE_MARKER: &str = ")";

impl OrgTree {
    /// Encodes the whole tree. An empty tree encodes to an empty string.
    pub fn serialize(&self) -> String {
        match self.root() {
            Some(root) => self
                .serialize_subtree(root)
                .expect("root handle is live"),
            None => String::new(),
        }
    }

    /// Encodes the subtree rooted at `top`.
    #[instrument(level = "debug", skip(self))]
    pub fn serialize_subtree(&self, top: NodeId) -> TreeResult<String> {
        enum Step {
            Enter(NodeId),
            Close,
        }

        let mut out = String::new();
        let mut stack = vec![Step::Enter(top)];
        while let Some(step) = stack.pop() {
            match step {
                Step::Enter(id) => {
                    out.push_str(self.title(id)?);
                    out.push_str(SEPARATOR);
                    out.push_str(self.name(id)?);
                    out.push('\n');

                    // the close marker sits below the children on the stack
                    stack.push(Step::Close);
                    let mut children = Vec::new();
                    let mut child = self.leftmost_child(id)?;
                    while let Some(c) = child {
                        children.push(c);
                        child = self.right_sibling(c)?;
                    }
                    for &c in children.iter().rev() {
                        stack.push(Step::Enter(c));
                    }
                }
                Step::Close => {
                    out.push_str(CLOSE_MARKER);
                    out.push('\n');
                }
            }
        }
        Ok(out)
    }

    /// Rebuilds the tree from its text encoding.
    ///
    /// The tree is reset first. The initial line becomes the root; every
    /// later line either hires under the current node and descends, or is a
    /// close marker and ascends. The input must end with the cursor back
    /// above the root. On error the tree may hold a partially rebuilt
    /// hierarchy; callers wanting atomicity deserialize into a fresh tree
    /// and discard it on failure.
    #[instrument(level = "debug", skip(self, text))]
    pub fn deserialize(&mut self, text: &str) -> TreeResult<()> {
        self.clear();

        let mut lines = text.lines().enumerate();
        let (_, first) = lines.next().ok_or_else(|| TreeError::Malformed {
            line: 1,
            reason: "missing root line".to_string(),
        })?;
        let (title, name) = split_record(first, 1)?;
        let mut cursor = Some(self.add_root(title, name));

        for (i, line) in lines {
            let line_no = i + 1;
            let Some(at) = cursor else {
                return Err(TreeError::Malformed {
                    line: line_no,
                    reason: "content after the root was closed".to_string(),
                });
            };
            if line == CLOSE_MARKER {
                cursor = self.parent(at)?;
            } else {
                let (title, name) = split_record(line, line_no)?;
                cursor = Some(self.hire(at, title, name)?);
            }
        }

        if cursor.is_some() {
            return Err(TreeError::Malformed {
                line: text.lines().count(),
                reason: "unclosed subtree at end of input".to_string(),
            });
        }
        Ok(())
    }
}

fn split_record(line: &str, line_no: usize) -> TreeResult<(&str, &str)> {
    line.split_once(SEPARATOR)
        .ok_or_else(|| TreeError::Malformed {
            line: line_no,
            reason: format!("expected '<title>, <name>', got: {line}"),
        })
}
