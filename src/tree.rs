//! Arena-based organization hierarchy with dense integer handles.
//!
//! All parent/child/sibling relationships are indices into one contiguous
//! `Vec`, which keeps the structure flat and free of ownership cycles.
//! Freed slots are reused by relocating the last-stored node, so no
//! free-list bookkeeping is needed (see [`OrgTree::fire`]).

use std::fmt;

use tracing::instrument;

use crate::errors::{TreeError, TreeResult};

/// Employee record held by a tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Role label, e.g. "CFO"
    pub title: String,
    /// Name of the person holding the role
    pub name: String,
}

impl Employee {
    pub fn new(title: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.name)
    }
}

/// Handle to a node in the tree's backing store.
///
/// Handles are dense indices: a handle is live while `0 <= id < len`.
/// Firing a node relocates the last-stored node into the freed slot, which
/// invalidates the handle of the last-stored node. Handles are only minted
/// by the tree itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position in the backing store.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tree node: employee payload plus sibling-list linkage.
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub employee: Employee,
    /// None for the root
    pub parent: Option<NodeId>,
    /// First child in hire order
    pub leftmost_child: Option<NodeId>,
    /// Next sibling in hire order
    pub right_sibling: Option<NodeId>,
}

/// Array-backed organization hierarchy.
#[derive(Debug, Clone)]
pub struct OrgTree {
    nodes: Vec<TreeNode>,
    root: Option<NodeId>,
}

impl Default for OrgTree {
    fn default() -> Self {
        Self::new()
    }
}

impl OrgTree {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Handle of the root node, None for an empty tree.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    fn node(&self, id: NodeId) -> TreeResult<&TreeNode> {
        self.nodes.get(id.0).ok_or(TreeError::InvalidNode(id))
    }

    /// Installs a new root node. An existing root becomes the new node's
    /// leftmost (and only) child.
    #[instrument(level = "debug", skip(self))]
    pub fn add_root(&mut self, title: &str, name: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode {
            employee: Employee::new(title, name),
            parent: None,
            leftmost_child: self.root,
            right_sibling: None,
        });
        if let Some(old_root) = self.root {
            self.nodes[old_root.0].parent = Some(id);
        }
        self.root = Some(id);
        id
    }

    /// Appends a new employee as the rightmost child of `supervisor`.
    ///
    /// Walks the supervisor's sibling chain to its end, so this is linear in
    /// the supervisor's current child count.
    #[instrument(level = "debug", skip(self))]
    pub fn hire(&mut self, supervisor: NodeId, title: &str, name: &str) -> TreeResult<NodeId> {
        self.node(supervisor)?;

        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode {
            employee: Employee::new(title, name),
            parent: Some(supervisor),
            leftmost_child: None,
            right_sibling: None,
        });

        match self.nodes[supervisor.0].leftmost_child {
            None => self.nodes[supervisor.0].leftmost_child = Some(id),
            Some(first) => {
                let last = self.chain_end(first);
                self.nodes[last.0].right_sibling = Some(id);
            }
        }
        Ok(id)
    }

    /// First node whose title matches, in storage order.
    ///
    /// Titles are not required to be unique. Operations that address nodes
    /// by title ([`OrgTree::fire`]) rely on the caller keeping them unique.
    pub fn find(&self, title: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.employee.title == title)
            .map(NodeId)
    }

    /// Removes the employee with the given title. Their direct reports move
    /// up to the fired employee's supervisor, linked after the supervisor's
    /// existing reports in their original relative order.
    ///
    /// The root cannot be fired; rejected calls leave the tree untouched.
    #[instrument(level = "debug", skip(self))]
    pub fn fire(&mut self, title: &str) -> TreeResult<()> {
        let id = self
            .find(title)
            .ok_or_else(|| TreeError::UnknownTitle(title.to_string()))?;
        if Some(id) == self.root {
            return Err(TreeError::FireRoot);
        }
        let parent = self.nodes[id.0].parent.expect("non-root node has a parent");

        // direct reports move up one level
        let mut child = self.nodes[id.0].leftmost_child;
        while let Some(c) = child {
            self.nodes[c.0].parent = Some(parent);
            child = self.nodes[c.0].right_sibling;
        }

        // unlink the fired node from its parent's child chain
        let successor = self.nodes[id.0].right_sibling;
        if self.nodes[parent.0].leftmost_child == Some(id) {
            self.nodes[parent.0].leftmost_child = successor;
        } else {
            let mut current = self.nodes[parent.0]
                .leftmost_child
                .expect("fired node is linked under its parent");
            while self.nodes[current.0].right_sibling != Some(id) {
                current = self.nodes[current.0]
                    .right_sibling
                    .expect("fired node is linked under its parent");
            }
            self.nodes[current.0].right_sibling = successor;
        }

        // splice the orphaned chain onto the end of the parent's children
        if let Some(orphans) = self.nodes[id.0].leftmost_child {
            match self.nodes[parent.0].leftmost_child {
                None => self.nodes[parent.0].leftmost_child = Some(orphans),
                Some(first) => {
                    let last = self.chain_end(first);
                    self.nodes[last.0].right_sibling = Some(orphans);
                }
            }
        }

        self.release_slot(id);
        Ok(())
    }

    /// Pre-order iterator over `(NodeId, &TreeNode)`. Siblings are visited
    /// in hire order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            tree: self,
            stack: self.root.into_iter().collect(),
        }
    }

    pub fn leftmost_child(&self, id: NodeId) -> TreeResult<Option<NodeId>> {
        Ok(self.node(id)?.leftmost_child)
    }

    pub fn right_sibling(&self, id: NodeId) -> TreeResult<Option<NodeId>> {
        Ok(self.node(id)?.right_sibling)
    }

    pub fn parent(&self, id: NodeId) -> TreeResult<Option<NodeId>> {
        Ok(self.node(id)?.parent)
    }

    pub fn title(&self, id: NodeId) -> TreeResult<&str> {
        Ok(&self.node(id)?.employee.title)
    }

    pub fn name(&self, id: NodeId) -> TreeResult<&str> {
        Ok(&self.node(id)?.employee.name)
    }

    pub fn employee(&self, id: NodeId) -> TreeResult<&Employee> {
        Ok(&self.node(id)?.employee)
    }

    /// Last handle in the sibling chain starting at `first`.
    fn chain_end(&self, first: NodeId) -> NodeId {
        let mut current = first;
        while let Some(next) = self.nodes[current.0].right_sibling {
            current = next;
        }
        current
    }

    /// Reuses the slot of an unlinked node by relocating the last-stored
    /// node into it, then repairs every handle that pointed at the old last
    /// slot: the relocated node's children's parent handles, its parent's
    /// leftmost-child (or the matching sibling's right-sibling), and the
    /// root handle if the relocated node is the root.
    fn release_slot(&mut self, id: NodeId) {
        let last = NodeId(self.nodes.len() - 1);
        if id != last {
            self.nodes.swap(id.0, last.0);

            let mut child = self.nodes[id.0].leftmost_child;
            while let Some(c) = child {
                self.nodes[c.0].parent = Some(id);
                child = self.nodes[c.0].right_sibling;
            }

            match self.nodes[id.0].parent {
                None => self.root = Some(id),
                Some(p) => {
                    if self.nodes[p.0].leftmost_child == Some(last) {
                        self.nodes[p.0].leftmost_child = Some(id);
                    } else {
                        let mut current = self.nodes[p.0].leftmost_child;
                        while let Some(c) = current {
                            if self.nodes[c.0].right_sibling == Some(last) {
                                self.nodes[c.0].right_sibling = Some(id);
                                break;
                            }
                            current = self.nodes[c.0].right_sibling;
                        }
                    }
                }
            }
        }
        self.nodes.pop();
    }
}

pub struct Iter<'a> {
    tree: &'a OrgTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (NodeId, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = &self.tree.nodes[id.0];
        // sibling below the child so the whole subtree is visited first
        if let Some(sibling) = node.right_sibling {
            self.stack.push(sibling);
        }
        if let Some(child) = node.leftmost_child {
            self.stack.push(child);
        }
        Some((id, node))
    }
}
