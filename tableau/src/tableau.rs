//! Tableau trees stored in an arena.
//!
//! Nodes are addressed by [`NodeId`] handles and
//! children are always created after their parents,
//! so every node has a larger index than all of its ancestors.

use crate::form::Form;
use crate::marked::Marked;
use crate::Error;
use alloc::vec::Vec;
use core::fmt::{self, Display};
use log::info;

/// Handle of a node in a tableau.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug)]
pub struct Node {
    marked: Marked,
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
    expanded: bool,
}

impl Node {
    pub fn marked(&self) -> &Marked {
        &self.marked
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// Return true if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Return true if the formula of the node has been expanded.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }
}

/// Binary tree of marked formulas.
#[derive(Clone, Debug)]
pub struct Tableau {
    nodes: Vec<Node>,
}

impl Tableau {
    /// Build the initial tableau from the formulas of a sequent.
    ///
    /// The first formula is the conclusion, which is marked F.
    /// All other formulas are premises, which are marked T.
    /// All formulas are put on a single branch.
    ///
    /// ~~~
    /// # use tableau::{Form, Tableau};
    /// let (a, b) = (Form::Atom('a'), Form::Atom('b'));
    /// let tab = Tableau::build(vec![a.clone() & b, a]).unwrap();
    /// assert_eq!(tab.to_string(), "Fa & b\nTa\n");
    /// ~~~
    pub fn build(forms: impl IntoIterator<Item = Form>) -> Result<Self, Error> {
        let mut forms = forms.into_iter();
        let conclusion = forms.next().ok_or(Error::EmptySequent)?;
        let mut tab = Self { nodes: Vec::new() };
        let mut leaf = tab.push(Marked::f(conclusion), None);
        for premise in forms {
            leaf = tab.attach_left(leaf, Marked::t(premise));
        }
        tab.close_contradictory(leaf);
        info!("initial tableau with {} formulas", tab.len());
        Ok(tab)
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Return the number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Return all nodes in the order of their creation.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    fn push(&mut self, marked: Marked, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            marked,
            parent,
            left: None,
            right: None,
            expanded: false,
        });
        id
    }

    fn attach_left(&mut self, parent: NodeId, marked: Marked) -> NodeId {
        let id = self.push(marked, Some(parent));
        self.nodes[parent.0].left = Some(id);
        id
    }

    /// Return the leaves of the subtree rooted at `id`, from left to right.
    pub fn leaves(&self, id: NodeId) -> Vec<NodeId> {
        let mut leaves = Vec::new();
        let mut stack = Vec::from([id]);
        while let Some(id) = stack.pop() {
            let node = match self.get(id) {
                Some(node) => node,
                None => continue,
            };
            if node.is_leaf() {
                leaves.push(id)
            }
            stack.extend(node.right);
            stack.extend(node.left);
        }
        leaves
    }

    /// Return the leaves of the subtree rooted at `id` that do not close a branch.
    pub fn open_leaves(&self, id: NodeId) -> Vec<NodeId> {
        let mut leaves = self.leaves(id);
        leaves.retain(|leaf| !self.nodes[leaf.0].marked.is_closer());
        leaves
    }

    /// Return the nodes from `id` up to the root.
    pub fn branch(&self, id: NodeId) -> impl Iterator<Item = &Node> + '_ {
        let first = self.get(id);
        core::iter::successors(first, move |node| node.parent.map(|p| &self.nodes[p.0]))
    }

    pub(crate) fn set_expanded(&mut self, id: NodeId) {
        self.nodes[id.0].expanded = true;
    }

    /// Append a chain of formulas below a leaf and return the new leaf.
    ///
    /// Nothing is appended below a branch closer, and
    /// the chain ends at the first branch closer it contains.
    pub(crate) fn append(&mut self, leaf: NodeId, chain: &[Marked]) -> NodeId {
        let mut leaf = leaf;
        for marked in chain {
            if self.nodes[leaf.0].marked.is_closer() {
                break;
            }
            leaf = self.attach_left(leaf, marked.clone());
        }
        leaf
    }

    /// Split a leaf into two branches and return the new leaves.
    pub(crate) fn split(&mut self, leaf: NodeId, l: &Marked, r: &Marked) -> Option<(NodeId, NodeId)> {
        if self.nodes[leaf.0].marked.is_closer() {
            return None;
        }
        let l = self.attach_left(leaf, l.clone());
        let r = self.push(r.clone(), Some(leaf));
        self.nodes[leaf.0].right = Some(r);
        Some((l, r))
    }

    /// Attach a branch closer below a leaf.
    pub(crate) fn close(&mut self, leaf: NodeId) {
        debug_assert!(self.nodes[leaf.0].is_leaf());
        if !self.nodes[leaf.0].marked.is_closer() {
            self.attach_left(leaf, Marked::closer());
        }
    }
}
