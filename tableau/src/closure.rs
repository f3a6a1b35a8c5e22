use crate::marked::Kind;
use crate::signed::Signed;
use crate::tableau::{NodeId, Tableau};
use crate::Error;
use alloc::{vec, vec::Vec};
use hashbrown::HashSet;
use log::trace;

/// Determine whether all branches of a tableau are closed.
///
/// A missing tableau yields [`Error::NoTableau`].
pub fn is_closed(tableau: Option<&Tableau>) -> Result<bool, Error> {
    tableau.map(|tab| tab.is_closed()).ok_or(Error::NoTableau)
}

impl Tableau {
    /// Return for every node whether all branches through it are closed.
    ///
    /// A leaf is closed iff it is a branch closer, and
    /// an inner node is closed iff all its children are closed.
    fn closed_nodes(&self) -> Vec<bool> {
        let mut closed = vec![false; self.len()];
        // children have larger indices than their parents
        for i in (0..self.len()).rev() {
            let node = match self.get(NodeId(i)) {
                Some(node) => node,
                None => continue,
            };
            closed[i] = match (node.left(), node.right()) {
                (None, None) => node.marked().kind() == Kind::CloseBranch,
                (Some(l), Some(r)) => closed[l.index()] && closed[r.index()],
                (Some(c), None) | (None, Some(c)) => closed[c.index()],
            }
        }
        closed
    }

    /// Return true if all branches of the subtree rooted at `id` are closed.
    pub fn is_closed_at(&self, id: NodeId) -> bool {
        self.closed_nodes().get(id.index()).copied().unwrap_or(false)
    }

    /// Return true if all branches are closed, meaning that the sequent is valid.
    pub fn is_closed(&self) -> bool {
        !self.is_empty() && self.is_closed_at(self.root())
    }

    /// Return the number of branches and the number of closed branches.
    pub fn branches(&self) -> (usize, usize) {
        let leaves = self.leaves(self.root());
        let closed = leaves.iter().filter(|leaf| {
            let node = self.get(**leaf);
            node.map_or(false, |n| n.marked().is_closer())
        });
        (leaves.len(), closed.count())
    }

    /// Close the branch ending in `leaf` if it contains
    /// some atom both marked T and marked F.
    ///
    /// Return true if the branch is closed afterwards.
    pub(crate) fn close_contradictory(&mut self, leaf: NodeId) -> bool {
        let mut atoms = HashSet::new();
        let mut contradiction = None;
        for node in self.branch(leaf) {
            if node.marked().is_closer() {
                return true;
            }
            if let Some(atom) = node.marked().atom() {
                if atoms.contains(&-atom.clone()) {
                    contradiction = Some(atom);
                    break;
                }
                atoms.insert(atom);
            }
        }
        match contradiction {
            Some(Signed(_, a)) => {
                trace!("close branch at {} with atom {}", leaf, a);
                self.close(leaf);
                true
            }
            None => false,
        }
    }
}
