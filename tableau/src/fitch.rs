//! Linear display of tableaux.
//!
//! ~~~ text
//!        Fa & b                  Fa & b
//!          Tc                    Tc
//!        /    \         ↦        | Fb
//!      Fa      Fb                Fa
//! ~~~

use crate::marked::Marked;
use crate::tableau::{NodeId, Tableau};
use alloc::vec::Vec;
use core::fmt::{self, Display};

/// Iterator over the nodes of a tableau together with their depth.
///
/// The right child of a node starts a new branch one level deeper,
/// whereas the left child continues the branch of its parent.
#[derive(Clone)]
pub struct Lines<'t> {
    tableau: &'t Tableau,
    stack: Vec<(NodeId, usize)>,
}

impl<'t> Iterator for Lines<'t> {
    type Item = (usize, &'t Marked);
    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.stack.pop()?;
        let node = self.tableau.get(id)?;
        self.stack.extend(node.left().map(|l| (l, depth)));
        self.stack.extend(node.right().map(|r| (r, depth + 1)));
        Some((depth, node.marked()))
    }
}

/// Display a tableau one formula per line,
/// prefixing every line with `| ` for each level of depth.
pub struct Fitch<'t>(&'t Tableau);

impl Display for Fitch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (depth, marked) in self.0.lines() {
            (0..depth).try_for_each(|_| write!(f, "| "))?;
            writeln!(f, "{}", marked)?;
        }
        Ok(())
    }
}

impl Tableau {
    pub fn lines(&self) -> Lines<'_> {
        let stack = if self.is_empty() {
            Vec::new()
        } else {
            Vec::from([(self.root(), 0)])
        };
        Lines {
            tableau: self,
            stack,
        }
    }

    pub fn fitch(&self) -> Fitch<'_> {
        Fitch(self)
    }
}

impl Display for Tableau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fitch().fmt(f)
    }
}
