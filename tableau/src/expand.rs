use crate::rule::Rule;
use crate::tableau::{NodeId, Tableau};
use crate::Error;
use log::{debug, trace};

/// Outcome of expanding a single node.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Expansion {
    /// the formula is atomic or closes its branch
    Terminal,
    /// the formula has already been expanded
    Repeated,
    /// a chain of formulas was appended to the given number of open leaves
    Alpha(usize),
    /// the given number of open leaves were split
    Beta(usize),
}

impl Tableau {
    /// Expand the formula at node `id`.
    ///
    /// The consequences of the formula are added only to
    /// the open leaves of the subtree rooted at `id`,
    /// because only the branches through `id` contain the formula.
    /// Every formula is expanded at most once.
    pub fn expand(&mut self, id: NodeId) -> Result<Expansion, Error> {
        let node = self.get(id).ok_or(Error::InvalidExpansionTarget(id))?;
        if node.is_expanded() {
            return Ok(Expansion::Repeated);
        }
        let rule = Rule::of(node.marked())?;
        debug!("expand {} {}", id, node.marked());
        self.set_expanded(id);

        let rule = match rule {
            Some(rule) => rule,
            None => return Ok(Expansion::Terminal),
        };
        trace!("consequences: {}", rule);

        let leaves = self.open_leaves(id);
        match rule {
            Rule::Alpha(chain) => {
                for leaf in &leaves {
                    let leaf = self.append(*leaf, &chain);
                    self.close_contradictory(leaf);
                }
                Ok(Expansion::Alpha(leaves.len()))
            }
            Rule::Beta(l, r) => {
                for leaf in &leaves {
                    if let Some((ll, rl)) = self.split(*leaf, &l, &r) {
                        self.close_contradictory(ll);
                        self.close_contradictory(rl);
                    }
                }
                Ok(Expansion::Beta(leaves.len()))
            }
        }
    }
}
