use crate::expand::Expansion;
use crate::marked::Kind;
use crate::stats::Stats;
use crate::tableau::{NodeId, Tableau};
use crate::Error;
use alloc::vec::Vec;
use core::str::FromStr;
use log::{debug, info, trace, warn};

/// Order in which unexpanded formulas are selected.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Strategy {
    /// first unexpanded formula in pre-order (node, left, right)
    PreOrder,
    /// like `PreOrder`, but prefer α formulas over β formulas
    AlphaFirst,
}

impl Default for Strategy {
    fn default() -> Self {
        Self::PreOrder
    }
}

impl FromStr for Strategy {
    type Err = alloc::string::String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "preorder" => Ok(Self::PreOrder),
            "alpha" => Ok(Self::AlphaFirst),
            _ => Err(alloc::format!("unknown strategy: {}", s)),
        }
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct Opt {
    pub strategy: Strategy,
    /// maximal number of expansions
    pub lim: Option<usize>,
}

/// Expand a tableau until it is closed or saturated.
pub struct Prover {
    tableau: Tableau,
    opt: Opt,
    expansions: usize,
    alpha: usize,
    beta: usize,
}

impl Prover {
    pub fn new(tableau: Tableau, opt: Opt) -> Self {
        Self {
            tableau,
            opt,
            expansions: 0,
            alpha: 0,
            beta: 0,
        }
    }

    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    pub fn into_tableau(self) -> Tableau {
        self.tableau
    }

    /// Return the next formula to expand, or `None` if the tableau is saturated.
    ///
    /// Formulas whose branches are all closed are not selected.
    pub fn select(&self) -> Option<NodeId> {
        let mut unexpanded = self.preorder().filter(|id| match self.tableau.get(*id) {
            Some(node) => {
                !node.is_expanded()
                    && !node.marked().kind().is_terminal()
                    && !self.tableau.open_leaves(*id).is_empty()
            }
            None => false,
        });
        match self.opt.strategy {
            Strategy::PreOrder => unexpanded.next(),
            Strategy::AlphaFirst => {
                let candidates: Vec<_> = unexpanded.collect();
                let kind = |id: &&NodeId| self.tableau.get(**id).map(|n| n.marked().kind());
                let alpha = candidates.iter().find(|id| kind(id) == Some(Kind::Alpha));
                alpha.or_else(|| candidates.first()).copied()
            }
        }
    }

    fn preorder(&self) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack = Vec::from([self.tableau.root()]);
        core::iter::from_fn(move || {
            let id = stack.pop()?;
            if let Some(node) = self.tableau.get(id) {
                stack.extend(node.right());
                stack.extend(node.left());
            }
            Some(id)
        })
    }

    /// Expand the formula at the given node.
    ///
    /// Expanding a node that is not part of the tableau
    /// is reported as a warning and does nothing.
    pub fn step(&mut self, id: NodeId) -> Result<Option<Expansion>, Error> {
        let expansion = match self.tableau.expand(id) {
            Err(Error::InvalidExpansionTarget(id)) => {
                warn!("ignoring expansion of {}", id);
                return Ok(None);
            }
            result => result?,
        };
        self.expansions += 1;
        match expansion {
            Expansion::Alpha(leaves) if leaves > 0 => self.alpha += 1,
            Expansion::Beta(leaves) if leaves > 0 => self.beta += 1,
            _ => (),
        }
        debug!("expansion {}: {:?}", self.expansions, expansion);
        trace!("tableau:\n{}", self.tableau);
        Ok(Some(expansion))
    }

    /// Expand formulas until the tableau is closed or saturated.
    ///
    /// Return true if the tableau is closed, meaning that the sequent is valid.
    pub fn prove(&mut self) -> Result<bool, Error> {
        while !self.tableau.is_closed() {
            let id = match self.select() {
                Some(id) => id,
                None => break,
            };
            if let Some(lim) = self.opt.lim {
                if self.expansions >= lim {
                    return Err(Error::LimitExceeded(lim));
                }
            }
            self.step(id)?;
        }
        let closed = self.tableau.is_closed();
        info!(
            "tableau {} after {} expansions",
            if closed { "closed" } else { "saturated" },
            self.expansions
        );
        Ok(closed)
    }

    pub fn stats(&self) -> Stats {
        let (branches, closed) = self.tableau.branches();
        Stats {
            alpha: self.alpha,
            beta: self.beta,
            nodes: self.tableau.len(),
            branches,
            closed,
        }
    }
}
