#[cfg(feature = "serde")]
use serde::Serialize;

/// Proof search statistics.
#[derive(Clone, Default, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Stats {
    /// number of α expansions that added formulas
    pub alpha: usize,
    /// number of β expansions that split branches
    pub beta: usize,
    /// number of tableau nodes
    pub nodes: usize,
    pub branches: usize,
    pub closed: usize,
}
