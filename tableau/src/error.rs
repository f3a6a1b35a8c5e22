use crate::tableau::NodeId;
use core::fmt::{self, Display};

/// Failure of a proof attempt.
///
/// An open tableau is not an error: it means that the sequent is not valid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// a tableau was requested for a sequent without formulas
    EmptySequent,
    /// a rule was applied to a formula that lacks a required operand
    MissingOperand,
    /// the node to be expanded is not part of the tableau
    InvalidExpansionTarget(NodeId),
    /// closure was checked without a tableau
    NoTableau,
    /// the maximal number of expansions was reached
    LimitExceeded(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;
        match self {
            EmptySequent => write!(f, "sequent contains no formulas"),
            MissingOperand => write!(f, "expansion rule applied to formula without operand"),
            InvalidExpansionTarget(id) => write!(f, "node {} is not part of the tableau", id),
            NoTableau => write!(f, "no tableau"),
            LimitExceeded(lim) => write!(f, "no saturation after {} expansions", lim),
        }
    }
}
