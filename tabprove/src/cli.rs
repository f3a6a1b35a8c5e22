use clap::Parser;
use std::path::PathBuf;
use tableau::{Opt, Strategy};

/// Decide propositional sequents with analytic tableaux
///
/// The problem file contains one formula per line:
/// the first formula is the conclusion, all further formulas are premises.
/// Formulas consist of the atoms "a" to "z",
/// the connectives "-" (not), "&" (and), "#" (or), ">" (implies),
/// and parentheses.
/// Lines that are empty or start with "%" are ignored.
///
/// Set the environment variable "LOG" to "info", "debug", or "trace"
/// to obtain an increasingly detailed log.
#[derive(Parser)]
#[command(version)]
pub struct Cli {
    /// Expand α formulas before β formulas
    ///
    /// Equivalent to `--strategy alpha`.
    #[arg(long)]
    alpha_first: bool,

    /// Order in which formulas are expanded
    ///
    /// "preorder" expands the first unexpanded formula
    /// in the order node, left subtree, right subtree.
    /// "alpha" does the same, but prefers α formulas,
    /// which never split branches.
    #[arg(long)]
    strategy: Option<Strategy>,

    /// Maximal number of expansions
    #[arg(long)]
    lim: Option<usize>,

    /// Parse the problem file as TPTP
    ///
    /// Conjectures form the conclusion, all other formulas the premises.
    /// Without conjectures, the problem is proved by refuting
    /// the negated conjectures together with the other formulas.
    #[arg(long)]
    pub tptp: bool,

    /// Write SZS output (such as the tableau and error details) to given file
    #[arg(short)]
    pub output: Option<PathBuf>,

    /// Write proof search statistics in JSON format to given file
    #[arg(long)]
    pub stats: Option<PathBuf>,

    /// Path of the problem file
    pub file: PathBuf,
}

impl Cli {
    pub fn get_strategy(&self) -> Strategy {
        if self.alpha_first {
            Strategy::AlphaFirst
        } else {
            self.strategy.unwrap_or_default()
        }
    }

    pub fn opt(&self) -> Opt {
        Opt {
            strategy: self.get_strategy(),
            lim: self.lim,
        }
    }

    pub fn output(&self, out: impl std::fmt::Display) -> Result<(), std::io::Error> {
        use std::io::Write;
        match &self.output {
            Some(o) => std::fs::write(o, out.to_string()),
            None => write!(std::io::stdout(), "{}", tableau::szs::Output(out)),
        }
    }
}
