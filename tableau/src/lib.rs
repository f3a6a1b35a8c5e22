//! Analytic tableaux for propositional sequents.
//!
//! A sequent is valid iff the tableau that assumes
//! the conclusion to be false and all premises to be true
//! can be expanded such that all its branches are closed.
//!
//! ~~~
//! use tableau::{Form, Sequent};
//! let a = Form::Atom('a');
//! let excluded_middle = Sequent::new(a.clone() | -a, Vec::new());
//! let prover = excluded_middle.prove(Default::default()).unwrap();
//! assert!(prover.tableau().is_closed());
//! ~~~

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

mod closure;
mod error;
mod expand;
mod fitch;
pub mod form;
mod marked;
pub mod prove;
pub mod role;
mod rule;
mod sequent;
mod signed;
mod stats;
pub mod szs;
mod tableau;
#[cfg(feature = "tptp")]
pub mod tptp;

pub use closure::is_closed;
pub use error::Error;
pub use expand::Expansion;
pub use fitch::{Fitch, Lines};
pub use form::{Form, Op};
pub use marked::{classify, Kind, Marked};
pub use prove::{Opt, Prover, Strategy};
pub use rule::Rule;
pub use sequent::Sequent;
pub use signed::{Mark, Signed};
pub use stats::Stats;
pub use tableau::{Node, NodeId, Tableau};
