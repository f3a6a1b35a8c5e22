use crate::form::{Form, Op};
use crate::marked::{Kind, Marked};
use crate::signed::{Mark, Signed};
use crate::Error;
use alloc::vec::Vec;
use core::fmt::{self, Display};

/// Consequences of expanding a marked formula.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Rule {
    /// chain of formulas appended to every branch
    Alpha(Vec<Marked>),
    /// formulas that split every branch into a left and a right branch
    Beta(Marked, Marked),
}

impl Rule {
    /// Return the rule for a marked formula, or `None` if it is terminal.
    pub fn of(m: &Marked) -> Result<Option<Self>, Error> {
        if m.kind().is_terminal() {
            return Ok(None);
        }
        let Signed(mark, form) = m.signed().ok_or(Error::MissingOperand)?;
        use Form::{Atom, Bin, Neg};
        use Mark::{F, T};
        let rule = match (*mark, form) {
            (_, Atom(_)) => return Err(Error::MissingOperand),
            (T, Neg(a)) => Self::Alpha(Vec::from([f(a)])),
            (F, Neg(a)) => Self::Alpha(Vec::from([t(a)])),
            (T, Bin(a, Op::Conj, b)) => Self::Alpha(Vec::from([t(a), t(b)])),
            (F, Bin(a, Op::Disj, b)) => Self::Alpha(Vec::from([f(a), f(b)])),
            // A and A cannot be both true and false
            (F, Bin(a, Op::Impl, b)) if a == b => Self::Alpha(Vec::from([t(a), Marked::closer()])),
            (F, Bin(a, Op::Impl, b)) => Self::Alpha(Vec::from([t(a), f(b)])),
            (F, Bin(a, Op::Conj, b)) => Self::Beta(f(a), f(b)),
            (T, Bin(a, Op::Disj, b)) => Self::Beta(t(a), t(b)),
            (T, Bin(a, Op::Impl, b)) => Self::Beta(f(a), t(b)),
        };
        debug_assert_eq!(
            m.kind(),
            match rule {
                Self::Alpha(_) => Kind::Alpha,
                Self::Beta(..) => Kind::Beta,
            }
        );
        Ok(Some(rule))
    }
}

fn t(fm: &Form) -> Marked {
    Marked::t(fm.clone())
}

fn f(fm: &Form) -> Marked {
    Marked::f(fm.clone())
}

impl Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alpha(chain) => {
                let mut iter = chain.iter();
                if let Some(m) = iter.next() {
                    write!(f, "{}", m)?;
                    iter.try_for_each(|m| write!(f, ", {}", m))?;
                }
                Ok(())
            }
            Self::Beta(l, r) => write!(f, "{} | {}", l, r),
        }
    }
}
