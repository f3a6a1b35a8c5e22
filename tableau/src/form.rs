//! Propositional formulas.

use alloc::{boxed::Box, vec::Vec};
use core::convert::TryFrom;
use core::fmt::{self, Display};

/// Token of the negation connective.
pub const NEG: char = '-';

/// Propositional formula.
///
/// Every variant exclusively owns its subformulas,
/// so cloning a formula yields an independent deep copy.
#[derive(Clone, Debug, Eq)]
pub enum Form {
    Atom(char),
    Neg(Box<Form>),
    /// binary operation
    Bin(Box<Form>, Op, Box<Form>),
}

/// Binary connective.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Conj,
    Disj,
    Impl,
}

impl Op {
    /// Return the character that denotes the connective in formulas.
    pub fn token(self) -> char {
        match self {
            Op::Conj => '&',
            Op::Disj => '#',
            Op::Impl => '>',
        }
    }
}

impl TryFrom<char> for Op {
    type Error = char;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '&' => Ok(Op::Conj),
            '#' => Ok(Op::Disj),
            '>' => Ok(Op::Impl),
            c => Err(c),
        }
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl PartialEq for Form {
    fn eq(&self, other: &Self) -> bool {
        use Form::*;
        if core::ptr::eq(self, other) {
            return true;
        }
        match (self, other) {
            (Atom(a), Atom(b)) => a == b,
            (Neg(a), Neg(b)) => a == b,
            (Bin(l1, o1, r1), Bin(l2, o2, r2)) => o1 == o2 && l1 == l2 && r1 == r2,
            _ => false,
        }
    }
}

impl core::ops::Neg for Form {
    type Output = Self;
    fn neg(self) -> Self {
        Self::Neg(Box::new(self))
    }
}

impl core::ops::BitAnd for Form {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self::bin(self, Op::Conj, rhs)
    }
}

impl core::ops::BitOr for Form {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self::bin(self, Op::Disj, rhs)
    }
}

impl Form {
    pub fn bin(l: Self, o: Op, r: Self) -> Self {
        Self::Bin(Box::new(l), o, Box::new(r))
    }

    pub fn imp(l: Self, r: Self) -> Self {
        Self::bin(l, Op::Impl, r)
    }

    /// Return `(l > r) & (r > l)`.
    pub fn equiv(l: Self, r: Self) -> Self {
        Self::imp(l.clone(), r.clone()) & Self::imp(r, l)
    }

    /// Return the contradiction `a & -a`.
    pub fn falsum() -> Self {
        let a = Self::Atom('a');
        a.clone() & -a
    }

    /// Return `f1 & (f2 & (... & fn))`, or `None` if the iterator is empty.
    pub fn conjoin(fms: impl IntoIterator<Item = Self>) -> Option<Self> {
        let mut fms: Vec<_> = fms.into_iter().collect();
        let last = fms.pop()?;
        Some(fms.into_iter().rev().fold(last, |acc, fm| fm & acc))
    }

    /// Return the token of the formula root:
    /// an atom, `-`, or the token of a binary connective.
    pub fn token(&self) -> char {
        match self {
            Self::Atom(a) => *a,
            Self::Neg(_) => NEG,
            Self::Bin(_, o, _) => o.token(),
        }
    }

    /// Return the binary connective at the formula root.
    pub fn op(&self) -> Option<Op> {
        match self {
            Self::Bin(_, o, _) => Some(*o),
            _ => None,
        }
    }

    /// Return the left child, which is the operand of a negation.
    pub fn left(&self) -> Option<&Self> {
        match self {
            Self::Atom(_) => None,
            Self::Neg(fm) | Self::Bin(fm, _, _) => Some(fm),
        }
    }

    pub fn right(&self) -> Option<&Self> {
        match self {
            Self::Bin(_, _, r) => Some(r),
            _ => None,
        }
    }

    /// Return true if the formula has no children.
    pub fn is_atom(&self) -> bool {
        matches!(self, Self::Atom(_))
    }

    fn is_bin(&self) -> bool {
        matches!(self, Self::Bin(..))
    }
}

/// Print formulas with as few parentheses as possible.
///
/// A binary subformula is parenthesised when its connective differs from
/// the one of its parent; the left side of an implication is
/// parenthesised whenever it is binary, because implication associates
/// to the right.
///
/// ~~~
/// # use tableau::Form;
/// let (a, b, c) = (Form::Atom('a'), Form::Atom('b'), Form::Atom('c'));
/// let fm = Form::imp(a.clone() & b.clone(), -(b.clone() | c.clone()));
/// assert_eq!(fm.to_string(), "(a & b) > -(b # c)");
/// let fm = Form::imp(a.clone(), Form::imp(b.clone(), c.clone()));
/// assert_eq!(fm.to_string(), "a > b > c");
/// assert_eq!(Form::imp(Form::imp(a, b), c).to_string(), "(a > b) > c");
/// ~~~
impl Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Form::*;
        match self {
            Atom(a) => write!(f, "{}", a),
            Neg(fm) => {
                write!(f, "{}", NEG)?;
                paren(f, fm, fm.is_bin())
            }
            Bin(l, o, r) => {
                let pl = l.is_bin() && (l.op() != Some(*o) || *o == Op::Impl);
                paren(f, l, pl)?;
                write!(f, " {} ", o)?;
                paren(f, r, r.is_bin() && r.op() != Some(*o))
            }
        }
    }
}

fn paren(f: &mut fmt::Formatter<'_>, fm: &Form, p: bool) -> fmt::Result {
    if p {
        write!(f, "({})", fm)
    } else {
        write!(f, "{}", fm)
    }
}
