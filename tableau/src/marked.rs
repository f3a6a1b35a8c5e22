//! Marked formulas and their classification.
//!
//! ~~~ text
//!  α formulas          β formulas
//!  T¬A   ↦ F A
//!  F¬A   ↦ T A
//!  T A∧B ↦ T A, T B    F A∧B ↦ F A | F B
//!  F A∨B ↦ F A, F B    T A∨B ↦ T A | T B
//!  F A→B ↦ T A, F B    T A→B ↦ F A | T B
//! ~~~

use crate::form::{Form, Op};
use crate::signed::{Mark, Signed};
use core::fmt::{self, Display};

/// Determines which expansion rule applies to a marked formula.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Kind {
    Atom,
    Alpha,
    Beta,
    CloseBranch,
}

impl Kind {
    /// Return true if no expansion rule applies.
    pub fn is_terminal(self) -> bool {
        matches!(self, Kind::Atom | Kind::CloseBranch)
    }
}

/// Classify a formula with a given mark.
///
/// A missing formula denotes a branch closer.
///
/// ~~~
/// # use tableau::{classify, Form, Kind, Mark};
/// let ab = Form::Atom('a') & Form::Atom('b');
/// assert_eq!(classify(Mark::T, Some(&ab)), Kind::Alpha);
/// assert_eq!(classify(Mark::F, Some(&ab)), Kind::Beta);
/// assert_eq!(classify(Mark::F, None), Kind::CloseBranch);
/// ~~~
pub fn classify(mark: Mark, form: Option<&Form>) -> Kind {
    let form = match form {
        None => return Kind::CloseBranch,
        Some(form) => form,
    };
    match (mark, form) {
        (_, Form::Atom(_)) => Kind::Atom,
        (Mark::F, Form::Bin(_, Op::Conj, _)) => Kind::Beta,
        (Mark::T, Form::Bin(_, Op::Disj, _)) | (Mark::T, Form::Bin(_, Op::Impl, _)) => Kind::Beta,
        _ => Kind::Alpha,
    }
}

/// Formula together with a mark and its kind.
///
/// The kind is computed once on construction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Marked {
    form: Option<Signed<Form>>,
    kind: Kind,
}

impl Marked {
    pub fn new(mark: Mark, form: Form) -> Self {
        let kind = classify(mark, Some(&form));
        let form = Some(Signed(mark, form));
        Self { form, kind }
    }

    pub fn t(form: Form) -> Self {
        Self::new(Mark::T, form)
    }

    pub fn f(form: Form) -> Self {
        Self::new(Mark::F, form)
    }

    /// Create the sentinel that closes a branch.
    pub fn closer() -> Self {
        Self {
            form: None,
            kind: Kind::CloseBranch,
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn is_closer(&self) -> bool {
        self.kind == Kind::CloseBranch
    }

    pub fn signed(&self) -> Option<&Signed<Form>> {
        self.form.as_ref()
    }

    pub fn mark(&self) -> Option<Mark> {
        self.form.as_ref().map(Signed::mark)
    }

    pub fn form(&self) -> Option<&Form> {
        self.form.as_ref().map(|s| &s.1)
    }

    /// Return the marked atom if the formula is atomic.
    pub fn atom(&self) -> Option<Signed<char>> {
        match &self.form {
            Some(Signed(mark, Form::Atom(a))) => Some(Signed(*mark, *a)),
            _ => None,
        }
    }
}

impl From<Signed<Form>> for Marked {
    fn from(s: Signed<Form>) -> Self {
        Self::new(s.0, s.1)
    }
}

impl Display for Marked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.form {
            Some(s) => write!(f, "{}", s),
            None => write!(f, "*"),
        }
    }
}
