use crate::form::Form;
use crate::prove::{Opt, Prover};
use crate::tableau::Tableau;
use crate::Error;
use alloc::vec::Vec;
use core::fmt::{self, Display};

/// Conclusion together with premises.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Sequent {
    pub conclusion: Form,
    pub premises: Vec<Form>,
}

impl Sequent {
    pub fn new(conclusion: Form, premises: Vec<Form>) -> Self {
        Self {
            conclusion,
            premises,
        }
    }

    /// Build a tableau for the sequent and expand it.
    ///
    /// ~~~
    /// # use tableau::{Form, Sequent};
    /// let (a, b) = (Form::Atom('a'), Form::Atom('b'));
    /// let mp = Sequent::new(b.clone(), vec![Form::imp(a.clone(), b), a]);
    /// let prover = mp.prove(Default::default()).unwrap();
    /// assert!(prover.tableau().is_closed());
    /// ~~~
    pub fn prove(self, opt: Opt) -> Result<Prover, Error> {
        let mut prover = Prover::new(Tableau::build(self)?, opt);
        prover.prove()?;
        Ok(prover)
    }
}

/// Yield the conclusion first, then the premises.
impl IntoIterator for Sequent {
    type Item = Form;
    type IntoIter = core::iter::Chain<core::iter::Once<Form>, alloc::vec::IntoIter<Form>>;

    fn into_iter(self) -> Self::IntoIter {
        core::iter::once(self.conclusion).chain(self.premises)
    }
}

impl Display for Sequent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.premises.iter();
        if let Some(p) = iter.next() {
            write!(f, "{}", p)?;
            iter.try_for_each(|p| write!(f, ", {}", p))?;
            write!(f, " ")?;
        }
        write!(f, "⊢ {}", self.conclusion)
    }
}
