use crate::form::Form;
use crate::sequent::Sequent;
use alloc::vec::Vec;

#[derive(PartialEq, Debug, Eq, Hash)]
pub enum Role {
    Conjecture,
    NegatedConjecture,
    Other,
}

#[derive(Debug, Default)]
pub struct RoleMap<F>(hashbrown::HashMap<Role, F>);

impl<F: Default> RoleMap<F> {
    pub fn get_mut(&mut self, role: Role) -> &mut F {
        self.0.entry(role).or_default()
    }

    fn remove(&mut self, role: &Role) -> F {
        self.0.remove(role).unwrap_or_default()
    }
}

impl RoleMap<Vec<Form>> {
    /// Conjoin all conjectures to the conclusion and use
    /// all other formulas as premises.
    ///
    /// Without conjectures, negated conjectures make the conclusion
    /// a contradiction, so the sequent is valid iff the premises are unsatisfiable.
    /// Return `None` if there is neither a conjecture nor a negated conjecture.
    pub fn join(mut self) -> Option<Sequent> {
        let mut premises = self.remove(&Role::Other);
        let mut negated = self.remove(&Role::NegatedConjecture);
        let conclusion = match Form::conjoin(self.remove(&Role::Conjecture)) {
            Some(fm) => fm,
            None if !negated.is_empty() => Form::falsum(),
            None => return None,
        };
        premises.append(&mut negated);
        Some(Sequent::new(conclusion, premises))
    }
}
