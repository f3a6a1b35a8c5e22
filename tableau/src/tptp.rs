//! Propositional formulas from TPTP problems.

use crate::form::{Form, Op};
use crate::role::{Role, RoleMap};
use crate::szs::NoSuccessKind;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::convert::{TryFrom, TryInto};
use tptp::{cnf, common, fof, top, TPTPIterator};

type Result<T> = core::result::Result<T, NoSuccessKind>;

/// Parse TPTP formulas and store them by role.
///
/// Included files are loaded by the function `f`.
pub fn parse<F>(bytes: &[u8], forms: &mut RoleMap<Vec<Form>>, f: F) -> Result<()>
where
    F: Fn(&str, &mut RoleMap<Vec<Form>>) -> Result<()>,
{
    let mut parser = TPTPIterator::<()>::new(bytes);
    for input in &mut parser {
        let input = input.map_err(|_| NoSuccessKind::SyntaxError)?;
        match input {
            top::TPTPInput::Include(include) => f(include.file_name.0 .0, forms)?,
            top::TPTPInput::Annotated(ann) => {
                let (role, formula) = get_role_formula(*ann)?;
                log::info!("formula: {}", formula);
                forms.get_mut(role).push(formula);
            }
        };
    }
    if parser.remaining.is_empty() {
        Ok(())
    } else {
        Err(NoSuccessKind::SyntaxError)
    }
}

fn get_role_formula(annotated: top::AnnotatedFormula) -> Result<(Role, Form)> {
    use top::AnnotatedFormula::*;
    match annotated {
        Fof(fof) => Ok((Role::from(fof.0.role), (*fof.0.formula).try_into()?)),
        Cnf(cnf) => Ok((Role::from(cnf.0.role), (*cnf.0.formula).try_into()?)),
        // typed formulas
        Tfx(_) => Err(NoSuccessKind::Inappropriate),
    }
}

/// Accept only names that consist of a single lowercase letter.
fn atom(name: &str) -> Result<Form> {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_lowercase() => Ok(Form::Atom(c)),
        _ => Err(NoSuccessKind::Inappropriate),
    }
}

fn conjoin_or_disjoin(op: Op, fms: Vec<Form>) -> Result<Form> {
    let mut fms = fms.into_iter().rev();
    let last = fms.next().ok_or(NoSuccessKind::SyntaxError)?;
    Ok(fms.fold(last, |acc, fm| Form::bin(fm, op, acc)))
}

impl TryFrom<fof::LogicFormula<'_>> for Form {
    type Error = NoSuccessKind;
    fn try_from(frm: fof::LogicFormula) -> Result<Self> {
        use fof::LogicFormula::*;
        match frm {
            Binary(b) => Self::try_from(b),
            Unary(u) => Self::try_from(u),
            Unitary(u) => Self::try_from(u),
        }
    }
}

impl TryFrom<fof::UnitFormula<'_>> for Form {
    type Error = NoSuccessKind;
    fn try_from(frm: fof::UnitFormula) -> Result<Self> {
        use fof::UnitFormula::*;
        match frm {
            Unitary(u) => Self::try_from(u),
            Unary(u) => Self::try_from(u),
        }
    }
}

impl TryFrom<fof::UnaryFormula<'_>> for Form {
    type Error = NoSuccessKind;
    fn try_from(frm: fof::UnaryFormula) -> Result<Self> {
        use fof::UnaryFormula::*;
        match frm {
            Unary(_negation, fuf) => Ok(-Self::try_from(*fuf)?),
            // term inequality
            InfixUnary(_) => Err(NoSuccessKind::Inappropriate),
        }
    }
}

impl TryFrom<fof::BinaryFormula<'_>> for Form {
    type Error = NoSuccessKind;
    fn try_from(frm: fof::BinaryFormula) -> Result<Self> {
        use fof::BinaryFormula::*;
        match frm {
            Nonassoc(fbn) => Self::try_from(fbn),
            Assoc(fba) => Self::try_from(fba),
        }
    }
}

impl TryFrom<fof::BinaryNonassoc<'_>> for Form {
    type Error = NoSuccessKind;
    fn try_from(frm: fof::BinaryNonassoc) -> Result<Self> {
        let left = Self::try_from(*frm.left)?;
        let right = Self::try_from(*frm.right)?;
        use common::NonassocConnective::*;
        Ok(match frm.op {
            LRImplies => Self::imp(left, right),
            RLImplies => Self::imp(right, left),
            Equivalent => Self::equiv(left, right),
            NotEquivalent => -Self::equiv(left, right),
            NotOr => -(left | right),
            NotAnd => -(left & right),
        })
    }
}

impl TryFrom<fof::BinaryAssoc<'_>> for Form {
    type Error = NoSuccessKind;
    fn try_from(fm: fof::BinaryAssoc) -> Result<Self> {
        use fof::BinaryAssoc::*;
        let (op, fms) = match fm {
            Or(fms) => (Op::Disj, fms.0),
            And(fms) => (Op::Conj, fms.0),
        };
        let fms = fms.into_iter().map(Self::try_from);
        conjoin_or_disjoin(op, fms.collect::<Result<_>>()?)
    }
}

impl TryFrom<fof::UnitaryFormula<'_>> for Form {
    type Error = NoSuccessKind;
    fn try_from(frm: fof::UnitaryFormula) -> Result<Self> {
        use fof::UnitaryFormula::*;
        match frm {
            Parenthesised(flf) => Self::try_from(*flf),
            Quantified(_) => Err(NoSuccessKind::Inappropriate),
            Atomic(a) => Self::try_from(*a),
        }
    }
}

impl TryFrom<fof::PlainAtomicFormula<'_>> for Form {
    type Error = NoSuccessKind;
    fn try_from(frm: fof::PlainAtomicFormula) -> Result<Self> {
        use fof::PlainTerm::*;
        match frm.0 {
            Constant(c) => atom(&c.to_string()),
            Function(_, _) => Err(NoSuccessKind::Inappropriate),
        }
    }
}

impl TryFrom<fof::AtomicFormula<'_>> for Form {
    type Error = NoSuccessKind;
    fn try_from(frm: fof::AtomicFormula) -> Result<Self> {
        use fof::AtomicFormula::*;
        match frm {
            Plain(p) => Self::try_from(p),
            // $true, $false and term equality
            Defined(_) | System(_) => Err(NoSuccessKind::Inappropriate),
        }
    }
}

impl TryFrom<fof::Formula<'_>> for Form {
    type Error = NoSuccessKind;
    fn try_from(frm: fof::Formula) -> Result<Self> {
        Self::try_from(frm.0)
    }
}

impl TryFrom<cnf::Literal<'_>> for Form {
    type Error = NoSuccessKind;
    fn try_from(lit: cnf::Literal) -> Result<Self> {
        use cnf::Literal::*;
        match lit {
            Atomic(a) => Self::try_from(a),
            NegatedAtomic(a) => Ok(-Self::try_from(a)?),
            Infix(_) => Err(NoSuccessKind::Inappropriate),
        }
    }
}

impl TryFrom<cnf::Disjunction<'_>> for Form {
    type Error = NoSuccessKind;
    fn try_from(frm: cnf::Disjunction) -> Result<Self> {
        let lits = frm.0.into_iter().map(Self::try_from);
        conjoin_or_disjoin(Op::Disj, lits.collect::<Result<_>>()?)
    }
}

impl TryFrom<cnf::Formula<'_>> for Form {
    type Error = NoSuccessKind;
    fn try_from(frm: cnf::Formula) -> Result<Self> {
        use cnf::Formula::*;
        match frm {
            Disjunction(d) | Parenthesised(d) => Self::try_from(d),
        }
    }
}

impl From<top::FormulaRole<'_>> for Role {
    fn from(role: top::FormulaRole<'_>) -> Self {
        match role.0 .0 {
            "conjecture" => Self::Conjecture,
            "negated_conjecture" => Self::NegatedConjecture,
            _ => Self::Other,
        }
    }
}
