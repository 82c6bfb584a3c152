use super::{CnfFormula, ConstraintsEncoder, Literal};
use crate::aa::{AAFramework, Argument, LabelType, Semantics};
use crate::clause;
use anyhow::{anyhow, Result};

fn arg_id_to_in_var(id: usize) -> usize {
    3 * id + 1
}

fn arg_id_to_out_var(id: usize) -> usize {
    3 * id + 2
}

fn arg_id_to_undec_var(id: usize) -> usize {
    3 * id + 3
}

fn encode_labeling_legality_constraints<T>(af: &AAFramework<T>, formula: &mut CnfFormula)
where
    T: LabelType,
{
    let max_id = match af.max_argument_id() {
        Some(m) => m,
        None => return,
    };
    for id in 0..=max_id {
        let in_var = arg_id_to_in_var(id) as isize;
        let out_var = arg_id_to_out_var(id) as isize;
        let undec_var = arg_id_to_undec_var(id) as isize;
        if !af.argument_set().has_argument_with_id(id) {
            // removed arguments keep their variables but cannot be labelled
            formula.add_clause(clause![-in_var]);
            formula.add_clause(clause![-out_var]);
            formula.add_clause(clause![-undec_var]);
            continue;
        }
        formula.add_clause(clause![in_var, out_var, undec_var]);
        formula.add_clause(clause![-in_var, -out_var]);
        formula.add_clause(clause![-in_var, -undec_var]);
        formula.add_clause(clause![-out_var, -undec_var]);
        let mut out_legality = vec![Literal::from(-out_var)];
        af.attacker_ids_of(id).for_each(|attacker| {
            let attacker_in_var = arg_id_to_in_var(attacker) as isize;
            out_legality.push(Literal::from(attacker_in_var));
            formula.add_clause(clause![-attacker_in_var, out_var]);
        });
        formula.add_clause(out_legality);
    }
}

fn encode_conflict_freeness_constraints<T>(af: &AAFramework<T>, formula: &mut CnfFormula)
where
    T: LabelType,
{
    af.iter_attacks().for_each(|att| {
        let attacker_in_var = arg_id_to_in_var(att.attacker().id()) as isize;
        let attacked_in_var = arg_id_to_in_var(att.attacked().id()) as isize;
        if attacker_in_var == attacked_in_var {
            formula.add_clause(clause![-attacker_in_var]);
        } else {
            formula.add_clause(clause![-attacker_in_var, -attacked_in_var]);
        }
    });
}

fn encode_defense_constraints<T>(af: &AAFramework<T>, formula: &mut CnfFormula)
where
    T: LabelType,
{
    af.iter_attacks().for_each(|att| {
        formula.add_clause(clause![
            -(arg_id_to_in_var(att.attacked().id()) as isize),
            arg_id_to_out_var(att.attacker().id()) as isize,
        ]);
    });
}

fn encode_reinstatement_constraints<T>(af: &AAFramework<T>, formula: &mut CnfFormula)
where
    T: LabelType,
{
    af.argument_set().iter().for_each(|arg| {
        let mut cl = vec![Literal::from(arg_id_to_in_var(arg.id()) as isize)];
        af.attacker_ids_of(arg.id()).for_each(|attacker| {
            cl.push(Literal::from(arg_id_to_out_var(attacker) as isize).negate());
        });
        formula.add_clause(cl);
    });
}

fn encode_no_undec_constraints<T>(af: &AAFramework<T>, formula: &mut CnfFormula)
where
    T: LabelType,
{
    af.argument_set().iter().for_each(|arg| {
        formula.add_clause(clause![-(arg_id_to_undec_var(arg.id()) as isize)]);
    });
}

macro_rules! constraints_encoder {
    ($encoder:ident, $semantics_name:literal, [$($encode_fn:ident),+ $(,)?]) => {
        #[doc = concat!("An encoder for the constraints of ", $semantics_name, ".")]
        ///
        /// The models of the encoded formula are in one-to-one correspondence with the
        /// labelings admitted by the semantics.
        #[derive(Default)]
        pub struct $encoder;

        impl<T> ConstraintsEncoder<T> for $encoder
        where
            T: LabelType,
        {
            fn encode_constraints(&self, af: &AAFramework<T>, formula: &mut CnfFormula) {
                $($encode_fn(af, formula);)+
            }

            fn arg_to_in_lit(&self, arg: &Argument<T>) -> Literal {
                Literal::from(arg_id_to_in_var(arg.id()) as isize)
            }

            fn arg_to_out_lit(&self, arg: &Argument<T>) -> Literal {
                Literal::from(arg_id_to_out_var(arg.id()) as isize)
            }

            fn arg_to_undec_lit(&self, arg: &Argument<T>) -> Literal {
                Literal::from(arg_id_to_undec_var(arg.id()) as isize)
            }
        }
    };
}

constraints_encoder!(
    ConflictFreenessConstraintsEncoder,
    "conflict-freeness",
    [
        encode_labeling_legality_constraints,
        encode_conflict_freeness_constraints,
    ]
);

constraints_encoder!(
    AdmissibilityConstraintsEncoder,
    "admissibility",
    [
        encode_labeling_legality_constraints,
        encode_conflict_freeness_constraints,
        encode_defense_constraints,
    ]
);

constraints_encoder!(
    CompleteSemanticsConstraintsEncoder,
    "the complete semantics",
    [
        encode_labeling_legality_constraints,
        encode_conflict_freeness_constraints,
        encode_defense_constraints,
        encode_reinstatement_constraints,
    ]
);

constraints_encoder!(
    StableSemanticsConstraintsEncoder,
    "the stable semantics",
    [
        encode_labeling_legality_constraints,
        encode_conflict_freeness_constraints,
        encode_defense_constraints,
        encode_reinstatement_constraints,
        encode_no_undec_constraints,
    ]
);

/// Returns the constraints encoder associated with a semantics.
///
/// Only conflict-freeness, admissibility, the complete semantics and the stable
/// semantics admit a finite propositional characterisation.
/// Requesting an encoder for any other semantics yields an error.
pub fn encoder_for_semantics<T>(semantics: Semantics) -> Result<Box<dyn ConstraintsEncoder<T>>>
where
    T: LabelType,
{
    match semantics {
        Semantics::CF => Ok(Box::new(ConflictFreenessConstraintsEncoder)),
        Semantics::ADM => Ok(Box::new(AdmissibilityConstraintsEncoder)),
        Semantics::CO => Ok(Box::new(CompleteSemanticsConstraintsEncoder)),
        Semantics::ST => Ok(Box::new(StableSemanticsConstraintsEncoder)),
        _ => Err(anyhow!(
            "no propositional characterisation for the {} semantics",
            semantics.as_ref()
        )),
    }
}

/// Computes the propositional characterisation of a framework under a semantics.
///
/// The characterisation is a CNF formula involving three variables for each argument,
/// stating the argument is labelled `IN`, `OUT` or `UNDEC`.
/// The models of the formula are in one-to-one correspondence with the labelings
/// admitted by the semantics, making the formula suitable for an external SAT solver.
///
/// An error is returned for the semantics that admit no such characterisation.
///
/// # Example
///
/// ```
/// # use exargo::aa::{AAFramework, Semantics};
/// # use exargo::encodings::propositional_characterisation;
/// fn dump_complete_characterisation(af: &AAFramework<String>) {
///     let formula = propositional_characterisation(af, Semantics::CO).unwrap();
///     formula.write_dimacs(&mut std::io::stdout()).unwrap();
/// }
/// # dump_complete_characterisation(&AAFramework::default());
/// ```
pub fn propositional_characterisation<T>(
    af: &AAFramework<T>,
    semantics: Semantics,
) -> Result<CnfFormula>
where
    T: LabelType,
{
    let encoder = encoder_for_semantics::<T>(semantics)?;
    let mut formula = CnfFormula::new();
    encoder.encode_constraints(af, &mut formula);
    Ok(formula)
}
