use super::{CnfFormula, Literal};
use crate::aa::{AAFramework, Argument, LabelType};

/// The trait for encoders from argumentation semantics to propositional formulas.
///
/// Each argument is associated with three propositional variables, stating the argument
/// is labelled `IN`, `OUT` or `UNDEC`.
/// The encoded constraints are such that the models of the formula are exactly the
/// labelings admitted by the underlying semantics.
pub trait ConstraintsEncoder<T>
where
    T: LabelType,
{
    /// Encodes the constraints for the underlying semantics into the formula.
    fn encode_constraints(&self, af: &AAFramework<T>, formula: &mut CnfFormula);

    /// Translates an argument into the literal stating it is labelled `IN`.
    fn arg_to_in_lit(&self, arg: &Argument<T>) -> Literal;

    /// Translates an argument into the literal stating it is labelled `OUT`.
    fn arg_to_out_lit(&self, arg: &Argument<T>) -> Literal;

    /// Translates an argument into the literal stating it is labelled `UNDEC`.
    fn arg_to_undec_lit(&self, arg: &Argument<T>) -> Literal;
}
