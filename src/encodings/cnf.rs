use anyhow::{Context, Result};
use std::{
    fmt::Display,
    io::Write,
    num::{NonZeroIsize, NonZeroUsize},
};

/// A propositional variable.
///
/// A variable is represented by a non-null positive integer.
/// It can be obtained through the [From] trait from an integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variable(NonZeroUsize);

macro_rules! impl_var_from {
    ($t: ty) => {
        impl From<$t> for Variable {
            fn from(v: $t) -> Self {
                Self(NonZeroUsize::try_from(v as usize).unwrap())
            }
        }
    };
}
impl_var_from!(usize);
impl_var_from!(u128);
impl_var_from!(u64);
impl_var_from!(u32);
impl_var_from!(u16);
impl_var_from!(u8);

macro_rules! impl_var_from_neg {
    ($t: ty) => {
        impl From<$t> for Variable {
            fn from(v: $t) -> Self {
                if v < 0 {
                    panic!("cannot build a variable from a negative integer")
                }
                Self(NonZeroUsize::try_from(v as usize).unwrap())
            }
        }
    };
}
impl_var_from_neg!(isize);
impl_var_from_neg!(i128);
impl_var_from_neg!(i64);
impl_var_from_neg!(i32);
impl_var_from_neg!(i16);
impl_var_from_neg!(i8);

impl From<Variable> for usize {
    fn from(v: Variable) -> Self {
        v.0.into()
    }
}

/// A propositional literal.
///
/// A literal is represented by a non-null integer.
/// It can be obtained through the [From] trait from a signed integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal(NonZeroIsize);

impl Literal {
    /// Returns the negation of this literal.
    pub fn negate(self) -> Self {
        Self::from(-self.0.get())
    }

    /// Returns the variable this literal is built on.
    pub fn var(&self) -> Variable {
        Variable(self.0.unsigned_abs())
    }

    /// Returns `true` iff the literal is a positive one.
    pub fn is_positive(&self) -> bool {
        self.0.get() > 0
    }
}

macro_rules! impl_lit_from {
    ($t: ty) => {
        impl From<$t> for Literal {
            fn from(l: $t) -> Self {
                Self(NonZeroIsize::try_from(l as isize).unwrap())
            }
        }
    };
}
impl_lit_from!(isize);
impl_lit_from!(i128);
impl_lit_from!(i64);
impl_lit_from!(i32);
impl_lit_from!(i16);
impl_lit_from!(i8);

impl From<Literal> for isize {
    fn from(l: Literal) -> Self {
        l.0.into()
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Builds a clause from a list of integers.
#[macro_export]
macro_rules! clause {
    () => (
        vec![] as Vec<$crate::encodings::Literal>
    );
    ($($x:expr),+ $(,)?) => (
        [$($x),+].into_iter().map($crate::encodings::Literal::from).collect::<Vec<$crate::encodings::Literal>>()
    );
}

/// A propositional formula in conjunctive normal form.
///
/// The number of variables of the formula is the highest variable index
/// involved in one of its clauses.
#[derive(Default)]
pub struct CnfFormula {
    clauses: Vec<Vec<Literal>>,
    n_vars: usize,
}

impl CnfFormula {
    /// Builds a new formula with no clause.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a clause to this formula.
    pub fn add_clause(&mut self, cl: Vec<Literal>) {
        cl.iter()
            .for_each(|l| self.n_vars = usize::max(self.n_vars, usize::from(l.var())));
        self.clauses.push(cl);
    }

    /// Returns the number of variables involved in this formula.
    pub fn n_vars(&self) -> usize {
        self.n_vars
    }

    /// Returns the number of clauses of this formula.
    pub fn n_clauses(&self) -> usize {
        self.clauses.len()
    }

    /// Returns an iterator to the clauses of this formula, in insertion order.
    pub fn iter_clauses(&self) -> impl Iterator<Item = &[Literal]> + '_ {
        self.clauses.iter().map(|cl| cl.as_slice())
    }

    /// Writes this formula using the DIMACS CNF format.
    ///
    /// The preamble line gives the number of variables and the number of clauses.
    /// Each clause is then written as its space separated literals followed by a zero.
    pub fn write_dimacs(&self, writer: &mut dyn Write) -> Result<()> {
        let context = "while writing a CNF formula";
        writeln!(writer, "p cnf {} {}", self.n_vars, self.clauses.len()).context(context)?;
        for cl in &self.clauses {
            for l in cl {
                write!(writer, "{} ", l).context(context)?;
            }
            writeln!(writer, "0").context(context)?;
        }
        writer.flush().context(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause;
    use std::io::BufWriter;

    #[test]
    fn test_var_from_pos() {
        let v = Variable::from(1);
        assert_eq!(1, usize::from(v))
    }

    #[test]
    #[allow(unused_must_use)]
    #[should_panic]
    fn test_var_from_null() {
        Variable::from(0);
    }

    #[test]
    #[allow(unused_must_use)]
    #[should_panic]
    fn test_var_from_neg() {
        Variable::from(-1);
    }

    #[test]
    fn test_lit_from() {
        assert_eq!(1, isize::from(Literal::from(1)));
        assert_eq!(-1, isize::from(Literal::from(-1)));
        assert!(Literal::from(1).is_positive());
        assert!(!Literal::from(-1).is_positive());
    }

    #[test]
    #[allow(unused_must_use)]
    #[should_panic]
    fn test_lit_from_null() {
        Literal::from(0);
    }

    #[test]
    fn test_negate_lit() {
        assert_eq!(Literal::from(-1), Literal::from(1).negate());
        assert_eq!(Literal::from(1), Literal::from(-1).negate());
    }

    #[test]
    fn test_clause_macro() {
        assert_eq!(Vec::<Literal>::new(), clause![]);
        assert_eq!(
            vec![Literal::from(1), Literal::from(-2)],
            clause![1, -2]
        );
    }

    #[test]
    fn test_formula_n_vars() {
        let mut formula = CnfFormula::new();
        assert_eq!(0, formula.n_vars());
        formula.add_clause(clause![1, -3]);
        assert_eq!(3, formula.n_vars());
        assert_eq!(1, formula.n_clauses());
        formula.add_clause(clause![-2]);
        assert_eq!(3, formula.n_vars());
        assert_eq!(2, formula.n_clauses());
    }

    #[test]
    fn test_write_dimacs() {
        let mut formula = CnfFormula::new();
        formula.add_clause(clause![1, 2]);
        formula.add_clause(clause![-1, -2]);
        formula.add_clause(clause![1]);
        let mut buffer = BufWriter::new(Vec::new());
        formula.write_dimacs(&mut buffer).unwrap();
        assert_eq!(
            "p cnf 2 3\n1 2 0\n-1 -2 0\n1 0\n",
            String::from_utf8(buffer.into_inner().unwrap()).unwrap()
        );
    }

    #[test]
    fn test_write_dimacs_empty_formula() {
        let formula = CnfFormula::new();
        let mut buffer = BufWriter::new(Vec::new());
        formula.write_dimacs(&mut buffer).unwrap();
        assert_eq!(
            "p cnf 0 0\n",
            String::from_utf8(buffer.into_inner().unwrap()).unwrap()
        );
    }
}
