use super::admissible_reasoner::admissible_extensions;
use super::preferred_reasoner::preferred_extensions;
use super::specs::ExtensionReasoner;
use crate::aa::{AAFramework, ExtensionSet, LabelType, Semantics};
use crate::utils::keep_subset_maximal;

/// A reasoner for the ideal semantics.
///
/// The single extension under this semantics is the biggest admissible set included
/// in all the preferred extensions.
pub struct IdealReasoner<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> IdealReasoner<'a, T>
where
    T: LabelType,
{
    /// Builds a new reasoner for the ideal semantics.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }
}

impl<T> ExtensionReasoner<T> for IdealReasoner<'_, T>
where
    T: LabelType,
{
    fn af(&self) -> &AAFramework<T> {
        self.af
    }

    fn semantics(&self) -> Semantics {
        Semantics::ID
    }

    fn compute_extensions(&self) -> ExtensionSet {
        let preferred = preferred_extensions(self.af);
        let candidates = admissible_extensions(self.af)
            .iter()
            .filter(|ext| preferred.iter().all(|p| ext.is_subset_of(p)))
            .cloned()
            .collect::<ExtensionSet>();
        // the empty set is always a candidate, so a maximal one exists
        let ideal = keep_subset_maximal(&candidates)
            .iter()
            .next()
            .cloned()
            .unwrap_or_default();
        ExtensionSet::from_iter([ideal])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::Extension;
    use crate::io::{AspartixReader, InstanceReader};

    #[test]
    fn test_ideal_extension_of_chain() {
        let instance = r#"
        arg(a0).
        arg(a1).
        arg(a2).
        att(a0,a1).
        att(a1,a2).
        "#;
        let reader = AspartixReader::default();
        let af = reader.read(&mut instance.as_bytes()).unwrap();
        let reasoner = IdealReasoner::new(&af);
        assert_eq!(
            ExtensionSet::from_iter([Extension::from_iter([0, 2])]),
            reasoner.compute_extensions()
        );
    }

    #[test]
    fn test_ideal_extension_of_mutual_attack_is_empty() {
        let instance = r#"
        arg(a0).
        arg(a1).
        att(a0,a1).
        att(a1,a0).
        "#;
        let reader = AspartixReader::default();
        let af = reader.read(&mut instance.as_bytes()).unwrap();
        let reasoner = IdealReasoner::new(&af);
        assert_eq!(
            ExtensionSet::from_iter([Extension::new()]),
            reasoner.compute_extensions()
        );
    }

    #[test]
    fn test_ideal_extension_may_reject_skeptically_accepted_arguments() {
        // a3 belongs to all the preferred extensions but no admissible subset
        // of their intersection contains it
        let instance = r#"
        arg(a0).
        arg(a1).
        arg(a2).
        arg(a3).
        att(a0,a1).
        att(a1,a0).
        att(a0,a2).
        att(a1,a2).
        att(a2,a3).
        "#;
        let reader = AspartixReader::default();
        let af = reader.read(&mut instance.as_bytes()).unwrap();
        let reasoner = IdealReasoner::new(&af);
        assert_eq!(
            ExtensionSet::from_iter([Extension::new()]),
            reasoner.compute_extensions()
        );
    }

    #[test]
    fn test_ideal_extension_grows_beyond_grounded() {
        // the mutual attack between a0 and a1 keeps the grounded extension empty,
        // but a3 is defended by the admissible set {a3}
        let instance = r#"
        arg(a0).
        arg(a1).
        arg(a2).
        arg(a3).
        att(a0,a1).
        att(a1,a0).
        att(a2,a3).
        att(a3,a2).
        att(a0,a2).
        att(a1,a2).
        "#;
        let reader = AspartixReader::default();
        let af = reader.read(&mut instance.as_bytes()).unwrap();
        let reasoner = IdealReasoner::new(&af);
        assert_eq!(
            ExtensionSet::from_iter([Extension::from_iter([3])]),
            reasoner.compute_extensions()
        );
    }
}
