use super::conflict_free_reasoner::conflict_free_extensions;
use super::specs::ExtensionReasoner;
use crate::aa::{AAFramework, ExtensionSet, LabelType, Semantics};

/// A reasoner for the admissibility semantics.
///
/// The extensions are the conflict-free sets that defend each of their members
/// against all its attackers.
pub struct AdmissibleReasoner<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> AdmissibleReasoner<'a, T>
where
    T: LabelType,
{
    /// Builds a new reasoner for the admissibility semantics.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }
}

impl<T> ExtensionReasoner<T> for AdmissibleReasoner<'_, T>
where
    T: LabelType,
{
    fn af(&self) -> &AAFramework<T> {
        self.af
    }

    fn semantics(&self) -> Semantics {
        Semantics::ADM
    }

    fn compute_extensions(&self) -> ExtensionSet {
        admissible_extensions(self.af)
    }
}

/// Enumerates the admissible sets of a framework.
pub(crate) fn admissible_extensions<T>(af: &AAFramework<T>) -> ExtensionSet
where
    T: LabelType,
{
    conflict_free_extensions(af)
        .iter()
        .filter(|ext| ext.iter().all(|arg| ext.defends(af, arg)))
        .cloned()
        .collect()
}
