use super::complete_reasoner::complete_extensions;
use super::specs::ExtensionReasoner;
use crate::aa::{AAFramework, ExtensionSet, LabelType, Semantics};
use crate::utils::keep_subset_maximal;

/// A reasoner for the preferred semantics.
///
/// The extensions are the complete extensions that are maximal with respect to inclusion.
pub struct PreferredReasoner<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> PreferredReasoner<'a, T>
where
    T: LabelType,
{
    /// Builds a new reasoner for the preferred semantics.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }
}

impl<T> ExtensionReasoner<T> for PreferredReasoner<'_, T>
where
    T: LabelType,
{
    fn af(&self) -> &AAFramework<T> {
        self.af
    }

    fn semantics(&self) -> Semantics {
        Semantics::PR
    }

    fn compute_extensions(&self) -> ExtensionSet {
        preferred_extensions(self.af)
    }
}

/// Enumerates the preferred extensions of a framework.
pub(crate) fn preferred_extensions<T>(af: &AAFramework<T>) -> ExtensionSet
where
    T: LabelType,
{
    keep_subset_maximal(&complete_extensions(af))
}
