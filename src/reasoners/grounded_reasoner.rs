use super::specs::ExtensionReasoner;
use crate::aa::{AAFramework, ExtensionSet, LabelType, Semantics};
use crate::utils::grounded_extension;

/// A reasoner for the grounded semantics.
///
/// The single extension under this semantics is the least fixed point of the
/// characteristic function of the framework.
pub struct GroundedReasoner<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> GroundedReasoner<'a, T>
where
    T: LabelType,
{
    /// Builds a new reasoner for the grounded semantics.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }
}

impl<T> ExtensionReasoner<T> for GroundedReasoner<'_, T>
where
    T: LabelType,
{
    fn af(&self) -> &AAFramework<T> {
        self.af
    }

    fn semantics(&self) -> Semantics {
        Semantics::GR
    }

    fn compute_extensions(&self) -> ExtensionSet {
        ExtensionSet::from_iter([grounded_extension(self.af)])
    }
}
