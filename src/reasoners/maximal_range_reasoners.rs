use super::complete_reasoner::complete_extensions;
use super::conflict_free_reasoner::conflict_free_extensions;
use super::specs::ExtensionReasoner;
use crate::aa::{AAFramework, ExtensionSet, LabelType, Semantics};
use crate::utils::keep_undec_minimal;

macro_rules! maximal_range_reasoner {
    ($reasoner_ident:ident, $sem_name:literal, $semantics:expr, $base_family:ident) => {
        #[doc = concat!("A reasoner for the ", $sem_name, " semantics.")]
        ///
        #[doc = concat!("The extensions are the ", $sem_name, " base extensions whose range (the set of the arguments they contain or attack) is maximal with respect to inclusion.")]
        pub struct $reasoner_ident<'a, T>
        where
            T: LabelType,
        {
            af: &'a AAFramework<T>,
        }

        impl<'a, T> $reasoner_ident<'a, T>
        where
            T: LabelType,
        {
            /// Builds a new reasoner for this semantics.
            pub fn new(af: &'a AAFramework<T>) -> Self {
                Self { af }
            }
        }

        impl<T> ExtensionReasoner<T> for $reasoner_ident<'_, T>
        where
            T: LabelType,
        {
            fn af(&self) -> &AAFramework<T> {
                self.af
            }

            fn semantics(&self) -> Semantics {
                $semantics
            }

            fn compute_extensions(&self) -> ExtensionSet {
                keep_undec_minimal(self.af, &$base_family(self.af))
            }
        }
    };
}

maximal_range_reasoner!(
    SemiStableReasoner,
    "semi-stable",
    Semantics::SST,
    complete_extensions
);

maximal_range_reasoner!(
    StageReasoner,
    "stage",
    Semantics::STG,
    conflict_free_extensions
);
