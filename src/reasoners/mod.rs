//! This module contains the reasoners dedicated to each semantics
//! and the inference layer answering acceptance queries.

mod admissible_reasoner;
pub use admissible_reasoner::AdmissibleReasoner;

mod cf2_reasoner;
pub use cf2_reasoner::CF2Reasoner;

mod complete_reasoner;
pub use complete_reasoner::CompleteReasoner;

mod conflict_free_reasoner;
pub use conflict_free_reasoner::ConflictFreeReasoner;

mod grounded_reasoner;
pub use grounded_reasoner::GroundedReasoner;

mod ideal_reasoner;
pub use ideal_reasoner::IdealReasoner;

mod maximal_range_reasoners;
pub use maximal_range_reasoners::SemiStableReasoner;
pub use maximal_range_reasoners::StageReasoner;

mod preferred_reasoner;
pub use preferred_reasoner::PreferredReasoner;

mod reasoner;
pub use reasoner::reasoner_for;
pub use reasoner::Reasoner;

mod specs;
pub use specs::ExtensionReasoner;
pub use specs::InferenceMode;

mod stable_reasoner;
pub use stable_reasoner::StableReasoner;
