//! Objects used to encode semantics into propositional formulas.

mod cnf;
pub use cnf::CnfFormula;
pub use cnf::Literal;
pub use cnf::Variable;

mod labeling_encoders;
pub use labeling_encoders::encoder_for_semantics;
pub use labeling_encoders::propositional_characterisation;
pub use labeling_encoders::AdmissibilityConstraintsEncoder;
pub use labeling_encoders::CompleteSemanticsConstraintsEncoder;
pub use labeling_encoders::ConflictFreenessConstraintsEncoder;
pub use labeling_encoders::StableSemanticsConstraintsEncoder;

mod specs;
pub use specs::ConstraintsEncoder;
