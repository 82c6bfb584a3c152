use crate::aa::{AAFramework, ExtensionSet, LabelType, Semantics};

/// A trait for reasoners able to enumerate the extensions of a framework under a semantics.
pub trait ExtensionReasoner<T>
where
    T: LabelType,
{
    /// Returns the framework the reasoner works on.
    fn af(&self) -> &AAFramework<T>;

    /// Returns the semantics handled by the reasoner.
    fn semantics(&self) -> Semantics;

    /// Computes the set of extensions of the framework under the semantics of the reasoner.
    ///
    /// The result is canonical: extensions are sorted in the lexicographic order
    /// of their argument ids.
    fn compute_extensions(&self) -> ExtensionSet;
}

/// The way an acceptance status is inferred from a set of extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InferenceMode {
    /// Accept an argument if it belongs to at least one extension.
    Credulous,
    /// Accept an argument if it belongs to all the extensions.
    Skeptical,
}
