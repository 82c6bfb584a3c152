use super::specs::{ExtensionReasoner, InferenceMode};
use super::{
    AdmissibleReasoner, CF2Reasoner, CompleteReasoner, ConflictFreeReasoner, GroundedReasoner,
    IdealReasoner, PreferredReasoner, SemiStableReasoner, StableReasoner, StageReasoner,
};
use crate::aa::{AAFramework, Extension, ExtensionSet, LabelType, Semantics};
use anyhow::{Context, Result};
use std::marker::PhantomData;

/// Builds the reasoner dedicated to a semantics.
pub fn reasoner_for<'a, T>(
    af: &'a AAFramework<T>,
    semantics: Semantics,
) -> Box<dyn ExtensionReasoner<T> + 'a>
where
    T: LabelType,
{
    match semantics {
        Semantics::CF => Box::new(ConflictFreeReasoner::new(af)),
        Semantics::ADM => Box::new(AdmissibleReasoner::new(af)),
        Semantics::GR => Box::new(GroundedReasoner::new(af)),
        Semantics::CO => Box::new(CompleteReasoner::new(af)),
        Semantics::PR => Box::new(PreferredReasoner::new(af)),
        Semantics::ST => Box::new(StableReasoner::new(af)),
        Semantics::SST => Box::new(SemiStableReasoner::new(af)),
        Semantics::STG => Box::new(StageReasoner::new(af)),
        Semantics::CF2 => Box::new(CF2Reasoner::new(af)),
        Semantics::ID => Box::new(IdealReasoner::new(af)),
    }
}

/// A reasoner answering extension and acceptance queries under a given semantics.
///
/// The reasoner does not borrow the framework it queries: each operation takes it
/// as a parameter, and the computed extensions are cached together with the
/// generation of the framework they were computed against.
/// Queries made after a mutation of the framework see its generation has advanced
/// and trigger a new computation instead of returning stale extensions
/// (see [`AAFramework::generation`]).
///
/// A reasoner instance is meant to query a single framework: the cache is keyed by
/// the generation only, so feeding a reasoner with unrelated frameworks is an error
/// it cannot detect.
///
/// # Example
///
/// ```
/// # use exargo::aa::{AAFramework, ArgumentSet, Semantics};
/// # use exargo::reasoners::Reasoner;
/// let arguments = ArgumentSet::new_with_labels(&["a", "b"]);
/// let mut framework = AAFramework::new_with_argument_set(arguments);
/// framework.new_attack(&"a", &"b").unwrap();
/// let mut reasoner = Reasoner::new(Semantics::GR);
/// assert!(reasoner.is_credulously_accepted(&framework, &"a").unwrap());
/// assert!(!reasoner.is_credulously_accepted(&framework, &"b").unwrap());
/// // the framework can be updated while the reasoner exists
/// framework.new_attack(&"b", &"a").unwrap();
/// assert!(!reasoner.is_credulously_accepted(&framework, &"a").unwrap());
/// ```
pub struct Reasoner<T>
where
    T: LabelType,
{
    semantics: Semantics,
    cached_generation: Option<u64>,
    cached_extensions: ExtensionSet,
    t: PhantomData<T>,
}

impl<T> Reasoner<T>
where
    T: LabelType,
{
    /// Builds a new reasoner for a semantics.
    pub fn new(semantics: Semantics) -> Self {
        Reasoner {
            semantics,
            cached_generation: None,
            cached_extensions: ExtensionSet::new(),
            t: PhantomData,
        }
    }

    /// Returns the semantics handled by the reasoner.
    pub fn semantics(&self) -> Semantics {
        self.semantics
    }

    /// Returns the extensions of the framework.
    ///
    /// The extensions are computed again if the framework changed since the last query.
    pub fn extensions(&mut self, af: &AAFramework<T>) -> &ExtensionSet {
        let generation = af.generation();
        if self.cached_generation != Some(generation) {
            self.cached_extensions = reasoner_for(af, self.semantics).compute_extensions();
            self.cached_generation = Some(generation);
        }
        &self.cached_extensions
    }

    /// Checks the credulous acceptance of the argument with the given label,
    /// that is, its presence in at least one extension.
    ///
    /// An error is returned if no argument has such label.
    pub fn is_credulously_accepted(&mut self, af: &AAFramework<T>, label: &T) -> Result<bool> {
        let id = argument_id(af, label)?;
        Ok(self.extensions(af).iter().any(|ext| ext.contains(id)))
    }

    /// Checks the credulous acceptance of the argument with the given label,
    /// providing an extension containing it as a certificate if it is accepted.
    pub fn is_credulously_accepted_with_certificate(
        &mut self,
        af: &AAFramework<T>,
        label: &T,
    ) -> Result<(bool, Option<Extension>)> {
        let id = argument_id(af, label)?;
        Ok(
            match self.extensions(af).iter().find(|ext| ext.contains(id)) {
                Some(ext) => (true, Some(ext.clone())),
                None => (false, None),
            },
        )
    }

    /// Checks the skeptical acceptance of the argument with the given label,
    /// that is, its presence in all the extensions.
    ///
    /// An argument is skeptically accepted when there is no extension at all.
    /// An error is returned if no argument has such label.
    pub fn is_skeptically_accepted(&mut self, af: &AAFramework<T>, label: &T) -> Result<bool> {
        let id = argument_id(af, label)?;
        Ok(self.extensions(af).iter().all(|ext| ext.contains(id)))
    }

    /// Checks the skeptical acceptance of the argument with the given label,
    /// providing an extension that does not contain it as a counterexample if it is rejected.
    pub fn is_skeptically_accepted_with_certificate(
        &mut self,
        af: &AAFramework<T>,
        label: &T,
    ) -> Result<(bool, Option<Extension>)> {
        let id = argument_id(af, label)?;
        Ok(
            match self.extensions(af).iter().find(|ext| !ext.contains(id)) {
                Some(ext) => (false, Some(ext.clone())),
                None => (true, None),
            },
        )
    }

    /// Checks the acceptance of the argument with the given label under the given inference mode.
    pub fn query(&mut self, af: &AAFramework<T>, label: &T, mode: InferenceMode) -> Result<bool> {
        match mode {
            InferenceMode::Credulous => self.is_credulously_accepted(af, label),
            InferenceMode::Skeptical => self.is_skeptically_accepted(af, label),
        }
    }
}

fn argument_id<T>(af: &AAFramework<T>, label: &T) -> Result<usize>
where
    T: LabelType,
{
    Ok(af
        .argument_set()
        .get_argument(label)
        .with_context(|| format!("while checking the acceptance of {:?}", label))?
        .id())
}
