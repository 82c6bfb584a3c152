use super::specs::ExtensionReasoner;
use crate::aa::{AAFramework, Extension, ExtensionSet, LabelType, Semantics};

/// A reasoner for the conflict-freeness semantics.
///
/// The extensions are the sets of arguments that contain no attack between their members.
///
/// # Example
///
/// ```
/// # use exargo::aa::{AAFramework, LabelType};
/// # use exargo::reasoners::{ConflictFreeReasoner, ExtensionReasoner};
/// fn enumerate_extensions<T>(af: &AAFramework<T>) where T: LabelType {
///     let reasoner = ConflictFreeReasoner::new(af);
///     for ext in reasoner.compute_extensions().iter() {
///         println!("found a conflict-free extension: {:?}", ext);
///     }
/// }
/// # enumerate_extensions::<usize>(&AAFramework::default());
/// ```
pub struct ConflictFreeReasoner<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> ConflictFreeReasoner<'a, T>
where
    T: LabelType,
{
    /// Builds a new reasoner for the conflict-freeness semantics.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }
}

impl<T> ExtensionReasoner<T> for ConflictFreeReasoner<'_, T>
where
    T: LabelType,
{
    fn af(&self) -> &AAFramework<T> {
        self.af
    }

    fn semantics(&self) -> Semantics {
        Semantics::CF
    }

    fn compute_extensions(&self) -> ExtensionSet {
        conflict_free_extensions(self.af)
    }
}

/// Enumerates the conflict-free sets of a framework.
///
/// The search grows candidate sets one argument at a time, in increasing id order,
/// so that each conflict-free set is visited exactly once.
pub(crate) fn conflict_free_extensions<T>(af: &AAFramework<T>) -> ExtensionSet
where
    T: LabelType,
{
    let candidates = af
        .argument_set()
        .iter()
        .map(|arg| arg.id())
        .collect::<Vec<usize>>();
    let mut result = ExtensionSet::new();
    let mut worklist = vec![(Extension::new(), 0)];
    while let Some((current, next_candidate)) = worklist.pop() {
        for i in next_candidate..candidates.len() {
            if can_extend(af, &current, candidates[i]) {
                let mut extended = current.clone();
                extended.insert(candidates[i]);
                worklist.push((extended, i + 1));
            }
        }
        result.insert(current);
    }
    result
}

/// Checks that adding an argument to a conflict-free set keeps it conflict-free.
pub(crate) fn can_extend<T>(af: &AAFramework<T>, current: &Extension, candidate: usize) -> bool
where
    T: LabelType,
{
    !af.attacker_ids_of(candidate)
        .any(|a| a == candidate || current.contains(a))
        && !af
            .attacked_ids_from(candidate)
            .any(|b| current.contains(b))
}
