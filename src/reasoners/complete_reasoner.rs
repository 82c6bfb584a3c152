use super::conflict_free_reasoner::can_extend;
use super::specs::ExtensionReasoner;
use crate::aa::{AAFramework, Extension, ExtensionSet, LabelType, Semantics};
use crate::utils::{characteristic_function, grounded_extension};

/// A reasoner for the complete semantics.
///
/// The extensions are the conflict-free fixed points of the characteristic function
/// of the framework.
///
/// # Example
///
/// ```
/// # use exargo::aa::{AAFramework, LabelType};
/// # use exargo::reasoners::{CompleteReasoner, ExtensionReasoner};
/// fn enumerate_extensions<T>(af: &AAFramework<T>) where T: LabelType {
///     let reasoner = CompleteReasoner::new(af);
///     for ext in reasoner.compute_extensions().iter() {
///         println!("found a complete extension: {:?}", ext);
///     }
/// }
/// # enumerate_extensions::<usize>(&AAFramework::default());
/// ```
pub struct CompleteReasoner<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> CompleteReasoner<'a, T>
where
    T: LabelType,
{
    /// Builds a new reasoner for the complete semantics.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }
}

impl<T> ExtensionReasoner<T> for CompleteReasoner<'_, T>
where
    T: LabelType,
{
    fn af(&self) -> &AAFramework<T> {
        self.af
    }

    fn semantics(&self) -> Semantics {
        Semantics::CO
    }

    fn compute_extensions(&self) -> ExtensionSet {
        complete_extensions(self.af)
    }
}

/// Enumerates the complete extensions of a framework.
///
/// Every complete extension contains the grounded one, so the search explores the
/// conflict-free supersets of the grounded extension, growing them in increasing
/// id order, and keeps the fixed points of the characteristic function.
pub(crate) fn complete_extensions<T>(af: &AAFramework<T>) -> ExtensionSet
where
    T: LabelType,
{
    let grounded = grounded_extension(af);
    let candidates = af
        .argument_set()
        .iter()
        .map(|arg| arg.id())
        .filter(|id| !grounded.contains(*id))
        .collect::<Vec<usize>>();
    let mut result = ExtensionSet::new();
    let mut worklist = vec![(grounded, 0)];
    while let Some((current, next_candidate)) = worklist.pop() {
        for i in next_candidate..candidates.len() {
            if can_extend(af, &current, candidates[i]) {
                let mut extended = current.clone();
                extended.insert(candidates[i]);
                worklist.push((extended, i + 1));
            }
        }
        if characteristic_function(af, &current) == current {
            result.insert(current);
        }
    }
    result
}
