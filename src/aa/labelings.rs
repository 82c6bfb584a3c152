use super::{AAFramework, Extension, LabelType};
use std::collections::BTreeSet;

/// The status given to an argument by a labeling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgumentStatus {
    /// The argument is accepted.
    In,
    /// The argument is attacked by an accepted argument.
    Out,
    /// The argument is neither accepted nor attacked by an accepted one.
    Undec,
}

/// A labeling, partitioning the arguments of a framework into the accepted ones,
/// the ones attacked by an accepted argument, and the undecided rest.
///
/// # Example
///
/// ```
/// # use exargo::aa::{AAFramework, ArgumentSet, ArgumentStatus, Extension, Labeling};
/// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
/// let mut framework = AAFramework::new_with_argument_set(arguments);
/// framework.new_attack(&"a", &"b").unwrap();
/// let labeling = Labeling::new_for_extension(&framework, &Extension::from_iter([0]));
/// assert_eq!(Some(ArgumentStatus::In), labeling.status_of(0));
/// assert_eq!(Some(ArgumentStatus::Out), labeling.status_of(1));
/// assert_eq!(Some(ArgumentStatus::Undec), labeling.status_of(2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Labeling {
    in_set: BTreeSet<usize>,
    out_set: BTreeSet<usize>,
    undec_set: BTreeSet<usize>,
}

impl Labeling {
    /// Builds the labeling induced by an extension of a framework.
    ///
    /// The accepted arguments are the ones of the extension.
    pub fn new_for_extension<T>(af: &AAFramework<T>, extension: &Extension) -> Self
    where
        T: LabelType,
    {
        let mut in_set = BTreeSet::new();
        let mut out_set = BTreeSet::new();
        let mut undec_set = BTreeSet::new();
        for arg in af.argument_set().iter() {
            let id = arg.id();
            if extension.contains(id) {
                in_set.insert(id);
            } else if extension.attacks(af, id) {
                out_set.insert(id);
            } else {
                undec_set.insert(id);
            }
        }
        Labeling {
            in_set,
            out_set,
            undec_set,
        }
    }

    /// Returns the ids of the accepted arguments.
    pub fn in_args(&self) -> &BTreeSet<usize> {
        &self.in_set
    }

    /// Returns the ids of the arguments attacked by an accepted one.
    pub fn out_args(&self) -> &BTreeSet<usize> {
        &self.out_set
    }

    /// Returns the ids of the undecided arguments.
    pub fn undec_args(&self) -> &BTreeSet<usize> {
        &self.undec_set
    }

    /// Returns the status of the argument with the given id,
    /// or `None` if the labeling does not cover this id.
    pub fn status_of(&self, arg_id: usize) -> Option<ArgumentStatus> {
        if self.in_set.contains(&arg_id) {
            Some(ArgumentStatus::In)
        } else if self.out_set.contains(&arg_id) {
            Some(ArgumentStatus::Out)
        } else if self.undec_set.contains(&arg_id) {
            Some(ArgumentStatus::Undec)
        } else {
            None
        }
    }
}
