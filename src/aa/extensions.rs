use super::{AAFramework, Argument, LabelType};
use std::collections::BTreeSet;

/// A set of arguments of a framework, given by their ids.
///
/// Extensions are the objects computed by the reasoners of this crate.
/// They are kept sorted, and extension sets are ordered lexicographically
/// with respect to the argument ids, making computation results canonical.
///
/// An extension does not borrow the framework it refers to.
/// The predicates defined on extensions take the framework as a parameter;
/// they must be given the framework the ids were taken from.
///
/// # Example
///
/// ```
/// # use exargo::aa::{AAFramework, ArgumentSet, Extension};
/// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
/// let mut framework = AAFramework::new_with_argument_set(arguments);
/// framework.new_attack(&"a", &"b").unwrap();
/// framework.new_attack(&"b", &"c").unwrap();
/// let extension = Extension::from_iter([0, 2]);
/// assert!(extension.is_conflict_free(&framework));
/// assert!(extension.is_stable(&framework));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Extension(BTreeSet<usize>);

impl Extension {
    /// Builds an empty extension.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of arguments in the extension.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` iff the extension contains no argument.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` iff the extension contains the argument with the given id.
    pub fn contains(&self, arg_id: usize) -> bool {
        self.0.contains(&arg_id)
    }

    /// Adds an argument to the extension given its id.
    pub fn insert(&mut self, arg_id: usize) {
        self.0.insert(arg_id);
    }

    /// Removes an argument from the extension given its id.
    pub fn remove(&mut self, arg_id: usize) {
        self.0.remove(&arg_id);
    }

    /// Iterates over the ids of the arguments of the extension, in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// Returns `true` iff every argument of this extension belongs to the other one.
    pub fn is_subset_of(&self, other: &Extension) -> bool {
        self.0.is_subset(&other.0)
    }

    /// Maps the extension back to the arguments of a framework.
    ///
    /// # Panics
    ///
    /// Panics if an id of the extension was never attributed in the framework.
    pub fn arguments<'a, T>(&self, af: &'a AAFramework<T>) -> Vec<&'a Argument<T>>
    where
        T: LabelType,
    {
        self.iter()
            .map(|id| af.argument_set().get_argument_by_id(id))
            .collect()
    }

    /// Returns `true` iff the extension attacks the argument with the given id.
    pub fn attacks<T>(&self, af: &AAFramework<T>, arg_id: usize) -> bool
    where
        T: LabelType,
    {
        af.attacker_ids_of(arg_id).any(|a| self.contains(a))
    }

    /// Returns `true` iff no argument of the extension attacks another one (or itself).
    pub fn is_conflict_free<T>(&self, af: &AAFramework<T>) -> bool
    where
        T: LabelType,
    {
        !self
            .iter()
            .any(|a| af.attacked_ids_from(a).any(|b| self.contains(b)))
    }

    /// Returns `true` iff the extension defends the argument with the given id,
    /// that is, attacks all its attackers.
    pub fn defends<T>(&self, af: &AAFramework<T>, arg_id: usize) -> bool
    where
        T: LabelType,
    {
        af.attacker_ids_of(arg_id).all(|a| self.attacks(af, a))
    }

    /// Returns `true` iff the extension is conflict-free and defends all its arguments.
    pub fn is_admissible<T>(&self, af: &AAFramework<T>) -> bool
    where
        T: LabelType,
    {
        self.is_conflict_free(af) && self.iter().all(|a| self.defends(af, a))
    }

    /// Returns `true` iff the extension is conflict-free and attacks every argument
    /// of the framework it does not contain.
    pub fn is_stable<T>(&self, af: &AAFramework<T>) -> bool
    where
        T: LabelType,
    {
        self.is_conflict_free(af)
            && af
                .argument_set()
                .iter()
                .all(|arg| self.contains(arg.id()) || self.attacks(af, arg.id()))
    }

    /// Computes the range of the extension: its arguments and the ones it attacks.
    pub fn range<T>(&self, af: &AAFramework<T>) -> BTreeSet<usize>
    where
        T: LabelType,
    {
        let mut range = self.0.clone();
        self.iter().for_each(|a| range.extend(af.attacked_ids_from(a)));
        range
    }
}

impl FromIterator<usize> for Extension {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Extension(iter.into_iter().collect())
    }
}

/// A set of extensions, ordered lexicographically.
///
/// This is the result type of the extension computations
/// (see [`ExtensionReasoner`](crate::reasoners::ExtensionReasoner)).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtensionSet(BTreeSet<Extension>);

impl ExtensionSet {
    /// Builds an empty extension set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of extensions in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` iff the set contains no extension.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` iff the given extension belongs to the set.
    pub fn contains(&self, extension: &Extension) -> bool {
        self.0.contains(extension)
    }

    /// Adds an extension to the set.
    pub fn insert(&mut self, extension: Extension) {
        self.0.insert(extension);
    }

    /// Iterates over the extensions, in lexicographic order of their argument ids.
    pub fn iter(&self) -> impl Iterator<Item = &Extension> + '_ {
        self.0.iter()
    }
}

impl FromIterator<Extension> for ExtensionSet {
    fn from_iter<I: IntoIterator<Item = Extension>>(iter: I) -> Self {
        ExtensionSet(iter.into_iter().collect())
    }
}
