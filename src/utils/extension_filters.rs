use crate::aa::{AAFramework, Extension, ExtensionSet, Labeling, LabelType};
use std::collections::BTreeSet;

/// Filters an extension set, keeping the extensions that are maximal with respect to inclusion.
pub fn keep_subset_maximal(extensions: &ExtensionSet) -> ExtensionSet {
    extensions
        .iter()
        .filter(|ext| {
            !extensions
                .iter()
                .any(|other| ext.len() < other.len() && ext.is_subset_of(other))
        })
        .cloned()
        .collect()
}

/// Filters an extension set, keeping the extensions whose set of undecided arguments
/// is minimal with respect to inclusion.
///
/// An argument is undecided for an extension if it does not belong to it and is not
/// attacked by it. Minimizing the undecided arguments amounts to maximizing the range.
pub fn keep_undec_minimal<T>(af: &AAFramework<T>, extensions: &ExtensionSet) -> ExtensionSet
where
    T: LabelType,
{
    let undec_sets = extensions
        .iter()
        .map(|ext| {
            let undec = Labeling::new_for_extension(af, ext).undec_args().clone();
            (ext.clone(), undec)
        })
        .collect::<Vec<(Extension, BTreeSet<usize>)>>();
    undec_sets
        .iter()
        .filter(|(_, undec)| {
            !undec_sets
                .iter()
                .any(|(_, other)| other.len() < undec.len() && other.is_subset(undec))
        })
        .map(|(ext, _)| ext.clone())
        .collect()
}
