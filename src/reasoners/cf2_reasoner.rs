use super::conflict_free_reasoner::conflict_free_extensions;
use super::specs::ExtensionReasoner;
use crate::aa::{AAFramework, Extension, ExtensionSet, LabelType, Semantics};
use crate::utils::keep_subset_maximal;

/// A reasoner for the CF2 semantics.
///
/// This semantics is defined recursively on the strongly connected components of
/// the attack graph: a framework made of a single component has the maximal
/// conflict-free sets as extensions, while the extensions of the other frameworks
/// are combined component by component, discarding in each component the arguments
/// attacked by the part of the extension built in the preceding components.
pub struct CF2Reasoner<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> CF2Reasoner<'a, T>
where
    T: LabelType,
{
    /// Builds a new reasoner for the CF2 semantics.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }
}

impl<T> ExtensionReasoner<T> for CF2Reasoner<'_, T>
where
    T: LabelType,
{
    fn af(&self) -> &AAFramework<T> {
        self.af
    }

    fn semantics(&self) -> Semantics {
        Semantics::CF2
    }

    fn compute_extensions(&self) -> ExtensionSet {
        cf2_extensions(self.af)
    }
}

fn cf2_extensions<T>(af: &AAFramework<T>) -> ExtensionSet
where
    T: LabelType,
{
    let sccs = af.strongly_connected_components();
    if sccs.len() <= 1 {
        return keep_subset_maximal(&conflict_free_extensions(af));
    }
    let mut partials = vec![Extension::new()];
    // the components are delivered in reverse topological order, so processing them
    // from the last to the first one guarantees all the external attackers of a
    // component belong to already processed components
    for scc in sccs.iter().rev() {
        let mut next_partials = Vec::new();
        for partial in &partials {
            let survivors = scc
                .iter()
                .copied()
                .filter(|id| !partial.attacks(af, *id))
                .collect::<Vec<usize>>();
            let restriction = af.restriction_to(&survivors);
            for sub in cf2_extensions(&restriction).iter() {
                let mut extended = partial.clone();
                sub.iter().for_each(|local_id| extended.insert(survivors[local_id]));
                next_partials.push(extended);
            }
        }
        partials = next_partials;
    }
    partials.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{AspartixReader, InstanceReader};

    #[test]
    fn test_cf2_extensions_of_three_cycle() {
        let instance = r#"
        arg(a0).
        arg(a1).
        arg(a2).
        att(a0,a1).
        att(a1,a2).
        att(a2,a0).
        "#;
        let reader = AspartixReader::default();
        let af = reader.read(&mut instance.as_bytes()).unwrap();
        let reasoner = CF2Reasoner::new(&af);
        assert_eq!(
            ExtensionSet::from_iter([
                Extension::from_iter([0]),
                Extension::from_iter([1]),
                Extension::from_iter([2]),
            ]),
            reasoner.compute_extensions()
        );
    }

    #[test]
    fn test_cf2_extensions_of_chain() {
        let instance = r#"
        arg(a0).
        arg(a1).
        arg(a2).
        att(a0,a1).
        att(a1,a2).
        "#;
        let reader = AspartixReader::default();
        let af = reader.read(&mut instance.as_bytes()).unwrap();
        let reasoner = CF2Reasoner::new(&af);
        assert_eq!(
            ExtensionSet::from_iter([Extension::from_iter([0, 2])]),
            reasoner.compute_extensions()
        );
    }

    #[test]
    fn test_cf2_extensions_combine_components() {
        let instance = r#"
        arg(a0).
        arg(a1).
        arg(a2).
        arg(a3).
        att(a0,a1).
        att(a1,a0).
        att(a1,a2).
        att(a2,a3).
        "#;
        let reader = AspartixReader::default();
        let af = reader.read(&mut instance.as_bytes()).unwrap();
        let reasoner = CF2Reasoner::new(&af);
        assert_eq!(
            ExtensionSet::from_iter([
                Extension::from_iter([0, 2]),
                Extension::from_iter([1, 3]),
            ]),
            reasoner.compute_extensions()
        );
    }

    #[test]
    fn test_cf2_accepts_cycle_arguments_defended_by_no_one() {
        // a three-cycle attacking an argument: the grounded and preferred semantics
        // leave everything undecided, while CF2 accepts one cycle argument at a time
        let instance = r#"
        arg(a0).
        arg(a1).
        arg(a2).
        arg(a3).
        att(a0,a1).
        att(a1,a2).
        att(a2,a0).
        att(a0,a3).
        "#;
        let reader = AspartixReader::default();
        let af = reader.read(&mut instance.as_bytes()).unwrap();
        let reasoner = CF2Reasoner::new(&af);
        assert_eq!(
            ExtensionSet::from_iter([
                Extension::from_iter([0]),
                Extension::from_iter([1, 3]),
                Extension::from_iter([2, 3]),
            ]),
            reasoner.compute_extensions()
        );
    }

    #[test]
    fn test_cf2_extensions_of_empty_af() {
        let af = AAFramework::<String>::default();
        let reasoner = CF2Reasoner::new(&af);
        assert_eq!(
            ExtensionSet::from_iter([Extension::new()]),
            reasoner.compute_extensions()
        );
    }
}
