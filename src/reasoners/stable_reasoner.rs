use super::specs::ExtensionReasoner;
use crate::aa::{AAFramework, Extension, ExtensionSet, LabelType, Semantics};
use std::collections::BTreeSet;

/// A reasoner for the stable semantics.
///
/// The extensions are the conflict-free sets attacking every argument they do not contain.
/// Some frameworks admit no stable extension; the computed set is then empty.
///
/// # Example
///
/// ```
/// # use exargo::aa::{AAFramework, LabelType};
/// # use exargo::reasoners::{ExtensionReasoner, StableReasoner};
/// fn enumerate_extensions<T>(af: &AAFramework<T>) where T: LabelType {
///     let reasoner = StableReasoner::new(af);
///     for ext in reasoner.compute_extensions().iter() {
///         println!("found a stable extension: {:?}", ext);
///     }
/// }
/// # enumerate_extensions::<usize>(&AAFramework::default());
/// ```
pub struct StableReasoner<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> StableReasoner<'a, T>
where
    T: LabelType,
{
    /// Builds a new reasoner for the stable semantics.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }
}

impl<T> ExtensionReasoner<T> for StableReasoner<'_, T>
where
    T: LabelType,
{
    fn af(&self) -> &AAFramework<T> {
        self.af
    }

    fn semantics(&self) -> Semantics {
        Semantics::ST
    }

    fn compute_extensions(&self) -> ExtensionSet {
        stable_extensions(self.af)
    }
}

/// Enumerates the stable extensions of a framework.
///
/// The search starts from the set of all the arguments and branches on the attacks
/// between its members, removing one of the two involved arguments at each step.
/// A branch is abandoned as soon as some argument outside the current set is not
/// attacked by it, since shrinking the set cannot make it attacked again.
fn stable_extensions<T>(af: &AAFramework<T>) -> ExtensionSet
where
    T: LabelType,
{
    let mut result = ExtensionSet::new();
    let mut visited = BTreeSet::new();
    let all = af
        .argument_set()
        .iter()
        .map(|arg| arg.id())
        .collect::<Extension>();
    let mut worklist = vec![all];
    while let Some(current) = worklist.pop() {
        if !visited.insert(current.clone()) {
            continue;
        }
        if af
            .argument_set()
            .iter()
            .any(|arg| !current.contains(arg.id()) && !current.attacks(af, arg.id()))
        {
            continue;
        }
        match first_internal_attack(af, &current) {
            None => {
                result.insert(current);
            }
            Some((from, to)) => {
                for removed in [from, to] {
                    let mut shrunk = current.clone();
                    shrunk.remove(removed);
                    worklist.push(shrunk);
                }
            }
        }
    }
    result
}

fn first_internal_attack<T>(af: &AAFramework<T>, current: &Extension) -> Option<(usize, usize)>
where
    T: LabelType,
{
    current.iter().find_map(|from| {
        af.attacked_ids_from(from)
            .find(|to| current.contains(*to))
            .map(|to| (from, to))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{AspartixReader, InstanceReader};

    #[test]
    fn test_stable_extensions_of_chain() {
        let instance = r#"
        arg(a0).
        arg(a1).
        arg(a2).
        att(a0,a1).
        att(a1,a2).
        "#;
        let reader = AspartixReader::default();
        let af = reader.read(&mut instance.as_bytes()).unwrap();
        let reasoner = StableReasoner::new(&af);
        assert_eq!(
            ExtensionSet::from_iter([Extension::from_iter([0, 2])]),
            reasoner.compute_extensions()
        );
    }

    #[test]
    fn test_no_stable_extension_for_three_cycle() {
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
        let reasoner = StableReasoner::new(&af);
        assert!(reasoner.compute_extensions().is_empty());
    }

    #[test]
    fn test_stable_extensions_of_mutual_attack() {
        let instance = r#"
        arg(a0).
        arg(a1).
        att(a0,a1).
        att(a1,a0).
        "#;
        let reader = AspartixReader::default();
        let af = reader.read(&mut instance.as_bytes()).unwrap();
        let reasoner = StableReasoner::new(&af);
        assert_eq!(
            ExtensionSet::from_iter([Extension::from_iter([0]), Extension::from_iter([1])]),
            reasoner.compute_extensions()
        );
    }

    #[test]
    fn test_stable_extensions_with_self_attacking_argument() {
        let instance = r#"
        arg(a0).
        arg(a1).
        arg(a2).
        att(a0,a1).
        att(a1,a0).
        att(a1,a2).
        att(a2,a2).
        "#;
        let reader = AspartixReader::default();
        let af = reader.read(&mut instance.as_bytes()).unwrap();
        let reasoner = StableReasoner::new(&af);
        assert_eq!(
            ExtensionSet::from_iter([Extension::from_iter([1])]),
            reasoner.compute_extensions()
        );
    }

    #[test]
    fn test_empty_af_has_the_empty_stable_extension() {
        let af = AAFramework::<String>::default();
        let reasoner = StableReasoner::new(&af);
        assert_eq!(
            ExtensionSet::from_iter([Extension::new()]),
            reasoner.compute_extensions()
        );
    }
}
