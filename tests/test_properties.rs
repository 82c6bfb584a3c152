//! Cross-semantics checks running over every argumentation framework with three arguments.

use exargo::aa::{AAFramework, ArgumentSet, Extension, ExtensionSet, Semantics};
use exargo::reasoners::{reasoner_for, InferenceMode, Reasoner};
use permutator::CartesianProduct;
use std::collections::BTreeSet;

const N_ARGUMENTS: usize = 3;

fn all_three_argument_frameworks() -> Vec<AAFramework<&'static str>> {
    let domains: Vec<&[bool]> = vec![&[false, true]; N_ARGUMENTS * N_ARGUMENTS];
    let mut frameworks = Vec::new();
    domains.cart_prod().for_each(|selection| {
        let arguments = ArgumentSet::new_with_labels(&["a0", "a1", "a2"]);
        let mut af = AAFramework::new_with_argument_set(arguments);
        selection.iter().enumerate().for_each(|(i, chosen)| {
            if **chosen {
                af.new_attack_by_ids(i / N_ARGUMENTS, i % N_ARGUMENTS).unwrap();
            }
        });
        frameworks.push(af);
    });
    frameworks
}

fn extensions(af: &AAFramework<&'static str>, semantics: Semantics) -> ExtensionSet {
    reasoner_for(af, semantics).compute_extensions()
}

fn is_strict_subset(a: &Extension, b: &Extension) -> bool {
    a.is_subset_of(b) && a != b
}

#[test]
fn test_framework_generation_is_exhaustive() {
    let frameworks = all_three_argument_frameworks();
    assert_eq!(512, frameworks.len());
    assert_eq!(0, frameworks[0].n_attacks());
    assert_eq!(9, frameworks[511].n_attacks());
}

#[test]
fn test_grounded_is_the_least_complete_extension() {
    for af in all_three_argument_frameworks() {
        let grounded = extensions(&af, Semantics::GR);
        assert_eq!(1, grounded.len());
        let grounded = grounded.iter().next().unwrap().clone();
        let complete = extensions(&af, Semantics::CO);
        assert!(complete.contains(&grounded));
        assert!(complete.iter().all(|e| grounded.is_subset_of(e)));
    }
}

#[test]
fn test_complete_extensions_contain_all_the_arguments_they_defend() {
    for af in all_three_argument_frameworks() {
        for extension in extensions(&af, Semantics::CO).iter() {
            assert!(extension.is_admissible(&af));
            assert!(af
                .argument_set()
                .iter()
                .filter(|arg| extension.defends(&af, arg.id()))
                .all(|arg| extension.contains(arg.id())));
        }
    }
}

#[test]
fn test_admissible_sets_are_conflict_free() {
    for af in all_three_argument_frameworks() {
        let conflict_free = extensions(&af, Semantics::CF);
        let admissible = extensions(&af, Semantics::ADM);
        assert!(admissible.iter().all(|e| conflict_free.contains(e)));
        assert!(admissible.iter().all(|e| e.is_admissible(&af)));
    }
}

#[test]
fn test_preferred_are_the_maximal_admissible_sets() {
    for af in all_three_argument_frameworks() {
        let admissible = extensions(&af, Semantics::ADM);
        let expected = admissible
            .iter()
            .filter(|e| !admissible.iter().any(|other| is_strict_subset(e, other)))
            .cloned()
            .collect::<ExtensionSet>();
        assert_eq!(expected, extensions(&af, Semantics::PR));
    }
}

#[test]
fn test_stable_extensions_are_preferred() {
    for af in all_three_argument_frameworks() {
        let preferred = extensions(&af, Semantics::PR);
        let stable = extensions(&af, Semantics::ST);
        assert!(stable.iter().all(|e| e.is_stable(&af)));
        assert!(stable.iter().all(|e| preferred.contains(e)));
    }
}

#[test]
fn test_nonempty_stable_coincides_with_semi_stable_and_stage() {
    for af in all_three_argument_frameworks() {
        let stable = extensions(&af, Semantics::ST);
        if !stable.is_empty() {
            assert_eq!(stable, extensions(&af, Semantics::SST));
            assert_eq!(stable, extensions(&af, Semantics::STG));
        }
    }
}

#[test]
fn test_semi_stable_extensions_maximise_the_range_among_complete() {
    for af in all_three_argument_frameworks() {
        let complete = extensions(&af, Semantics::CO);
        let ranges = complete
            .iter()
            .map(|e| e.range(&af))
            .collect::<Vec<BTreeSet<usize>>>();
        let expected = complete
            .iter()
            .zip(ranges.iter())
            .filter(|(_, r)| !ranges.iter().any(|other| r.is_subset(other) && *r != other))
            .map(|(e, _)| e.clone())
            .collect::<ExtensionSet>();
        assert_eq!(expected, extensions(&af, Semantics::SST));
    }
}

#[test]
fn test_stage_extensions_maximise_the_range_among_conflict_free() {
    for af in all_three_argument_frameworks() {
        let conflict_free = extensions(&af, Semantics::CF);
        let ranges = conflict_free
            .iter()
            .map(|e| e.range(&af))
            .collect::<Vec<BTreeSet<usize>>>();
        let expected = conflict_free
            .iter()
            .zip(ranges.iter())
            .filter(|(_, r)| !ranges.iter().any(|other| r.is_subset(other) && *r != other))
            .map(|(e, _)| e.clone())
            .collect::<ExtensionSet>();
        assert_eq!(expected, extensions(&af, Semantics::STG));
    }
}

#[test]
fn test_semi_stable_stage_and_cf2_are_never_empty() {
    for af in all_three_argument_frameworks() {
        assert!(!extensions(&af, Semantics::SST).is_empty());
        assert!(!extensions(&af, Semantics::STG).is_empty());
        assert!(!extensions(&af, Semantics::CF2).is_empty());
    }
}

#[test]
fn test_cf2_extensions_are_maximal_conflict_free() {
    for af in all_three_argument_frameworks() {
        let conflict_free = extensions(&af, Semantics::CF);
        let cf2 = extensions(&af, Semantics::CF2);
        for extension in cf2.iter() {
            assert!(conflict_free.contains(extension));
            assert!(!conflict_free
                .iter()
                .any(|other| is_strict_subset(extension, other)));
        }
    }
}

#[test]
fn test_ideal_is_the_maximum_admissible_set_included_in_all_preferred() {
    for af in all_three_argument_frameworks() {
        let ideal = extensions(&af, Semantics::ID);
        assert_eq!(1, ideal.len());
        let ideal = ideal.iter().next().unwrap().clone();
        let preferred = extensions(&af, Semantics::PR);
        assert!(ideal.is_admissible(&af));
        assert!(preferred.iter().all(|e| ideal.is_subset_of(e)));
        let admissible = extensions(&af, Semantics::ADM);
        for candidate in admissible
            .iter()
            .filter(|e| preferred.iter().all(|p| e.is_subset_of(p)))
        {
            assert!(candidate.is_subset_of(&ideal));
        }
    }
}

#[test]
fn test_acceptance_queries_match_extension_membership() {
    for af in all_three_argument_frameworks() {
        for semantics in [Semantics::GR, Semantics::PR, Semantics::ST, Semantics::CF2] {
            let extension_set = extensions(&af, semantics);
            let mut reasoner = Reasoner::new(semantics);
            for arg in af.argument_set().iter() {
                let credulous = extension_set.iter().any(|e| e.contains(arg.id()));
                let skeptical = extension_set.iter().all(|e| e.contains(arg.id()));
                assert_eq!(
                    credulous,
                    reasoner
                        .query(&af, arg.label(), InferenceMode::Credulous)
                        .unwrap()
                );
                assert_eq!(
                    skeptical,
                    reasoner
                        .query(&af, arg.label(), InferenceMode::Skeptical)
                        .unwrap()
                );
            }
        }
    }
}

#[test]
fn test_self_attacking_arguments_are_never_accepted() {
    let arguments = ArgumentSet::new_with_labels(&["a0", "a1", "a2"]);
    let mut af = AAFramework::new_with_argument_set(arguments);
    af.new_attack_by_ids(0, 0).unwrap();
    af.new_attack_by_ids(0, 1).unwrap();
    for semantics in [
        Semantics::CF,
        Semantics::ADM,
        Semantics::GR,
        Semantics::CO,
        Semantics::PR,
        Semantics::ST,
        Semantics::SST,
        Semantics::STG,
        Semantics::CF2,
        Semantics::ID,
    ] {
        assert!(
            !Reasoner::new(semantics)
                .is_credulously_accepted(&af, &"a0")
                .unwrap(),
            "unexpected acceptance under {:?}",
            semantics
        );
    }
}
