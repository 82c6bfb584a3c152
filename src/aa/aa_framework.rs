use super::{Argument, ArgumentSet, LabelType};
use crate::utils::scc_computer;
use anyhow::{anyhow, Context, Result};

/// An Abstract Argumentation framework as defined in Dung semantics.
///
/// The framework maintains, in addition to its set of arguments and attacks,
/// two adjacency indices giving for each argument the attacks it is the source
/// or the target of. Every mutation keeps the indices and the attack set
/// consistent and advances a generation counter, allowing cached computations
/// to detect they are outdated (see [`Reasoner`](crate::reasoners::Reasoner)).
#[derive(Default)]
pub struct AAFramework<T>
where
    T: LabelType,
{
    arguments: ArgumentSet<T>,
    attacks: Vec<Option<(usize, usize)>>,
    attacks_from: Vec<Vec<usize>>,
    attacks_to: Vec<Vec<usize>>,
    n_removed_attacks: usize,
    generation: u64,
}

/// An attack, represented as a couple of two arguments.
///
/// Attacks are built by [`AAFramework`] objects.
pub struct Attack<'a, T>(&'a Argument<T>, &'a Argument<T>)
where
    T: LabelType;

impl<'a, T> Attack<'a, T>
where
    T: LabelType,
{
    /// Returns the attacker.
    ///
    /// # Example
    ///
    /// ```
    /// # use exargo::aa::{Attack, LabelType};
    /// fn describe_attack<T: LabelType>(attack: &Attack<T>) {
    ///     println!("{} attacks {}", attack.attacker(), attack.attacked());
    /// }
    /// ```
    pub fn attacker(&self) -> &'a Argument<T> {
        self.0
    }

    /// Returns the attacked argument.
    ///
    /// # Example
    ///
    /// ```
    /// # use exargo::aa::{Attack, LabelType};
    /// fn describe_attack<T: LabelType>(attack: &Attack<T>) {
    ///     println!("{} attacks {}", attack.attacker(), attack.attacked());
    /// }
    /// ```
    pub fn attacked(&self) -> &'a Argument<T> {
        self.1
    }
}

impl<T> AAFramework<T>
where
    T: LabelType,
{
    /// Builds an AA framework.
    ///
    /// The set of arguments used in the framework is provided.
    ///
    /// # Arguments
    ///
    /// * `arguments` - the set of arguments
    ///
    /// # Example
    ///
    /// ```
    /// # use exargo::aa::{ArgumentSet, AAFramework};
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
    /// let framework = AAFramework::new_with_argument_set(arguments);
    /// assert_eq!(3, framework.argument_set().len());
    /// assert_eq!(0, framework.iter_attacks().count());
    /// ```
    pub fn new_with_argument_set(arguments: ArgumentSet<T>) -> Self {
        let n_ids = arguments.max_id().map_or(0, |m| m + 1);
        AAFramework {
            arguments,
            attacks: vec![],
            attacks_from: (0..n_ids).map(|_| vec![]).collect(),
            attacks_to: (0..n_ids).map(|_| vec![]).collect(),
            n_removed_attacks: 0,
            generation: 0,
        }
    }

    /// Adds a new argument to this argumentation framework.
    ///
    /// If an argument with the same label is already defined, nothing is changed.
    pub fn new_argument(&mut self, label: T) {
        let id = self.arguments.new_argument(label);
        if id == self.attacks_from.len() {
            self.attacks_from.push(Vec::new());
            self.attacks_to.push(Vec::new());
            self.generation += 1;
        }
    }

    /// Removes an argument from this argumentation framework, returning it.
    ///
    /// The attacks involving the argument are also removed.
    /// The argument id will not be attributed to new arguments.
    ///
    /// If no argument has the given label, nothing is changed and `None` is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use exargo::aa::{ArgumentSet, AAFramework};
    /// let labels = vec!["a", "b"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// let mut framework = AAFramework::new_with_argument_set(arguments);
    /// framework.new_attack(&"a", &"b").unwrap();
    /// framework.remove_argument(&"b");
    /// assert_eq!(1, framework.n_arguments());
    /// assert_eq!(0, framework.n_attacks());
    /// assert!(framework.remove_argument(&"b").is_none());
    /// ```
    pub fn remove_argument(&mut self, label: &T) -> Option<Argument<T>> {
        let removed = self.arguments.remove_argument(label)?;
        let removed_id = removed.id();
        let attacks = &mut self.attacks;
        let mut n_removed_attacks = 0;
        self.attacks_from[removed_id]
            .iter()
            .chain(self.attacks_to[removed_id].iter())
            .for_each(|i| {
                if attacks[*i].take().is_some() {
                    n_removed_attacks += 1;
                }
            });
        self.n_removed_attacks += n_removed_attacks;
        self.attacks_from[removed_id].clear();
        self.attacks_to[removed_id].clear();
        self.generation += 1;
        Some(removed)
    }

    /// Adds a new attack given the labels of the source and destination arguments.
    ///
    /// If one of the provided arguments is undefined, an error is returned.
    /// If the attack is already present, nothing is changed.
    ///
    /// # Arguments
    ///
    /// * `from` - the label of the source argument (attacker)
    /// * `to` - the label of the destination argument (attacked)
    ///
    /// # Example
    ///
    /// ```
    /// # use exargo::aa::{ArgumentSet, AAFramework};
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// let mut framework = AAFramework::new_with_argument_set(arguments);
    /// assert_eq!(0, framework.iter_attacks().count());
    /// framework.new_attack(&labels[0], &labels[1]).unwrap();
    /// framework.new_attack(&labels[0], &labels[1]).unwrap();
    /// assert_eq!(1, framework.iter_attacks().count());
    /// ```
    pub fn new_attack(&mut self, from: &T, to: &T) -> Result<()> {
        let context = || format!("cannot add an attack from {:?} to {:?}", from, to);
        let attacker_id = self
            .arguments
            .get_argument_index(from)
            .with_context(context)?;
        let attacked_id = self
            .arguments
            .get_argument_index(to)
            .with_context(context)?;
        self.push_attack(attacker_id, attacked_id);
        Ok(())
    }

    /// Adds a new attack given the ids of the source and destination arguments.
    ///
    /// If one of the provided ids refers to no argument, an error is returned.
    /// If the attack is already present, nothing is changed.
    ///
    /// # Arguments
    ///
    /// * `from` - the id of the source argument (attacker)
    /// * `to` - the id of the destination argument (attacked)
    ///
    /// # Example
    ///
    /// ```
    /// # use exargo::aa::{ArgumentSet, AAFramework};
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// let mut framework = AAFramework::new_with_argument_set(arguments);
    /// assert_eq!(0, framework.iter_attacks().count());
    /// framework.new_attack_by_ids(0, 1).unwrap(); // "a" attacks "b"
    /// assert_eq!(1, framework.iter_attacks().count());
    /// ```
    pub fn new_attack_by_ids(&mut self, from: usize, to: usize) -> Result<()> {
        if !self.arguments.has_argument_with_id(from) || !self.arguments.has_argument_with_id(to) {
            return Err(anyhow!(
                "cannot add an attack from id {} to id {}: no such argument",
                from,
                to,
            ));
        }
        self.push_attack(from, to);
        Ok(())
    }

    fn push_attack(&mut self, from: usize, to: usize) {
        if self.is_attacked_by(to, from) {
            return;
        }
        self.attacks.push(Some((from, to)));
        self.attacks_from[from].push(self.attacks.len() - 1);
        self.attacks_to[to].push(self.attacks.len() - 1);
        self.generation += 1;
    }

    /// Removes an attack given the labels of the source and destination arguments.
    ///
    /// If one of the provided arguments is undefined, an error is returned.
    /// If both arguments exist but no such attack is present, nothing is changed.
    pub fn remove_attack(&mut self, from: &T, to: &T) -> Result<()> {
        let context = || format!("while removing an attack from {:?} to {:?}", from, to);
        let attacker_id = self
            .arguments
            .get_argument_index(from)
            .with_context(context)?;
        let attacked_id = self
            .arguments
            .get_argument_index(to)
            .with_context(context)?;
        let attack_id = self.attacks_from[attacker_id]
            .iter()
            .find(|i| self.attacks[**i] == Some((attacker_id, attacked_id)))
            .copied();
        if let Some(attack_id) = attack_id {
            self.attacks[attack_id] = None;
            self.attacks_from[attacker_id].retain(|i| *i != attack_id);
            self.attacks_to[attacked_id].retain(|i| *i != attack_id);
            self.n_removed_attacks += 1;
            self.generation += 1;
        }
        Ok(())
    }

    /// Returns the argument set of the framework.
    ///
    /// # Example
    ///
    /// ```
    /// # use exargo::aa::{ArgumentSet, AAFramework};
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// let framework = AAFramework::new_with_argument_set(arguments);
    /// assert_eq!(3, framework.argument_set().len());
    /// ```
    pub fn argument_set(&self) -> &ArgumentSet<T> {
        &self.arguments
    }

    /// Provides an iterator to the attacks.
    pub fn iter_attacks(&self) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.attacks
            .iter()
            .filter_map(|o| o.as_ref())
            .map(|(a, b)| {
                Attack(
                    self.arguments.get_argument_by_id(*a),
                    self.arguments.get_argument_by_id(*b),
                )
            })
    }

    /// Provides an iterator to the attacks that have the given argument as attacker.
    pub fn iter_attacks_from(&self, arg: &Argument<T>) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.attacks_from[arg.id()]
            .iter()
            .filter_map(|i| self.attacks[*i].as_ref())
            .map(|(a, b)| {
                Attack(
                    self.arguments.get_argument_by_id(*a),
                    self.arguments.get_argument_by_id(*b),
                )
            })
    }

    /// Provides an iterator to the attacks that have the given argument as attacked.
    pub fn iter_attacks_to(&self, arg: &Argument<T>) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.attacks_to[arg.id()]
            .iter()
            .filter_map(|i| self.attacks[*i].as_ref())
            .map(|(a, b)| {
                Attack(
                    self.arguments.get_argument_by_id(*a),
                    self.arguments.get_argument_by_id(*b),
                )
            })
    }

    /// Provides an iterator to the ids of the arguments attacking the one with the given id.
    ///
    /// # Panics
    ///
    /// Panics if the id was never attributed to an argument.
    pub fn attacker_ids_of(&self, arg_id: usize) -> impl Iterator<Item = usize> + '_ {
        self.attacks_to[arg_id]
            .iter()
            .filter_map(|i| self.attacks[*i].map(|(a, _)| a))
    }

    /// Provides an iterator to the ids of the arguments attacked by the one with the given id.
    ///
    /// # Panics
    ///
    /// Panics if the id was never attributed to an argument.
    pub fn attacked_ids_from(&self, arg_id: usize) -> impl Iterator<Item = usize> + '_ {
        self.attacks_from[arg_id]
            .iter()
            .filter_map(|i| self.attacks[*i].map(|(_, b)| b))
    }

    /// Returns `true` iff the argument with id `attacked_id` is attacked by the one with id `attacker_id`.
    ///
    /// # Panics
    ///
    /// Panics if `attacked_id` was never attributed to an argument.
    pub fn is_attacked_by(&self, attacked_id: usize, attacker_id: usize) -> bool {
        self.attacker_ids_of(attacked_id).any(|a| a == attacker_id)
    }

    /// Computes the strongly connected components of the attack graph.
    ///
    /// Each component is given as a sorted vector of argument ids.
    /// The components are returned in reverse topological order: a component
    /// attacking another one appears after it in the result.
    ///
    /// # Example
    ///
    /// ```
    /// # use exargo::aa::{ArgumentSet, AAFramework};
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
    /// let mut framework = AAFramework::new_with_argument_set(arguments);
    /// framework.new_attack(&"a", &"b").unwrap();
    /// framework.new_attack(&"b", &"a").unwrap();
    /// framework.new_attack(&"b", &"c").unwrap();
    /// let sccs = framework.strongly_connected_components();
    /// assert_eq!(vec![vec![2], vec![0, 1]], sccs);
    /// ```
    pub fn strongly_connected_components(&self) -> Vec<Vec<usize>> {
        scc_computer::strongly_connected_components(self)
    }

    /// Builds the framework induced by a subset of the arguments.
    ///
    /// The restriction contains the arguments whose ids are provided and the attacks
    /// of this framework involving only such arguments.
    /// The labels are unchanged but the ids are reattributed: the argument given by
    /// the id at index `i` of the slice gets the id `i` in the restriction.
    ///
    /// # Panics
    ///
    /// Panics if one of the ids was never attributed to an argument.
    pub fn restriction_to(&self, arg_ids: &[usize]) -> AAFramework<T> {
        let labels: Vec<T> = arg_ids
            .iter()
            .map(|id| self.arguments.get_argument_by_id(*id).label().clone())
            .collect();
        let mut restriction = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&labels));
        let mut id_mapping = vec![None; self.arguments.max_id().map_or(0, |m| m + 1)];
        arg_ids
            .iter()
            .enumerate()
            .for_each(|(new_id, old_id)| id_mapping[*old_id] = Some(new_id));
        self.attacks.iter().filter_map(|o| o.as_ref()).for_each(|(from, to)| {
            if let (Some(new_from), Some(new_to)) = (id_mapping[*from], id_mapping[*to]) {
                restriction.push_attack(new_from, new_to);
            }
        });
        restriction.generation = 0;
        restriction
    }

    /// Returns the number of arguments in this framework.
    ///
    /// # Example
    ///
    /// ```
    /// # use exargo::aa::{ArgumentSet, AAFramework};
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// let framework = AAFramework::new_with_argument_set(arguments);
    /// assert_eq!(3, framework.n_arguments());
    /// ```
    pub fn n_arguments(&self) -> usize {
        self.argument_set().len()
    }

    /// Returns the maximal argument id given so far, or `None` if there are no arguments.
    ///
    /// This id may refer to a removed argument.
    pub fn max_argument_id(&self) -> Option<usize> {
        self.argument_set().max_id()
    }

    /// Returns the number of attacks in this framework.
    ///
    /// # Example
    ///
    /// ```
    /// # use exargo::aa::{ArgumentSet, AAFramework};
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// let mut framework = AAFramework::new_with_argument_set(arguments);
    /// assert_eq!(0, framework.n_attacks());
    /// framework.new_attack_by_ids(0, 1).unwrap(); // "a" attacks "b"
    /// assert_eq!(1, framework.n_attacks());
    /// ```
    pub fn n_attacks(&self) -> usize {
        self.attacks.len() - self.n_removed_attacks
    }

    /// Returns the generation of this framework.
    ///
    /// The generation starts at 0 and is advanced by every effective mutation.
    /// Mutations that change nothing (adding an already present attack or
    /// argument, removing a missing one) leave it untouched.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_n_args() {
        let arg_labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_labels);
        let af = AAFramework::new_with_argument_set(args);
        assert_eq!(3, af.n_arguments());
    }

    #[test]
    fn test_new_attack_ok() {
        let arg_labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_labels);
        let mut attacks = AAFramework::new_with_argument_set(args);
        assert_eq!(0, attacks.n_attacks());
        attacks.new_attack(&arg_labels[0], &arg_labels[0]).unwrap();
        assert_eq!(1, attacks.n_attacks());
        assert_eq!((0, 0), attacks.attacks[0].unwrap());
    }

    #[test]
    fn test_new_attack_unknown_label_1() {
        let arg_labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_labels);
        let mut attacks = AAFramework::new_with_argument_set(args);
        attacks
            .new_attack(&"d".to_string(), &arg_labels[0])
            .unwrap_err();
    }

    #[test]
    fn test_new_attack_unknown_label_2() {
        let arg_labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_labels);
        let mut attacks = AAFramework::new_with_argument_set(args);
        attacks
            .new_attack(&arg_labels[0], &"d".to_string())
            .unwrap_err();
    }

    #[test]
    fn test_new_attack_is_idempotent() {
        let arg_labels = vec!["a".to_string(), "b".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_labels);
        let mut af = AAFramework::new_with_argument_set(args);
        af.new_attack(&arg_labels[0], &arg_labels[1]).unwrap();
        let generation = af.generation();
        af.new_attack(&arg_labels[0], &arg_labels[1]).unwrap();
        af.new_attack_by_ids(0, 1).unwrap();
        assert_eq!(1, af.n_attacks());
        assert_eq!(generation, af.generation());
    }

    #[test]
    fn test_new_attack_by_ids_ok() {
        let arg_labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_labels);
        let mut attacks = AAFramework::new_with_argument_set(args);
        assert_eq!(0, attacks.n_attacks());
        attacks.new_attack_by_ids(0, 0).unwrap();
        assert_eq!(1, attacks.n_attacks());
        assert_eq!((0, 0), attacks.attacks[0].unwrap());
    }

    #[test]
    fn test_new_attack_by_ids_unknown_id_1() {
        let arg_labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_labels);
        let mut attacks = AAFramework::new_with_argument_set(args);
        attacks.new_attack_by_ids(3, 0).unwrap_err();
    }

    #[test]
    fn test_new_attack_by_ids_unknown_id_2() {
        let arg_labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_labels);
        let mut attacks = AAFramework::new_with_argument_set(args);
        attacks.new_attack_by_ids(0, 3).unwrap_err();
    }

    #[test]
    fn test_new_argument() {
        let arg_labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_labels);
        let mut af = AAFramework::new_with_argument_set(args);
        af.new_argument("d".to_string());
        assert_eq!(4, af.n_arguments());
        let generation = af.generation();
        af.new_argument("d".to_string());
        assert_eq!(4, af.n_arguments());
        assert_eq!(generation, af.generation());
    }

    #[test]
    fn test_remove_attack() {
        let arg_labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_labels);
        let mut af = AAFramework::new_with_argument_set(args);
        assert_eq!(0, af.n_attacks());
        for i in 0..3 {
            for j in 0..3 {
                af.new_attack(&arg_labels[i], &arg_labels[j]).unwrap();
            }
        }
        assert_eq!(9, af.n_attacks());
        assert!(af.remove_attack(&arg_labels[0], &arg_labels[0]).is_ok());
        assert_eq!(8, af.n_attacks());
        let generation = af.generation();
        assert!(af.remove_attack(&arg_labels[0], &arg_labels[0]).is_ok());
        assert_eq!(8, af.n_attacks());
        assert_eq!(generation, af.generation());
        assert!(af.remove_attack(&arg_labels[0], &"d".to_string()).is_err());
        assert!(af
            .iter_attacks()
            .all(|att| att.attacker().label() != "a" || att.attacked().label() != "a"));
    }

    #[test]
    fn test_remove_argument() {
        let arg_labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_labels);
        let mut af = AAFramework::new_with_argument_set(args);
        assert_eq!(0, af.n_attacks());
        for i in 0..3 {
            for j in 0..3 {
                af.new_attack(&arg_labels[i], &arg_labels[j]).unwrap();
            }
        }
        assert_eq!(9, af.n_attacks());
        assert!(af.remove_argument(&arg_labels[0]).is_some());
        assert!(af.remove_argument(&arg_labels[0]).is_none());
        assert_eq!(4, af.n_attacks());
        assert!(af
            .iter_attacks()
            .all(|att| att.attacker().label() != "a" && att.attacked().label() != "a"));
    }

    #[test]
    fn test_attacker_ids() {
        let arg_labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_labels);
        let mut af = AAFramework::new_with_argument_set(args);
        af.new_attack_by_ids(0, 1).unwrap();
        af.new_attack_by_ids(2, 1).unwrap();
        let mut attackers = af.attacker_ids_of(1).collect::<Vec<usize>>();
        attackers.sort_unstable();
        assert_eq!(vec![0, 2], attackers);
        assert_eq!(vec![1], af.attacked_ids_from(0).collect::<Vec<usize>>());
        assert!(af.is_attacked_by(1, 0));
        assert!(!af.is_attacked_by(0, 1));
    }

    #[test]
    fn test_restriction() {
        let arg_labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_labels);
        let mut af = AAFramework::new_with_argument_set(args);
        af.new_attack_by_ids(0, 1).unwrap();
        af.new_attack_by_ids(1, 2).unwrap();
        af.new_attack_by_ids(2, 0).unwrap();
        let restriction = af.restriction_to(&[0, 2]);
        assert_eq!(2, restriction.n_arguments());
        assert_eq!(1, restriction.n_attacks());
        let att = restriction.iter_attacks().next().unwrap();
        assert_eq!("c", att.attacker().label());
        assert_eq!("a", att.attacked().label());
    }

    #[test]
    fn test_generation_advances_on_mutation() {
        let mut af = AAFramework::default();
        assert_eq!(0, af.generation());
        af.new_argument("a".to_string());
        af.new_argument("b".to_string());
        let after_args = af.generation();
        assert!(after_args > 0);
        af.new_attack(&"a".to_string(), &"b".to_string()).unwrap();
        assert!(af.generation() > after_args);
        let after_attack = af.generation();
        af.remove_argument(&"b".to_string());
        assert!(af.generation() > after_attack);
    }
}
