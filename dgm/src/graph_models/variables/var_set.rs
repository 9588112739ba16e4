use std::fmt;
use std::iter::FromIterator;
use std::ops::{BitAnd, BitOr, Sub};
use std::slice::Iter;
use fnv::FnvHashMap;
use algorithm::data_structure::SmallSet;
use graph_models::variables::Var;

/// Joint assignment: maps a variable to one of its states. May cover only part of a `VarSet`.
pub type Assignment = FnvHashMap<Var, usize>;

/// A set of variables kept sorted by label, without duplicates.
///
/// The order is what gives meaning to a linear index: for the set `{x_l(0), ..., x_l(n-1)}`
/// with `l(0) < ... < l(n-1)` and `S_l` the number of states of `x_l`, the joint state
/// `s` is numbered
///
/// ```text
/// S = s(x_l(0)) + s(x_l(1)) * S_l(0) + ... + s(x_l(n-1)) * S_l(0) * ... * S_l(n-2)
/// ```
///
/// so the variable with the smallest label is the least-significant digit. Every factor
/// table over this set is indexed with this convention.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VarSet {
    vars: SmallSet<Var>
}

impl VarSet {
    pub fn new() -> VarSet {
        VarSet { vars: SmallSet::new() }
    }

    pub fn from_pair(v1: Var, v2: Var) -> VarSet {
        VarSet { vars: SmallSet::from_pair(v1, v2) }
    }

    /// `size_hint` only pre-allocates, it never changes the resulting set
    pub fn from_iter_with_hint<I: IntoIterator<Item=Var>>(iter: I, size_hint: usize) -> VarSet {
        VarSet { vars: SmallSet::from_iter_with_hint(iter, size_hint) }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[inline]
    pub fn vars(&self) -> &[Var] {
        self.vars.elements()
    }

    #[inline]
    pub fn iter(&self) -> Iter<Var> {
        self.vars.iter()
    }

    pub fn contains(&self, var: &Var) -> bool {
        self.vars.contains(var)
    }

    pub fn is_subset_of(&self, other: &VarSet) -> bool {
        self.vars.is_subset_of(&other.vars)
    }

    pub fn is_superset_of(&self, other: &VarSet) -> bool {
        self.vars.is_superset_of(&other.vars)
    }

    pub fn intersects(&self, other: &VarSet) -> bool {
        self.vars.intersects(&other.vars)
    }

    pub fn insert(&mut self, var: Var) -> bool {
        self.vars.insert(var)
    }

    pub fn remove(&mut self, var: &Var) -> bool {
        self.vars.remove(var)
    }

    /// Number of joint states, i.e. the product of the number of states of each variable.
    /// The empty set has exactly one (empty) joint state.
    pub fn nr_states(&self) -> usize {
        self.vars.iter().fold(1, |states, v| states * v.states())
    }

    /// Same as `nr_states`, but `None` when the number of joint states does not fit in a `usize`
    pub fn checked_nr_states(&self) -> Option<usize> {
        self.vars.iter().fold(Some(1), |states, v| states.and_then(|n| n.checked_mul(v.states())))
    }

    /// Linear index of a joint assignment; variables missing from `states` are taken to be in
    /// state 0, and variables of `states` outside this set are ignored. Hence a full assignment
    /// can be projected on any subset by calling this method on the subset.
    pub fn calc_state(&self, states: &Assignment) -> usize {
        let mut prod = 1;
        let mut state = 0;
        for var in self.vars.iter() {
            if let Some(&s) = states.get(var) {
                state += prod * s;
            }
            prod *= var.states();
        }

        state
    }

    /// Joint assignment of all variables in this set corresponding to `linear_state`.
    ///
    /// Panics if `linear_state >= self.nr_states()`.
    pub fn calc_states(&self, linear_state: usize) -> Assignment {
        let mut states = Assignment::with_capacity_and_hasher(self.len(), Default::default());
        self.calc_states_into(linear_state, &mut states);

        states
    }

    /// Write the joint assignment of `linear_state` into `states`, overwriting the entries of
    /// the variables of this set and leaving the others untouched.
    ///
    /// Panics if `linear_state >= self.nr_states()`.
    pub fn calc_states_into(&self, linear_state: usize, states: &mut Assignment) {
        let mut linear_state = linear_state;
        for var in self.vars.iter() {
            states.insert(*var, linear_state % var.states());
            linear_state /= var.states();
        }
        assert!(linear_state == 0, "Linear state is out of range of {}", self);
    }
}

impl From<Var> for VarSet {
    fn from(var: Var) -> VarSet {
        VarSet { vars: SmallSet::from_elem(var) }
    }
}

impl FromIterator<Var> for VarSet {
    fn from_iter<I: IntoIterator<Item=Var>>(iter: I) -> VarSet {
        VarSet { vars: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a VarSet {
    type Item = &'a Var;
    type IntoIter = Iter<'a, Var>;

    fn into_iter(self) -> Iter<'a, Var> {
        self.vars.iter()
    }
}

impl<'a, 'b> BitOr<&'b VarSet> for &'a VarSet {
    type Output = VarSet;

    fn bitor(self, rhs: &'b VarSet) -> VarSet {
        VarSet { vars: &self.vars | &rhs.vars }
    }
}

impl<'a, 'b> BitAnd<&'b VarSet> for &'a VarSet {
    type Output = VarSet;

    fn bitand(self, rhs: &'b VarSet) -> VarSet {
        VarSet { vars: &self.vars & &rhs.vars }
    }
}

impl<'a, 'b> Sub<&'b VarSet> for &'a VarSet {
    type Output = VarSet;

    fn sub(self, rhs: &'b VarSet) -> VarSet {
        VarSet { vars: &self.vars - &rhs.vars }
    }
}

impl fmt::Display for VarSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;
        for (i, var) in self.vars.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", var)?;
        }
        write!(f, "}}")
    }
}
