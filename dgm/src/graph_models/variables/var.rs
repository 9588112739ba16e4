use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A discrete random variable, identified by its label and taking `states` possible values.
///
/// Two variables are the same when their labels are; the number of states is carried along
/// so that sets of variables can compute the size of their joint state space.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Var {
    label: usize,
    states: usize
}

impl Var {
    pub fn new(label: usize, states: usize) -> Var {
        assert!(states >= 1, "Variable x{} must have at least one state", label);
        Var { label, states }
    }

    #[inline]
    pub fn label(&self) -> usize {
        self.label
    }

    #[inline]
    pub fn states(&self) -> usize {
        self.states
    }
}

impl PartialEq for Var {
    fn eq(&self, other: &Var) -> bool {
        self.label == other.label
    }
}

impl Eq for Var {}

impl PartialOrd for Var {
    fn partial_cmp(&self, other: &Var) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Var {
    fn cmp(&self, other: &Var) -> Ordering {
        self.label.cmp(&other.label)
    }
}

impl Hash for Var {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label.hash(state)
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "x{}", self.label)
    }
}
