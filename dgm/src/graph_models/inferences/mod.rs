use errors::*;
use graph_models::variables::*;
use graph_models::factors::Factor;
use graph_models::factor_graph::FactorGraph;
use properties::PropertySet;

mod exact_inf;
pub use self::exact_inf::{ExactInf, ExactInfProps};

/// Optional parts of the `InfAlg` interface an algorithm actually supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// `init_subset` resets only the part of the state touching some variables
    pub selective_init: bool,
    /// `max_diff` and `iterations` report the convergence of an iterative method
    pub convergence: bool,
}

/// Common interface of inference algorithms working on a factor graph.
///
/// Check `capabilities()` before calling the optional methods; an algorithm that does not
/// support them returns `ErrorKind::NotImplemented`.
pub trait InfAlg: Send + Sync {
    /// Name of the algorithm, also accepted by `new_inf_alg`
    fn name(&self) -> &'static str;

    /// Name and properties, for logging
    fn identify(&self) -> String {
        format!("{}{}", self.name(), self.print_properties())
    }

    fn clone_box(&self) -> Box<dyn InfAlg>;

    /// A default-constructed instance of the same algorithm
    fn create(&self) -> Box<dyn InfAlg>;

    fn capabilities(&self) -> Capabilities {
        Capabilities::default()
    }

    fn fg(&self) -> &FactorGraph;

    /// Marginal of a single variable
    fn belief(&self, var: &Var) -> Result<Factor>;

    /// Joint marginal of a set of variables
    fn belief_set(&self, vars: &VarSet) -> Result<Factor>;

    /// Marginals of all variables, in the order of the factor graph
    fn beliefs(&self) -> Vec<Factor>;

    /// Logarithm of the partition sum
    fn log_z(&self) -> f64;

    /// Reset all results
    fn init(&mut self);

    /// Reset the results touching `vars`
    fn init_subset(&mut self, _vars: &VarSet) -> Result<()> {
        Err(ErrorKind::NotImplemented(format!("{}::init_subset", self.name())).into())
    }

    /// Perform inference, return the remaining error of the approximation
    fn run(&mut self) -> Result<f64>;

    /// Maximum change of a single variable belief in the last iteration
    fn max_diff(&self) -> Result<f64> {
        Err(ErrorKind::NotImplemented(format!("{}::max_diff", self.name())).into())
    }

    fn iterations(&self) -> Result<usize> {
        Err(ErrorKind::NotImplemented(format!("{}::iterations", self.name())).into())
    }

    fn set_properties(&mut self, opts: &PropertySet) -> Result<()>;

    fn get_properties(&self) -> PropertySet;

    fn print_properties(&self) -> String {
        self.get_properties().to_string()
    }
}

impl Clone for Box<dyn InfAlg> {
    fn clone(&self) -> Box<dyn InfAlg> {
        self.clone_box()
    }
}

/// Construct the inference algorithm called `name`
pub fn new_inf_alg(name: &str, fg: FactorGraph, opts: &PropertySet) -> Result<Box<dyn InfAlg>> {
    match name {
        ExactInf::NAME => Ok(Box::new(ExactInf::new(fg, opts)?)),
        _ => Err(ErrorKind::UnknownAlgorithm(name.to_owned()).into())
    }
}
