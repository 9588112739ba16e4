use errors::*;
use graph_models::variables::*;
use graph_models::factors::Factor;
use graph_models::factor_graph::FactorGraph;
use graph_models::inferences::{InfAlg, Capabilities};
use properties::PropertySet;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExactInfProps {
    pub verbose: usize
}

/// Exact inference by enumerating every joint state of the factor graph.
///
/// The cost is the product of the number of states of all variables, so it is only usable on
/// small graphs, typically to check the output of approximate methods.
#[derive(Debug, Clone, Default)]
pub struct ExactInf {
    props: ExactInfProps,
    fg: FactorGraph,
    beliefs_v: Vec<Factor>,
    beliefs_f: Vec<Factor>,
    log_z: f64
}

impl ExactInf {
    pub const NAME: &'static str = "EXACT";

    pub fn new(fg: FactorGraph, opts: &PropertySet) -> Result<ExactInf> {
        let mut exact = ExactInf {
            props: ExactInfProps::default(),
            fg,
            beliefs_v: Vec::new(),
            beliefs_f: Vec::new(),
            log_z: 0.0
        };
        exact.set_properties(opts)?;
        exact.construct();

        Ok(exact)
    }

    pub fn props(&self) -> &ExactInfProps {
        &self.props
    }

    /// Marginal of the `i`-th variable of the factor graph
    pub fn belief_v(&self, i: usize) -> &Factor {
        &self.beliefs_v[i]
    }

    /// Marginal over the scope of the `i`-th factor of the factor graph
    pub fn belief_f(&self, i: usize) -> &Factor {
        &self.beliefs_f[i]
    }

    fn construct(&mut self) {
        let (beliefs_v, beliefs_f) = self.zero_beliefs();
        self.beliefs_v = beliefs_v;
        self.beliefs_f = beliefs_f;
    }

    fn zero_beliefs(&self) -> (Vec<Factor>, Vec<Factor>) {
        let beliefs_v = self.fg.variables().iter()
            .map(|&v| Factor::zeros(VarSet::from(v)))
            .collect();
        let beliefs_f = self.fg.factors().iter()
            .map(|f| Factor::zeros(f.vars().clone()))
            .collect();

        (beliefs_v, beliefs_f)
    }
}

impl InfAlg for ExactInf {
    fn name(&self) -> &'static str {
        ExactInf::NAME
    }

    fn clone_box(&self) -> Box<dyn InfAlg> {
        Box::new(self.clone())
    }

    fn create(&self) -> Box<dyn InfAlg> {
        Box::new(ExactInf::default())
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities { selective_init: false, convergence: false }
    }

    fn fg(&self) -> &FactorGraph {
        &self.fg
    }

    fn belief(&self, var: &Var) -> Result<Factor> {
        match self.fg.find_var(var) {
            Some(i) => Ok(self.beliefs_v[i].clone()),
            None => Err(ErrorKind::UnknownVariable(var.to_string()).into())
        }
    }

    /// Only sets covered by the scope of a single factor are available: the belief of that
    /// factor is marginalized onto `vars`.
    fn belief_set(&self, vars: &VarSet) -> Result<Factor> {
        if vars.len() == 1 {
            return self.belief(&vars.vars()[0]);
        }

        match self.fg.factors().iter().position(|f| f.vars().is_superset_of(vars)) {
            Some(i) => self.beliefs_f[i].marginal(vars, false),
            None => Err(ErrorKind::BeliefNotAvailable(vars.to_string()).into())
        }
    }

    fn beliefs(&self) -> Vec<Factor> {
        self.beliefs_v.clone()
    }

    fn log_z(&self) -> f64 {
        self.log_z
    }

    fn init(&mut self) {
        for belief in self.beliefs_v.iter_mut().chain(self.beliefs_f.iter_mut()) {
            belief.fill(0.0);
        }
        self.log_z = 0.0;
    }

    fn run(&mut self) -> Result<f64> {
        if self.props.verbose >= 1 {
            info!("Starting {}...", self.identify());
        }

        let all_vars = self.fg.all_vars();
        let n_states = match all_vars.checked_nr_states() {
            Some(n) => n,
            None => return Err(ErrorKind::InvalidModel(format!(
                "the {} variables have too many joint states to enumerate", all_vars.len())).into())
        };
        debug!("Enumerating {} joint states of {} variables", n_states, all_vars.len());

        // results are only published once the partition sum is known to be valid
        let (mut beliefs_v, mut beliefs_f) = self.zero_beliefs();
        let mut z = 0.0;
        let mut states = Assignment::with_capacity_and_hasher(all_vars.len(), Default::default());
        for s in 0..n_states {
            all_vars.calc_states_into(s, &mut states);
            let weight: f64 = self.fg.factors().iter()
                .map(|f| f.value_at(&states))
                .product();

            z += weight;
            for (i, var) in self.fg.variables().iter().enumerate() {
                beliefs_v[i][states[var]] += weight;
            }
            for (i, factor) in self.fg.factors().iter().enumerate() {
                beliefs_f[i][factor.vars().calc_state(&states)] += weight;
            }
        }

        if !(z > 0.0) || !z.is_finite() {
            bail!(ErrorKind::InvalidModel(format!("partition sum is {}", z)));
        }

        for belief in beliefs_v.iter_mut().chain(beliefs_f.iter_mut()) {
            *belief /= z;
        }
        self.beliefs_v = beliefs_v;
        self.beliefs_f = beliefs_f;
        self.log_z = z.ln();

        if self.props.verbose >= 1 {
            info!("{} finished, logZ = {}", ExactInf::NAME, self.log_z);
        }

        Ok(0.0)
    }

    fn set_properties(&mut self, opts: &PropertySet) -> Result<()> {
        self.props.verbose = opts.get_as::<usize>("verbose")?;
        Ok(())
    }

    fn get_properties(&self) -> PropertySet {
        PropertySet::new().with("verbose", self.props.verbose)
    }
}
