use std::convert::TryFrom;
use std::fmt;
use std::io::Read;
use fnv::FnvHashMap;
use serde_json;
use errors::*;
use graph_models::variables::*;
use graph_models::factors::Factor;

/// Bipartite graph of variables and factors. The variables are exactly those appearing in the
/// scope of some factor, in ascending label order; an edge links a factor to each variable of
/// its scope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(into = "RawFactorGraph", try_from = "RawFactorGraph")]
pub struct FactorGraph {
    vars: Vec<Var>,
    factors: Vec<Factor>,
    // label of a variable => its position in `vars`
    var_index: FnvHashMap<usize, usize>,
    // neighbor factors of each variable
    nb_v: Vec<Vec<usize>>,
    // neighbor variables of each factor
    nb_f: Vec<Vec<usize>>
}

#[derive(Serialize, Deserialize)]
struct RawFactorGraph {
    factors: Vec<Factor>
}

impl TryFrom<RawFactorGraph> for FactorGraph {
    type Error = Error;

    fn try_from(raw: RawFactorGraph) -> Result<FactorGraph> {
        FactorGraph::new(raw.factors)
    }
}

impl From<FactorGraph> for RawFactorGraph {
    fn from(fg: FactorGraph) -> RawFactorGraph {
        RawFactorGraph { factors: fg.factors }
    }
}

impl FactorGraph {
    /// Fails if two factors disagree on the number of states of a variable
    pub fn new(factors: Vec<Factor>) -> Result<FactorGraph> {
        let n_edges: usize = factors.iter().map(|f| f.vars().len()).sum();
        let all_vars: VarSet = VarSet::from_iter_with_hint(
            factors.iter().flat_map(|f| f.vars().iter().cloned()), n_edges);
        let vars: Vec<Var> = all_vars.vars().to_vec();
        let var_index: FnvHashMap<usize, usize> = vars.iter().enumerate()
            .map(|(i, v)| (v.label(), i))
            .collect();

        for factor in &factors {
            for var in factor.vars() {
                let expected = vars[var_index[&var.label()]].states();
                if var.states() != expected {
                    bail!(ErrorKind::InvalidModel(format!(
                        "variable {} has {} states in one factor and {} in another", var, expected, var.states())));
                }
            }
        }

        let mut nb_v = vec![Vec::new(); vars.len()];
        let mut nb_f = Vec::with_capacity(factors.len());
        for (fi, factor) in factors.iter().enumerate() {
            let mut neighbors = Vec::with_capacity(factor.vars().len());
            for var in factor.vars() {
                let vi = var_index[&var.label()];
                nb_v[vi].push(fi);
                neighbors.push(vi);
            }
            nb_f.push(neighbors);
        }

        Ok(FactorGraph { vars, factors, var_index, nb_v, nb_f })
    }

    pub fn from_json(json: &str) -> Result<FactorGraph> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<FactorGraph> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    #[inline]
    pub fn variables(&self) -> &[Var] {
        &self.vars
    }

    #[inline]
    pub fn factors(&self) -> &[Factor] {
        &self.factors
    }

    #[inline]
    pub fn nr_vars(&self) -> usize {
        self.vars.len()
    }

    #[inline]
    pub fn nr_factors(&self) -> usize {
        self.factors.len()
    }

    #[inline]
    pub fn var(&self, i: usize) -> &Var {
        &self.vars[i]
    }

    #[inline]
    pub fn factor(&self, i: usize) -> &Factor {
        &self.factors[i]
    }

    /// Position of `var` in `variables()`, if it belongs to this graph
    pub fn find_var(&self, var: &Var) -> Option<usize> {
        self.var_index.get(&var.label()).cloned()
    }

    /// Indices of the factors whose scope contains variable `i`
    #[inline]
    pub fn nb_v(&self, i: usize) -> &[usize] {
        &self.nb_v[i]
    }

    /// Indices of the variables in the scope of factor `i`
    #[inline]
    pub fn nb_f(&self, i: usize) -> &[usize] {
        &self.nb_f[i]
    }

    /// Union of the scopes of all factors
    pub fn all_vars(&self) -> VarSet {
        VarSet::from_iter_with_hint(self.vars.iter().cloned(), self.vars.len())
    }
}

impl fmt::Display for FactorGraph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "FactorGraph with {} variables and {} factors", self.nr_vars(), self.nr_factors())?;
        for factor in &self.factors {
            writeln!(f, "  {}", factor)?;
        }
        Ok(())
    }
}
