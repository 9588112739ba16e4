use std::convert::TryFrom;
use std::f64;
use std::fmt;
use std::ops::{DivAssign, Index, IndexMut, Mul, MulAssign};
use errors::*;
use graph_models::variables::*;

/// A non-negative function over the joint states of a set of variables, stored as a dense table.
/// Entry `i` is the value of the joint state whose linear index (see `VarSet`) is `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFactor")]
pub struct Factor {
    vars: VarSet,
    values: Vec<f64>
}

/// Shape of a factor in JSON documents, validated before it becomes a `Factor`
#[derive(Deserialize)]
struct RawFactor {
    vars: Vec<Var>,
    values: Vec<f64>
}

impl TryFrom<RawFactor> for Factor {
    type Error = Error;

    fn try_from(raw: RawFactor) -> Result<Factor> {
        let mut listed = raw.vars.clone();
        listed.sort();
        if let Some(pair) = listed.windows(2).find(|w| w[0] == w[1] && w[0].states() != w[1].states()) {
            bail!(ErrorKind::InvalidFactor(format!(
                "variable {} is listed with {} and {} states", pair[0], pair[0].states(), pair[1].states())));
        }

        let n_vars = raw.vars.len();
        Factor::from_values(VarSet::from_iter_with_hint(raw.vars, n_vars), raw.values)
    }
}

/// How `Factor::normalize_by` rescales a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormKind {
    /// entries sum to one
    Prob,
    /// largest absolute entry is one
    LInf
}

/// Distance between two tables over the same variables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistKind {
    /// sum of absolute pointwise differences
    L1,
    /// largest absolute pointwise difference
    LInf,
    /// total variation, half of `L1`
    TotalVariation,
    /// Kullback-Leibler divergence `sum p_i (ln p_i - ln q_i)`
    KullbackLeibler,
    /// Hellinger distance `1/2 sum (sqrt p_i - sqrt q_i)^2`
    Hellinger
}

impl Factor {
    /// Constant factor with all entries equal to 1
    pub fn new(vars: VarSet) -> Factor {
        let n = vars.nr_states();
        Factor { vars, values: vec![1.0; n] }
    }

    pub fn zeros(vars: VarSet) -> Factor {
        let n = vars.nr_states();
        Factor { vars, values: vec![0.0; n] }
    }

    pub fn from_values(vars: VarSet, values: Vec<f64>) -> Result<Factor> {
        if let Some(var) = vars.iter().find(|v| v.states() == 0) {
            bail!(ErrorKind::InvalidFactor(format!("variable {} has no states", var)));
        }
        if values.len() != vars.nr_states() {
            bail!(ErrorKind::InvalidFactor(format!(
                "{} has {} joint states but {} values were given", vars, vars.nr_states(), values.len())));
        }
        if let Some(v) = values.iter().find(|v| !(**v >= 0.0)) {
            bail!(ErrorKind::InvalidFactor(format!("value {} of factor over {} is not a non-negative number", v, vars)));
        }

        Ok(Factor { vars, values })
    }

    #[inline]
    pub fn vars(&self) -> &VarSet {
        &self.vars
    }

    /// Number of entries in the table
    #[inline]
    pub fn states(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn get(&self, i: usize) -> f64 {
        self.values[i]
    }

    #[inline]
    pub fn set(&mut self, i: usize, val: f64) {
        self.values[i] = val;
    }

    /// Value at the projection of `states` on the variables of this factor
    #[inline]
    pub fn value_at(&self, states: &Assignment) -> f64 {
        self.values[self.vars.calc_state(states)]
    }

    pub fn fill(&mut self, val: f64) {
        for v in self.values.iter_mut() {
            *v = val;
        }
    }

    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    pub fn sum_abs(&self) -> f64 {
        self.values.iter().map(|v| v.abs()).sum()
    }

    pub fn max_abs(&self) -> f64 {
        self.values.iter().fold(0.0, |m, v| m.max(v.abs()))
    }

    pub fn max(&self) -> f64 {
        self.values.iter().fold(f64::NEG_INFINITY, |m, &v| m.max(v))
    }

    pub fn min(&self) -> f64 {
        self.values.iter().fold(f64::INFINITY, |m, &v| m.min(v))
    }

    /// Linear index and value of the largest entry; the first one wins on ties
    pub fn argmax(&self) -> (usize, f64) {
        let mut best = (0, self.values[0]);
        for (i, &v) in self.values.iter().enumerate().skip(1) {
            if v > best.1 {
                best = (i, v);
            }
        }

        best
    }

    /// Shannon entropy `-sum p_i ln p_i`, with `0 ln 0 = 0`
    pub fn entropy(&self) -> f64 {
        -self.values.iter()
            .map(|&p| if p == 0.0 { 0.0 } else { p * p.ln() })
            .sum::<f64>()
    }

    pub fn has_nans(&self) -> bool {
        self.values.iter().any(|v| v.is_nan())
    }

    pub fn has_negatives(&self) -> bool {
        self.values.iter().any(|&v| v < 0.0)
    }

    /// Distance to `other`, which must have the same variables. `KullbackLeibler` is infinite
    /// when `other` is zero where this factor is not.
    pub fn dist(&self, other: &Factor, kind: DistKind) -> Result<f64> {
        if self.vars != other.vars {
            bail!(ErrorKind::InvalidFactor(format!(
                "cannot measure the distance between factors over {} and {}", self.vars, other.vars)));
        }

        let pairs = self.values.iter().zip(other.values.iter());
        let d: f64 = match kind {
            DistKind::L1 => pairs.map(|(p, q)| (p - q).abs()).sum(),
            DistKind::LInf => pairs.fold(0.0, |m, (p, q)| m.max((p - q).abs())),
            DistKind::TotalVariation => pairs.map(|(p, q)| (p - q).abs()).sum::<f64>() / 2.0,
            DistKind::KullbackLeibler => pairs
                .map(|(&p, &q)| {
                    if p == 0.0 {
                        0.0
                    } else if q == 0.0 {
                        f64::INFINITY
                    } else {
                        p * (p.ln() - q.ln())
                    }
                })
                .sum(),
            DistKind::Hellinger => pairs.map(|(p, q)| (p.sqrt() - q.sqrt()).powi(2)).sum::<f64>() / 2.0
        };

        Ok(d)
    }

    /// Scale the entries so that they sum to one, returning the previous sum
    pub fn normalize(&mut self) -> Result<f64> {
        self.normalize_by(NormKind::Prob)
    }

    /// Scale the entries according to `kind`, returning the divisor
    pub fn normalize_by(&mut self, kind: NormKind) -> Result<f64> {
        let z = match kind {
            NormKind::Prob => self.sum(),
            NormKind::LInf => self.max_abs()
        };
        if !(z > 0.0) || !z.is_finite() {
            bail!(ErrorKind::InvalidModel(format!("cannot normalize factor over {}, normalizer is {}", self.vars, z)));
        }
        *self /= z;

        Ok(z)
    }

    pub fn normalized(&self) -> Result<Factor> {
        let mut factor = self.clone();
        factor.normalize()?;
        Ok(factor)
    }

    /// Sum out every variable that is not in `vars`. Variables of `vars` outside the scope of
    /// this factor are ignored.
    pub fn marginal(&self, vars: &VarSet, normed: bool) -> Result<Factor> {
        let res_vars = vars & &self.vars;
        let mut res = Factor::zeros(res_vars);
        for (i, &v) in self.values.iter().enumerate() {
            let states = self.vars.calc_states(i);
            let j = res.vars.calc_state(&states);
            res.values[j] += v;
        }

        if normed {
            res.normalize()?;
        }

        Ok(res)
    }

    /// Extend this factor to the superset `vars`; the result is constant in the new variables
    pub fn embed(&self, vars: &VarSet) -> Result<Factor> {
        if !vars.is_superset_of(&self.vars) {
            bail!(ErrorKind::InvalidFactor(format!("cannot embed factor over {} into {}", self.vars, vars)));
        }

        if *vars == self.vars {
            Ok(self.clone())
        } else {
            Ok(self * &Factor::new(vars - &self.vars))
        }
    }
}

impl Index<usize> for Factor {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.values[i]
    }
}

impl IndexMut<usize> for Factor {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.values[i]
    }
}

impl<'a, 'b> Mul<&'b Factor> for &'a Factor {
    type Output = Factor;

    /// Pointwise product over the union of both scopes
    fn mul(self, rhs: &'b Factor) -> Factor {
        let vars = &self.vars | &rhs.vars;
        let mut res = Factor::zeros(vars);
        for i in 0..res.values.len() {
            let states = res.vars.calc_states(i);
            res.values[i] = self.value_at(&states) * rhs.value_at(&states);
        }

        res
    }
}

impl MulAssign<f64> for Factor {
    fn mul_assign(&mut self, rhs: f64) {
        for v in self.values.iter_mut() {
            *v *= rhs;
        }
    }
}

impl DivAssign<f64> for Factor {
    fn div_assign(&mut self, rhs: f64) {
        for v in self.values.iter_mut() {
            *v /= rhs;
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, (", self.vars)?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "))")
    }
}
