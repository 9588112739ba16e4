mod var;
mod var_set;

pub use self::var::Var;
pub use self::var_set::{VarSet, Assignment};
