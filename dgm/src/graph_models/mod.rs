pub mod variables;
pub mod factors;
pub mod factor_graph;
pub mod inferences;

pub use self::variables::*;
pub use self::factors::*;
pub use self::factor_graph::FactorGraph;
pub use self::inferences::*;
