pub use data_structure::SmallSet;
