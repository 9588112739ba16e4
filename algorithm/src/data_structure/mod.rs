mod small_set;

pub use self::small_set::SmallSet;
