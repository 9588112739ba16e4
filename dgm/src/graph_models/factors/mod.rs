mod factor;

pub use self::factor::{Factor, NormKind, DistKind};
