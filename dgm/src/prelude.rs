pub use errors::{Error, ErrorKind, Result, ResultExt};
pub use graph_models::*;
pub use properties::{PropertySet, PropertyValue, FromProperty};
