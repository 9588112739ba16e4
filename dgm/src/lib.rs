// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;
extern crate fnv;
extern crate algorithm;

pub mod errors;
pub mod properties;
pub mod graph_models;
pub mod prelude;
