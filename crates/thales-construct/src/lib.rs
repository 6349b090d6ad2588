#![deny(missing_docs)]
#![doc = "Construction front-end: materializes a numeric diagram and the initial symbolic state from a problem text, retrying the whole diagram until every emitted premise and every goal passes its dependency check."]

mod builder;
mod definitions;
mod sketch;

pub use builder::{build_problem, DEFAULT_MAX_ATTEMPTS};
