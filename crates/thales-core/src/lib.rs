#![deny(missing_docs)]
#![doc = "Core types shared by every Thales crate: the canonical error type, the deterministic RNG handle and run provenance descriptors."]

pub mod errors;
pub mod provenance;
pub mod rng;

pub use errors::{ErrorInfo, ThalesError};
pub use provenance::RunProvenance;
pub use rng::{derive_substream_seed, RngHandle};
