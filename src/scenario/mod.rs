//! Scenario document synthesis and output

mod model;
mod synth;
pub mod writer;

pub use model::*;
pub use synth::{status_code, synthesize};
