pub mod helpers;

pub use behaviours::{test_registry, AllArgs, Recorder, Turret};
pub use helpers::*;
