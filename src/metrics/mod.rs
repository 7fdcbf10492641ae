//! Per-epoch training records and their ordered collection.
//!
//! - [`LogStep`]: timing and accuracy of a single epoch
//! - [`Logger`]: append-only sequence of steps with a JSON-ready projection

mod logger;
mod step;

pub use logger::{Logger, StepRecord};
pub use step::LogStep;
