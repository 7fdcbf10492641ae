mod cli;
mod current;
mod run;

pub use cli::Args;
pub use current::{current, set_current};
pub use run::{Config, GraphName, ModelKind, SampleMode};
