//! Descriptive records of a run and of the host it ran on.
//!
//! One typed record per run mode, each built by a pure function of the
//! config, the dataset and an [`EnvironmentProbe`](crate::probe::EnvironmentProbe).

mod builders;
mod records;

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

pub use builders::{full_meta, minibatch_meta, sampled_minibatch_meta, train_meta};
pub use records::{
    FullRunMetadata, MinibatchRunMetadata, RunMetadata, SampledMinibatchRunMetadata, TrainMeta,
    TrainMode, SAMPLING_SYSTEM,
};

/// A record that can describe itself as a flat JSON object.
pub trait Describe: Serialize {
    fn describe(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl Describe for TrainMeta {}
impl Describe for FullRunMetadata {}
impl Describe for MinibatchRunMetadata {}
impl Describe for SampledMinibatchRunMetadata {}
impl Describe for RunMetadata {}
