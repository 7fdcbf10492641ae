use serde::Serialize;

use crate::configs::{GraphName, SampleMode};

/// The external sampling library the sampled minibatch runs use.
pub const SAMPLING_SYSTEM: &str = "quiver";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainMode {
    Full,
    Minibatch,
}

/// Optimizer hyperparameters of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainMeta {
    pub weight_decay: f64,
    pub learning_rate: f64,
    pub dropout: f64,
}

/// A full-graph training run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullRunMetadata {
    pub graph_name: GraphName,
    pub train_mode: TrainMode,
    pub cpu_model: String,
    pub num_node: usize,
    pub num_edge: usize,
    pub feat_width: usize,
    pub num_epoch: usize,
    pub num_partition: usize,
}

/// A minibatch training run with the framework's own sampler.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinibatchRunMetadata {
    pub graph_name: GraphName,
    pub train_mode: TrainMode,
    pub num_node: usize,
    pub num_edge: usize,
    pub cpu_model: String,
    pub feat_width: usize,
    pub batch_size: usize,
    pub fanouts: Vec<usize>,
    pub num_epoch: usize,
    pub num_partition: usize,
}

/// A minibatch training run sampling through [`SAMPLING_SYSTEM`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampledMinibatchRunMetadata {
    pub graph_name: GraphName,
    pub system_name: &'static str,
    pub train_mode: TrainMode,
    pub sample_mode: SampleMode,
    pub num_node: usize,
    pub num_edge: usize,
    pub cpu_model: String,
    pub gpu_model: Vec<String>,
    pub feat_width: usize,
    pub batch_size: usize,
    pub fanouts: Vec<usize>,
    pub num_epoch: usize,
    pub num_partition: usize,
}

/// Any of the run mode records, serialized as the record itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RunMetadata {
    Full(FullRunMetadata),
    Minibatch(MinibatchRunMetadata),
    SampledMinibatch(SampledMinibatchRunMetadata),
}

impl RunMetadata {
    pub fn train_mode(&self) -> TrainMode {
        match self {
            RunMetadata::Full(m) => m.train_mode,
            RunMetadata::Minibatch(m) => m.train_mode,
            RunMetadata::SampledMinibatch(m) => m.train_mode,
        }
    }

    pub fn graph_name(&self) -> GraphName {
        match self {
            RunMetadata::Full(m) => m.graph_name,
            RunMetadata::Minibatch(m) => m.graph_name,
            RunMetadata::SampledMinibatch(m) => m.graph_name,
        }
    }
}

impl From<FullRunMetadata> for RunMetadata {
    fn from(value: FullRunMetadata) -> Self {
        Self::Full(value)
    }
}

impl From<MinibatchRunMetadata> for RunMetadata {
    fn from(value: MinibatchRunMetadata) -> Self {
        Self::Minibatch(value)
    }
}

impl From<SampledMinibatchRunMetadata> for RunMetadata {
    fn from(value: SampledMinibatchRunMetadata) -> Self {
        Self::SampledMinibatch(value)
    }
}
