use std::path::PathBuf;

use clap::Parser;

use super::{Config, GraphName, ModelKind, SampleMode};

/// Command line arguments of a benchmark run.
///
/// Flag names keep the snake_case spelling the launch scripts already use.
#[derive(Parser, Debug)]
#[command(name = "gnn-bench", about = "Graph learning benchmark run")]
pub struct Args {
    /// Sample device
    #[arg(long = "sample_mode", default_value = "gpu")]
    pub sample_mode: SampleMode,

    /// Global batch size
    #[arg(long = "batch_size", default_value_t = 1024)]
    pub batch_size: usize,

    /// Comma separated fanouts, one per layer
    #[arg(long, value_delimiter = ',', default_values_t = [15, 15, 15])]
    pub fanouts: Vec<usize>,

    /// Number of epochs to train
    #[arg(long = "num_epoch", default_value_t = 1)]
    pub num_epoch: usize,

    /// Model hidden dimension
    #[arg(long = "hid_size", default_value_t = 256)]
    pub hid_size: usize,

    /// Model layers
    #[arg(long = "num_layers", default_value_t = 3)]
    pub num_layers: usize,

    /// GAT only: number of attention heads
    #[arg(long = "num_head", default_value_t = 4)]
    pub num_head: usize,

    /// Learning rate
    #[arg(long, default_value_t = 5e-3)]
    pub lr: f64,

    #[arg(long = "weight_decay", default_value_t = 5e-4)]
    pub weight_decay: f64,

    /// Dropout ratio
    #[arg(long, default_value_t = 0.5)]
    pub dropout: f64,

    /// Number of hosts
    #[arg(long = "world_size", default_value_t = 1)]
    pub world_size: usize,

    /// Number of partitions
    #[arg(long = "num_partition", default_value_t = 1)]
    pub num_partition: usize,

    /// Input graph name
    #[arg(long = "graph_name", default_value = "ogbn-arxiv")]
    pub graph_name: GraphName,

    /// Root data directory
    #[arg(long = "data_dir")]
    pub data_dir: PathBuf,

    /// Model type
    #[arg(long, default_value = "gat")]
    pub model: ModelKind,

    /// Output log file
    #[arg(long = "log_file", default_value = "log.json")]
    pub log_file: PathBuf,

    /// Evaluate after every epoch
    #[arg(long, overrides_with = "no_eval")]
    eval: bool,

    #[arg(long = "no-eval", overrides_with = "eval")]
    no_eval: bool,
}

impl From<Args> for Config {
    fn from(a: Args) -> Self {
        Config {
            sample_mode: a.sample_mode,
            batch_size: a.batch_size,
            fanouts: a.fanouts,
            num_epoch: a.num_epoch,
            hid_size: a.hid_size,
            num_layers: a.num_layers,
            num_head: a.num_head,
            lr: a.lr,
            weight_decay: a.weight_decay,
            dropout: a.dropout,
            world_size: a.world_size,
            num_partition: a.num_partition,
            graph_name: a.graph_name,
            data_dir: a.data_dir,
            model: a.model,
            log_file: a.log_file,
            eval: a.eval || !a.no_eval,
        }
    }
}
