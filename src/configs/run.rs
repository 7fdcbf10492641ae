use std::{
    fmt::{self, Display},
    path::PathBuf,
    str::FromStr,
};

use serde::Serialize;

use crate::error::HarnessErr;

/// Where minibatch sampling runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleMode {
    Gpu,
    /// Graph stays in host memory, accessed through device-mapped addressing.
    Uva,
    Cpu,
}

/// The graph neural network architecture being trained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    Gcn,
    Gat,
    Sage,
}

/// The supported input graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GraphName {
    #[serde(rename = "ogbn-proteins")]
    OgbnProteins,
    #[serde(rename = "pubmed")]
    Pubmed,
    #[serde(rename = "reddit")]
    Reddit,
    #[serde(rename = "ogbn-products")]
    OgbnProducts,
    #[serde(rename = "ogbn-arxiv")]
    OgbnArxiv,
    #[serde(rename = "ogbn-mag")]
    OgbnMag,
    #[serde(rename = "ogbn-papers100M")]
    OgbnPapers100M,
}

impl SampleMode {
    pub const ALL: [Self; 3] = [Self::Gpu, Self::Uva, Self::Cpu];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gpu => "gpu",
            Self::Uva => "uva",
            Self::Cpu => "cpu",
        }
    }
}

impl ModelKind {
    pub const ALL: [Self; 3] = [Self::Gcn, Self::Gat, Self::Sage];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gcn => "gcn",
            Self::Gat => "gat",
            Self::Sage => "sage",
        }
    }
}

impl GraphName {
    pub const ALL: [Self; 7] = [
        Self::OgbnProteins,
        Self::Pubmed,
        Self::Reddit,
        Self::OgbnProducts,
        Self::OgbnArxiv,
        Self::OgbnMag,
        Self::OgbnPapers100M,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::OgbnProteins => "ogbn-proteins",
            Self::Pubmed => "pubmed",
            Self::Reddit => "reddit",
            Self::OgbnProducts => "ogbn-products",
            Self::OgbnArxiv => "ogbn-arxiv",
            Self::OgbnMag => "ogbn-mag",
            Self::OgbnPapers100M => "ogbn-papers100M",
        }
    }

    /// Whether the graph is an OGB node property prediction dataset, as
    /// opposed to one of the builtin citation/social graphs.
    pub fn is_ogb(self) -> bool {
        self.as_str().starts_with("ogbn-")
    }
}

macro_rules! closed_choice {
    ($ty:ty, $kind:literal) => {
        impl Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = HarnessErr;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| HarnessErr::UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

closed_choice!(SampleMode, "sample mode");
closed_choice!(ModelKind, "model");
closed_choice!(GraphName, "graph name");

/// Immutable parameters of a training run.
///
/// Built once at startup from already validated arguments and shared from
/// then on behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    pub sample_mode: SampleMode,
    /// Minibatch only.
    pub batch_size: usize,
    /// Minibatch only: sampled neighbours per layer, first layer first.
    pub fanouts: Vec<usize>,
    pub num_epoch: usize,
    pub hid_size: usize,
    pub num_layers: usize,
    /// GAT only.
    pub num_head: usize,
    pub lr: f64,
    pub weight_decay: f64,
    pub dropout: f64,
    pub world_size: usize,
    pub num_partition: usize,
    pub graph_name: GraphName,
    pub data_dir: PathBuf,
    pub model: ModelKind,
    pub log_file: PathBuf,
    pub eval: bool,
}

impl Config {
    /// Creates a config holding the command line defaults for everything
    /// but the (required) data directory.
    pub fn with_defaults(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            sample_mode: SampleMode::Gpu,
            batch_size: 1024,
            fanouts: vec![15, 15, 15],
            num_epoch: 1,
            hid_size: 256,
            num_layers: 3,
            num_head: 4,
            lr: 5e-3,
            weight_decay: 5e-4,
            dropout: 0.5,
            world_size: 1,
            num_partition: 1,
            graph_name: GraphName::OgbnArxiv,
            data_dir: data_dir.into(),
            model: ModelKind::Gat,
            log_file: PathBuf::from("log.json"),
            eval: true,
        }
    }
}
