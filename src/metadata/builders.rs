use super::records::{
    FullRunMetadata, MinibatchRunMetadata, SampledMinibatchRunMetadata, TrainMeta, TrainMode,
    SAMPLING_SYSTEM,
};
use crate::{
    configs::Config,
    dataset::{Dataset, Graph},
    probe::EnvironmentProbe,
};

/// Exports the optimizer hyperparameters of `config`.
pub fn train_meta(config: &Config) -> TrainMeta {
    TrainMeta {
        weight_decay: config.weight_decay,
        learning_rate: config.lr,
        dropout: config.dropout,
    }
}

/// Describes a full-graph run.
///
/// # Arguments
/// * `config` - The run configuration.
/// * `data` - The dataset being trained on.
/// * `probe` - Where to read the CPU model from.
///
/// # Returns
/// The run record; an unavailable CPU model is left empty.
pub fn full_meta<G: Graph>(
    config: &Config,
    data: &Dataset<G>,
    probe: &impl EnvironmentProbe,
) -> FullRunMetadata {
    FullRunMetadata {
        graph_name: config.graph_name,
        train_mode: TrainMode::Full,
        cpu_model: probe.cpu_model().or_degraded("cpu model"),
        num_node: data.num_nodes(),
        num_edge: data.num_edges(),
        feat_width: data.in_feats,
        num_epoch: config.num_epoch,
        num_partition: config.num_partition,
    }
}

/// Describes a minibatch run.
///
/// # Arguments
/// * `config` - The run configuration.
/// * `data` - The dataset being trained on.
/// * `probe` - Where to read the CPU model from.
///
/// # Returns
/// The run record; an unavailable CPU model is left empty.
pub fn minibatch_meta<G: Graph>(
    config: &Config,
    data: &Dataset<G>,
    probe: &impl EnvironmentProbe,
) -> MinibatchRunMetadata {
    MinibatchRunMetadata {
        graph_name: config.graph_name,
        train_mode: TrainMode::Minibatch,
        num_node: data.num_nodes(),
        num_edge: data.num_edges(),
        cpu_model: probe.cpu_model().or_degraded("cpu model"),
        feat_width: data.in_feats,
        batch_size: config.batch_size,
        fanouts: config.fanouts.clone(),
        num_epoch: config.num_epoch,
        num_partition: config.num_partition,
    }
}

/// Describes a minibatch run sampling through the external library, which
/// also records the GPUs the sampler ran on.
pub fn sampled_minibatch_meta<G: Graph>(
    config: &Config,
    data: &Dataset<G>,
    probe: &impl EnvironmentProbe,
) -> SampledMinibatchRunMetadata {
    SampledMinibatchRunMetadata {
        graph_name: config.graph_name,
        system_name: SAMPLING_SYSTEM,
        train_mode: TrainMode::Minibatch,
        sample_mode: config.sample_mode,
        num_node: data.num_nodes(),
        num_edge: data.num_edges(),
        cpu_model: probe.cpu_model().or_degraded("cpu model"),
        gpu_model: probe.gpu_models().or_degraded("gpu models"),
        feat_width: data.in_feats,
        batch_size: config.batch_size,
        fanouts: config.fanouts.clone(),
        num_epoch: config.num_epoch,
        num_partition: config.num_partition,
    }
}

#[cfg(test)]
mod tests {
    use ndarray::Array2;
    use serde_json::json;

    use super::*;
    use crate::{
        configs::{GraphName, SampleMode},
        dataset::{EdgeListGraph, Tensor},
        metadata::{Describe, RunMetadata},
        probe::StaticProbe,
    };

    /// 10 nodes, 20 edges, 8 features.
    fn dataset() -> Dataset {
        let edges = (0..10u32).flat_map(|v| [(v, (v + 1) % 10), (v, (v + 2) % 10)]);
        Dataset {
            graph: EdgeListGraph::new(10, edges),
            feat: Some(Tensor::new(Array2::<f32>::zeros((10, 8)).into_dyn())),
            label: Tensor::from_vec(vec![0; 10]),
            train_idx: Tensor::from_vec(vec![0, 1, 2, 3, 4, 5]),
            val_idx: Tensor::from_vec(vec![6, 7]),
            test_idx: Tensor::from_vec(vec![8, 9]),
            num_classes: 2,
            in_feats: 8,
        }
    }

    fn config() -> Config {
        Config {
            batch_size: 1024,
            fanouts: vec![15, 15, 15],
            graph_name: GraphName::OgbnArxiv,
            num_epoch: 5,
            num_partition: 2,
            sample_mode: SampleMode::Uva,
            ..Config::with_defaults("/data/gnn")
        }
    }

    fn probe() -> StaticProbe {
        StaticProbe::new("AMD EPYC 7763", vec!["NVIDIA A100".into(), "NVIDIA A100".into()])
    }

    #[test]
    fn minibatch_record() {
        let meta = minibatch_meta(&config(), &dataset(), &probe());

        assert_eq!(meta.batch_size, 1024);
        assert_eq!(meta.fanouts, vec![15, 15, 15]);
        assert_eq!(meta.num_node, 10);
        assert_eq!(meta.num_edge, 20);
        assert_eq!(meta.feat_width, 8);

        let value = meta.describe().unwrap();
        assert_eq!(value["graph_name"], "ogbn-arxiv");
        assert_eq!(value["train_mode"], "minibatch");
        assert_eq!(value["fanouts"], json!([15, 15, 15]));
        assert_eq!(value["cpu_model"], "AMD EPYC 7763");
    }

    #[test]
    fn full_record() {
        let value = full_meta(&config(), &dataset(), &probe()).describe().unwrap();
        assert_eq!(
            value,
            json!({
                "graph_name": "ogbn-arxiv",
                "train_mode": "full",
                "cpu_model": "AMD EPYC 7763",
                "num_node": 10,
                "num_edge": 20,
                "feat_width": 8,
                "num_epoch": 5,
                "num_partition": 2,
            })
        );
    }

    #[test]
    fn sampled_record_lists_gpus() {
        let meta = sampled_minibatch_meta(&config(), &dataset(), &probe());
        assert_eq!(meta.system_name, "quiver");
        assert_eq!(meta.gpu_model, vec!["NVIDIA A100", "NVIDIA A100"]);

        let value = meta.describe().unwrap();
        assert_eq!(value["sample_mode"], "uva");
        assert_eq!(value["train_mode"], "minibatch");
    }

    #[test]
    fn unavailable_probe_degrades_fields() {
        let meta = sampled_minibatch_meta(&config(), &dataset(), &StaticProbe::unavailable());
        assert_eq!(meta.cpu_model, "");
        assert!(meta.gpu_model.is_empty());
        assert_eq!(meta.num_node, 10);
    }

    #[test]
    fn builders_are_deterministic() {
        let (c, d, p) = (config(), dataset(), probe());
        assert_eq!(minibatch_meta(&c, &d, &p), minibatch_meta(&c, &d, &p));
        assert_eq!(full_meta(&c, &d, &p), full_meta(&c, &d, &p));
    }

    #[test]
    fn hyperparameters() {
        let value = train_meta(&config()).describe().unwrap();
        assert_eq!(
            value,
            json!({ "weight_decay": 5e-4, "learning_rate": 5e-3, "dropout": 0.5 })
        );
    }

    #[test]
    fn run_metadata_serializes_as_inner_record() {
        let inner = minibatch_meta(&config(), &dataset(), &probe());
        let tagged = RunMetadata::from(inner.clone());
        assert_eq!(tagged.train_mode(), crate::metadata::TrainMode::Minibatch);
        assert_eq!(tagged.graph_name(), GraphName::OgbnArxiv);
        assert_eq!(tagged.describe().unwrap(), inner.describe().unwrap());
    }
}
