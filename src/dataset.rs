use std::{
    fmt::{self, Display},
    mem,
};

use ndarray::{Array1, ArrayD, IxDyn};

/// A compute device tensors can live on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Device {
    #[default]
    Cpu,
    Cuda(usize),
}

impl Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Cpu => f.write_str("cpu"),
            Device::Cuda(id) => write!(f, "cuda:{id}"),
        }
    }
}

/// An n-dimensional array tagged with the device it resides on.
///
/// The actual memory movement between devices belongs to the accelerator
/// runtime; from this side a transfer is synchronous and only changes where
/// the tensor is said to live.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor<A> {
    data: ArrayD<A>,
    device: Device,
}

impl<A> Tensor<A> {
    /// Wraps a host array.
    pub fn new(data: ArrayD<A>) -> Self {
        Self {
            data,
            device: Device::Cpu,
        }
    }

    /// Builds a one dimensional host tensor.
    pub fn from_vec(values: Vec<A>) -> Self {
        Self::new(Array1::from_vec(values).into_dyn())
    }

    #[inline]
    pub fn device(&self) -> Device {
        self.device
    }

    #[inline]
    pub fn data(&self) -> &ArrayD<A> {
        &self.data
    }

    #[inline]
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Moves the tensor to `device`.
    pub fn to(self, device: Device) -> Self {
        Self { device, ..self }
    }

    /// The size in bytes of the tensor's elements.
    pub fn nbytes(&self) -> usize {
        self.data.len() * mem::size_of::<A>()
    }
}

impl Tensor<i64> {
    /// Returns the positions of the set entries of `mask`, for sources that
    /// ship train/val/test splits as boolean node masks.
    pub fn indices_from_mask(mask: &[bool]) -> Self {
        let idx = mask
            .iter()
            .enumerate()
            .filter(|&(_, &set)| set)
            .map(|(i, _)| i as i64)
            .collect();

        Self::from_vec(idx)
    }

    /// Builds a `[rows, cols]` tensor of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::new(ArrayD::zeros(IxDyn(&[rows, cols])))
    }
}

/// Anything that can report the size of a graph.
pub trait Graph {
    fn num_nodes(&self) -> usize;
    fn num_edges(&self) -> usize;
}

/// A directed graph stored as parallel source/destination id lists.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EdgeListGraph {
    num_nodes: usize,
    src: Vec<u32>,
    dst: Vec<u32>,
}

impl EdgeListGraph {
    /// Creates a graph from `(src, dst)` pairs.
    ///
    /// Node ids are `u32`, so a graph holds at most `u32::MAX` nodes.
    ///
    /// # Panics
    /// If `num_nodes` exceeds `u32::MAX` or an endpoint is not smaller than
    /// `num_nodes`.
    pub fn new(num_nodes: usize, edges: impl IntoIterator<Item = (u32, u32)>) -> Self {
        assert!(
            u32::try_from(num_nodes).is_ok(),
            "{num_nodes} nodes do not fit u32 node ids"
        );
        let (src, dst): (Vec<_>, Vec<_>) = edges.into_iter().unzip();
        assert!(
            src.iter().chain(&dst).all(|&v| (v as usize) < num_nodes),
            "edge endpoint out of range for {num_nodes} nodes"
        );

        Self { num_nodes, src, dst }
    }

    /// Appends one `(v, v)` edge per node.
    pub fn add_self_loops(mut self) -> Self {
        // `new` bounds the node count to u32.
        let nodes = 0..u32::try_from(self.num_nodes).unwrap_or(u32::MAX);
        self.src.extend(nodes.clone());
        self.dst.extend(nodes);
        self
    }

    pub fn edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.src.iter().copied().zip(self.dst.iter().copied())
    }
}

impl Graph for EdgeListGraph {
    fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    fn num_edges(&self) -> usize {
        self.src.len()
    }
}

/// A loaded graph learning dataset.
///
/// `feat` is `None` for topology-only loads. `in_feats` still reports the
/// feature width of the source in that case.
#[derive(Debug, Clone)]
pub struct Dataset<G = EdgeListGraph> {
    pub graph: G,
    pub feat: Option<Tensor<f32>>,
    pub label: Tensor<i64>,
    pub train_idx: Tensor<i64>,
    pub val_idx: Tensor<i64>,
    pub test_idx: Tensor<i64>,
    pub num_classes: usize,
    pub in_feats: usize,
}

impl<G: Graph> Dataset<G> {
    /// Moves the labels and the three index sets to `device`.
    ///
    /// The graph and the features stay where they are: placing those is up
    /// to the sampling mode.
    pub fn to(&mut self, device: Device) {
        log::debug!("moving labels and split indices to {device}");
        for t in [
            &mut self.label,
            &mut self.train_idx,
            &mut self.val_idx,
            &mut self.test_idx,
        ] {
            t.device = device;
        }
    }

    /// Drops the feature tensor, keeping only the topology and the splits.
    pub fn without_features(self) -> Self {
        Self { feat: None, ..self }
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.graph.num_nodes()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.graph.num_edges()
    }
}
