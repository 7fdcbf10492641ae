//! Instrumentation core of a distributed graph learning benchmark harness.
//!
//! The training loop lives elsewhere. It brackets its phases with a
//! [`Timer`], appends one [`LogStep`] per epoch to a [`Logger`] and, at the
//! end, pairs the logged steps with a metadata record describing the run:
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use gnn_bench::{
//!     configs::Config,
//!     dataset::{Dataset, EdgeListGraph},
//!     metadata::minibatch_meta,
//!     probe::HostProbe,
//!     report::write_report,
//!     LogStep, Logger, Timer,
//! };
//!
//! # fn run(config: Arc<Config>, data: Dataset<EdgeListGraph>) -> gnn_bench::Result<()> {
//! let mut timer = Timer::new();
//! let mut logger = Logger::new();
//!
//! timer.start()?;
//! let sample_time = timer.record()?.as_secs_f64();
//! let epoch_time = timer.stop()?.as_secs_f64();
//! logger.append(LogStep {
//!     epoch: 0,
//!     eval_acc: 0.0,
//!     sample_time,
//!     load_time: 0.0,
//!     forward_time: 0.0,
//!     backward_time: 0.0,
//!     cur_epoch_time: epoch_time,
//!     acc_epoch_time: epoch_time,
//!     evaluate_time: 0.0,
//!     loss: 0.0,
//! });
//!
//! let meta = minibatch_meta(&config, &data, &HostProbe::new());
//! write_report(&config.log_file, &meta, &logger)?;
//! # Ok(())
//! # }
//! ```

pub mod configs;
pub mod dataset;
pub mod error;
pub mod metadata;
pub mod metrics;
pub mod probe;
pub mod report;
pub mod timer;
pub mod units;

pub use error::{HarnessErr, Result};
pub use metrics::{LogStep, Logger};
pub use timer::{Timer, TimerState};
