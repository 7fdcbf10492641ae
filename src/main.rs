use std::sync::Arc;

use clap::Parser;
use env_logger::{Builder, Env};
use log::{info, warn};

use gnn_bench::{
    configs::{self, Args, Config},
    metadata::train_meta,
    probe::{EnvironmentProbe, HostProbe, ProbeOutcome},
    report::write_report,
    Logger,
};

fn main() -> anyhow::Result<()> {
    log_builder("RUST_LOG").init();

    let config = Arc::new(Config::from(Args::parse()));
    configs::set_current(config.clone());

    let probe = HostProbe::new();
    log_host(&probe);

    // The training loop appends to this logger; the document shape is the
    // same whether or not any steps were logged.
    let logger = Logger::new();
    write_report(&config.log_file, &train_meta(&config), &logger)?;

    Ok(())
}

/// Logs at info unless `var` says otherwise, so probe diagnostics and epoch
/// summaries show up on a bare run.
fn log_builder(var: &str) -> Builder {
    Builder::from_env(Env::default().filter_or(var, "info"))
}

fn log_host(probe: &impl EnvironmentProbe) {
    match probe.cpu_model() {
        ProbeOutcome::Available(cpu) => info!("cpu: {cpu}"),
        ProbeOutcome::Unavailable(reason) => warn!("cpu model unavailable: {reason}"),
    }

    match probe.gpu_models() {
        ProbeOutcome::Available(gpus) if gpus.is_empty() => info!("no gpus visible"),
        ProbeOutcome::Available(gpus) => info!("gpus: {}", gpus.join(", ")),
        ProbeOutcome::Unavailable(reason) => warn!("gpu models unavailable: {reason}"),
    }

    if let Some(topo) = probe.numa_topology().ok() {
        info!("{} numa node(s)", topo.num_nodes());
        if let Some((load, compute)) = topo.load_compute_cores(0) {
            info!("node 0: loader cores {load:?}, compute cores {compute:?}");
        }
    }
}
