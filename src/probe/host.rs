use std::{
    io,
    path::PathBuf,
    process::Command,
};

use super::{EnvironmentProbe, NumaTopology, ProbeOutcome};

const CPU_MODEL_KEY: &str = "Model name:";
const SYSFS_NODES: &str = "/sys/devices/system/node";

/// Probes the local machine through its inventory tools.
///
/// - CPU: `lscpu`
/// - GPU: `nvidia-smi --query-gpu=name --format=csv,noheader`
/// - NUMA: sysfs node directories
///
/// Each query is a single blocking call with no retries.
#[derive(Debug, Clone)]
pub struct HostProbe {
    cpu_cmd: String,
    gpu_cmd: String,
    node_root: PathBuf,
}

impl Default for HostProbe {
    fn default() -> Self {
        Self {
            cpu_cmd: "lscpu".into(),
            gpu_cmd: "nvidia-smi".into(),
            node_root: PathBuf::from(SYSFS_NODES),
        }
    }
}

impl HostProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses other executables for the CPU and GPU inventories. They must
    /// accept the same arguments and print the same format as the defaults.
    pub fn with_commands(cpu_cmd: impl Into<String>, gpu_cmd: impl Into<String>) -> Self {
        Self {
            cpu_cmd: cpu_cmd.into(),
            gpu_cmd: gpu_cmd.into(),
            ..Self::default()
        }
    }

    /// Reads the NUMA layout from `root` instead of the sysfs default.
    pub fn with_node_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.node_root = root.into();
        self
    }
}

impl EnvironmentProbe for HostProbe {
    fn cpu_model(&self) -> ProbeOutcome<String> {
        match run(&self.cpu_cmd, &[]) {
            ProbeOutcome::Available(out) => match parse_cpu_model(&out) {
                Some(model) => ProbeOutcome::Available(model),
                None => ProbeOutcome::Unavailable(format!(
                    "no {CPU_MODEL_KEY:?} line in {} output",
                    self.cpu_cmd
                )),
            },
            ProbeOutcome::Unavailable(reason) => ProbeOutcome::Unavailable(reason),
        }
    }

    fn gpu_models(&self) -> ProbeOutcome<Vec<String>> {
        run(&self.gpu_cmd, &["--query-gpu=name", "--format=csv,noheader"])
            .map(|out| parse_gpu_models(&out))
    }

    fn numa_topology(&self) -> ProbeOutcome<NumaTopology> {
        match NumaTopology::from_sysfs(&self.node_root) {
            Ok(topo) if topo.num_nodes() > 0 => ProbeOutcome::Available(topo),
            Ok(_) => ProbeOutcome::Unavailable(format!(
                "no numa nodes under {}",
                self.node_root.display()
            )),
            Err(e) => ProbeOutcome::Unavailable(format!("{}: {e}", self.node_root.display())),
        }
    }
}

/// Runs `program` once and returns its stdout, or why it couldn't.
fn run(program: &str, args: &[&str]) -> ProbeOutcome<String> {
    let output = match Command::new(program).args(args).output() {
        Ok(output) => output,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return ProbeOutcome::Unavailable(format!("{program} not found"));
        }
        Err(e) => return ProbeOutcome::Unavailable(format!("failed to run {program}: {e}")),
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return ProbeOutcome::Unavailable(format!(
            "{program} exited with {}: {}",
            output.status,
            stderr.trim()
        ));
    }

    ProbeOutcome::Available(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Extracts the value of the `Model name:` line from `lscpu` output.
pub fn parse_cpu_model(lscpu: &str) -> Option<String> {
    let idx = lscpu.find(CPU_MODEL_KEY)?;
    let rest = &lscpu[idx + CPU_MODEL_KEY.len()..];
    let model = rest.lines().next().unwrap_or_default().trim();
    (!model.is_empty()).then(|| model.to_string())
}

/// Splits headerless csv `nvidia-smi` output into one model name per GPU.
pub fn parse_gpu_models(csv: &str) -> Vec<String> {
    csv.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LSCPU: &str = "\
Architecture:                    x86_64
CPU op-mode(s):                  32-bit, 64-bit
Vendor ID:                       AuthenticAMD
Model name:                      AMD EPYC 7763 64-Core Processor
CPU family:                      25
";

    #[test]
    fn cpu_model_from_lscpu() {
        assert_eq!(
            parse_cpu_model(LSCPU).as_deref(),
            Some("AMD EPYC 7763 64-Core Processor")
        );
    }

    #[test]
    fn cpu_model_missing_line() {
        assert_eq!(parse_cpu_model("Architecture: aarch64\n"), None);
        assert_eq!(parse_cpu_model("Model name:   \n"), None);
        assert_eq!(parse_cpu_model(""), None);
    }

    #[test]
    fn gpu_models_one_per_line() {
        let out = "NVIDIA A100-SXM4-80GB\nNVIDIA A100-SXM4-80GB\n";
        assert_eq!(
            parse_gpu_models(out),
            vec!["NVIDIA A100-SXM4-80GB", "NVIDIA A100-SXM4-80GB"]
        );
        assert!(parse_gpu_models("").is_empty());
        assert!(parse_gpu_models("\n  \n").is_empty());
    }

    #[test]
    fn missing_tools_are_unavailable() {
        let probe = HostProbe::with_commands(
            "gnn-bench-no-such-lscpu",
            "gnn-bench-no-such-nvidia-smi",
        )
        .with_node_root("/gnn-bench/no/such/dir");

        assert!(!probe.cpu_model().is_available());
        assert!(!probe.gpu_models().is_available());
        assert!(!probe.numa_topology().is_available());
    }

    #[test]
    fn failing_tools_are_unavailable() {
        let probe = HostProbe::with_commands("false", "false");

        match probe.cpu_model() {
            ProbeOutcome::Unavailable(reason) => assert!(reason.contains("exited with")),
            other => panic!("expected Unavailable, got {other:?}"),
        }
        assert!(!probe.gpu_models().is_available());
    }
}
