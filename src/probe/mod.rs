//! Best-effort host environment introspection.
//!
//! Every probe answers with a [`ProbeOutcome`]: either the value, or the
//! reason it couldn't be obtained. Missing tools never abort the caller.

mod host;
mod numa;

pub use host::{parse_cpu_model, parse_gpu_models, HostProbe};
pub use numa::{parse_cpu_list, NumaTopology};

/// The result of asking the host for some piece of information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome<T> {
    Available(T),
    Unavailable(String),
}

impl<T> ProbeOutcome<T> {
    pub fn is_available(&self) -> bool {
        matches!(self, ProbeOutcome::Available(_))
    }

    pub fn ok(self) -> Option<T> {
        match self {
            ProbeOutcome::Available(v) => Some(v),
            ProbeOutcome::Unavailable(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ProbeOutcome<U> {
        match self {
            ProbeOutcome::Available(v) => ProbeOutcome::Available(f(v)),
            ProbeOutcome::Unavailable(reason) => ProbeOutcome::Unavailable(reason),
        }
    }
}

impl<T: Default> ProbeOutcome<T> {
    /// Returns the probed value, or an empty one after logging why `what`
    /// couldn't be determined.
    pub fn or_degraded(self, what: &str) -> T {
        match self {
            ProbeOutcome::Available(v) => v,
            ProbeOutcome::Unavailable(reason) => {
                log::warn!("{what} unavailable, leaving it empty: {reason}");
                T::default()
            }
        }
    }
}

/// Capability for inspecting the machine a run executes on.
pub trait EnvironmentProbe {
    /// The CPU model name, e.g. `AMD EPYC 7763 64-Core Processor`.
    fn cpu_model(&self) -> ProbeOutcome<String>;

    /// One model name per visible GPU. An empty list is a valid answer on a
    /// machine without accelerators.
    fn gpu_models(&self) -> ProbeOutcome<Vec<String>>;

    fn numa_topology(&self) -> ProbeOutcome<NumaTopology> {
        ProbeOutcome::Unavailable("numa topology not probed".into())
    }
}

/// A probe answering with fixed values, for hosts whose inventory is known
/// up front and for tests.
#[derive(Debug, Clone)]
pub struct StaticProbe {
    pub cpu: ProbeOutcome<String>,
    pub gpus: ProbeOutcome<Vec<String>>,
}

impl StaticProbe {
    pub fn new(cpu: impl Into<String>, gpus: Vec<String>) -> Self {
        Self {
            cpu: ProbeOutcome::Available(cpu.into()),
            gpus: ProbeOutcome::Available(gpus),
        }
    }

    /// A probe for which every query fails.
    pub fn unavailable() -> Self {
        Self {
            cpu: ProbeOutcome::Unavailable("no cpu inventory".into()),
            gpus: ProbeOutcome::Unavailable("no gpu inventory".into()),
        }
    }
}

impl EnvironmentProbe for StaticProbe {
    fn cpu_model(&self) -> ProbeOutcome<String> {
        self.cpu.clone()
    }

    fn gpu_models(&self) -> ProbeOutcome<Vec<String>> {
        self.gpus.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degraded_values_are_empty() {
        let probe = StaticProbe::unavailable();
        assert_eq!(probe.cpu_model().or_degraded("cpu model"), "");
        assert!(probe.gpu_models().or_degraded("gpu models").is_empty());
        assert!(!probe.numa_topology().is_available());
    }

    #[test]
    fn available_values_pass_through() {
        let probe = StaticProbe::new("Xeon", vec!["A100".into()]);
        assert_eq!(probe.cpu_model().ok().as_deref(), Some("Xeon"));
        assert_eq!(probe.gpu_models().map(|g| g.len()), ProbeOutcome::Available(1));
    }
}
