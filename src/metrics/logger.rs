use serde_json::{Map, Value};

use super::LogStep;

/// A flat field-name to value record, ready for structured serialization.
pub type StepRecord = Map<String, Value>;

/// Append-only, insertion-ordered collection of [`LogStep`]s.
///
/// No validation is performed on append: keeping epochs ordered and unique is
/// up to the training loop. A single logger is meant to be owned by a single
/// worker; runs with several workers keep one logger each.
#[derive(Debug, Clone, Default)]
pub struct Logger {
    steps: Vec<LogStep>,
}

impl Logger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `step` at the end of the sequence.
    pub fn append(&mut self, step: LogStep) {
        log::debug!("logged epoch {} ({} steps so far)", step.epoch, self.steps.len() + 1);
        self.steps.push(step);
    }

    /// Projects every step into a flat record, in insertion order.
    ///
    /// This is a pure function of the logged steps: calling it repeatedly
    /// yields identical results until the next `append`.
    ///
    /// JSON has no NaN or infinity, so a non-finite value (a diverged `loss`,
    /// say) is recorded as `null`, the same as `serde_json` writes it.
    pub fn list(&self) -> Vec<StepRecord> {
        self.steps.iter().map(to_record).collect()
    }

    #[inline]
    pub fn steps(&self) -> &[LogStep] {
        &self.steps
    }

    #[inline]
    pub fn last(&self) -> Option<&LogStep> {
        self.steps.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

fn to_record(step: &LogStep) -> StepRecord {
    let fields: [(&str, Value); 10] = [
        ("epoch", step.epoch.into()),
        ("eval_acc", step.eval_acc.into()),
        ("sample_time", step.sample_time.into()),
        ("load_time", step.load_time.into()),
        ("forward_time", step.forward_time.into()),
        ("backward_time", step.backward_time.into()),
        ("cur_epoch_time", step.cur_epoch_time.into()),
        ("acc_epoch_time", step.acc_epoch_time.into()),
        ("evaluate_time", step.evaluate_time.into()),
        ("loss", step.loss.into()),
    ];

    fields
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}
