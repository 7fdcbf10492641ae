use std::fmt::{self, Display};

use serde::Serialize;

/// Timing and accuracy figures for one training epoch.
///
/// All times are in seconds. `cur_epoch_time` and `acc_epoch_time` exclude
/// the evaluation phase, which is reported separately in `evaluate_time`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LogStep {
    pub epoch: usize,
    pub eval_acc: f64,
    pub sample_time: f64,
    pub load_time: f64,
    pub forward_time: f64,
    pub backward_time: f64,
    pub cur_epoch_time: f64,
    /// Accumulated epoch time up to and including this epoch.
    pub acc_epoch_time: f64,
    pub evaluate_time: f64,
    pub loss: f64,
}

impl LogStep {
    /// Emits the one-line epoch summary at info level.
    pub fn print(&self) {
        log::info!("{self}");
    }
}

impl Display for LogStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Epoch {:05} | Loss {:.4} | Accuracy {:.4} | Epoch Time {:.4}",
            self.epoch, self.loss, self.eval_acc, self.cur_epoch_time
        )
    }
}
