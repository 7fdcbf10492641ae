use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

use crate::timer::TimerState;

/// The result type used across the harness.
pub type Result<T> = std::result::Result<T, HarnessErr>;

/// The harness error type.
#[derive(Debug)]
pub enum HarnessErr {
    /// A `Timer` operation was called in a state that doesn't allow it.
    IllegalState {
        op: &'static str,
        state: TimerState,
    },
    /// A closed-choice value (sample mode, model, graph) didn't match any variant.
    UnknownVariant {
        kind: &'static str,
        value: String,
    },
    InvalidArgument(String),
    Io(io::Error),
    Json(serde_json::Error),
}

impl Display for HarnessErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarnessErr::IllegalState { op, state } => {
                let hint = match state {
                    TimerState::Running => "use stop() before starting it again",
                    TimerState::Idle => "use start() to start it",
                };
                write!(f, "illegal timer transition: {op}() on a {state} timer, {hint}")
            }
            HarnessErr::UnknownVariant { kind, value } => {
                write!(f, "unknown {kind}: {value:?}")
            }
            HarnessErr::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            HarnessErr::Io(e) => write!(f, "io error: {e}"),
            HarnessErr::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl Error for HarnessErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            HarnessErr::Io(e) => Some(e),
            HarnessErr::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for HarnessErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for HarnessErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
