use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use serde::Serialize;

use crate::{
    error::Result,
    metadata::Describe,
    metrics::{Logger, StepRecord},
};

/// The final document of a run: one metadata record plus the logged steps,
/// in order.
#[derive(Debug, Serialize)]
pub struct RunReport<'a, M: Describe> {
    pub meta: &'a M,
    pub steps: Vec<StepRecord>,
}

impl<'a, M: Describe> RunReport<'a, M> {
    pub fn new(meta: &'a M, logger: &Logger) -> Self {
        Self {
            meta,
            steps: logger.list(),
        }
    }

    /// Writes the report as pretty printed JSON to `path`, replacing any
    /// previous file.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        log::info!("wrote {} step(s) to {}", self.steps.len(), path.display());
        Ok(())
    }
}

/// Writes `meta` and every step in `logger` to `path`.
pub fn write_report<M: Describe>(path: &Path, meta: &M, logger: &Logger) -> Result<()> {
    RunReport::new(meta, logger).write_to(path)
}
