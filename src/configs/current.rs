use std::sync::Arc;

use parking_lot::RwLock;

use super::Config;

/// The config most recently registered with [`set_current`].
static CURRENT: RwLock<Option<Arc<Config>>> = RwLock::new(None);

/// Registers `config` as the current run configuration, returning the one it
/// replaces, if any.
///
/// Meant to be called once by the process entry point, before anything reads
/// [`current`]. Components below the entry point should receive the
/// `Arc<Config>` explicitly instead.
pub fn set_current(config: Arc<Config>) -> Option<Arc<Config>> {
    log::info!(
        "registering run config: graph {}, model {}, {} epoch(s)",
        config.graph_name,
        config.model,
        config.num_epoch
    );
    CURRENT.write().replace(config)
}

/// Returns the most recently registered config, or `None` if nothing has
/// been registered yet.
pub fn current() -> Option<Arc<Config>> {
    CURRENT.read().clone()
}
