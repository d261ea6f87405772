//! Parameter file hot-reloading.
//!
//! Watches the episode parameter file and signals the main loop when it
//! changes. The loop reloads the file between episodes, so a running episode
//! never sees a half-applied configuration.

use anyhow::{Context, Result};
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher as NotifyWatcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use tracing::{error, info};

/// Keeps the underlying watcher alive for as long as it is held.
pub struct ParamWatcher {
    _watcher: RecommendedWatcher,
    changes: Receiver<PathBuf>,
}

impl ParamWatcher {
    /// Whether the file changed since the last call. Drains all pending events.
    pub fn changed(&self) -> bool {
        self.changes.try_iter().count() > 0
    }
}

pub fn start(path: &Path) -> Result<ParamWatcher> {
    let (tx, changes) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
        Ok(event) => {
            if event.kind.is_modify() || event.kind.is_create() {
                for path in event.paths {
                    // The receiver is gone once the run ends.
                    let _ = tx.send(path);
                }
            }
        }
        Err(e) => error!("Error watching parameter file: {e:?}"),
    })?;

    watcher
        .watch(path, RecursiveMode::NonRecursive)
        .with_context(|| format!("cannot watch {}", path.display()))?;
    info!("Watching {} for parameter changes.", path.display());
    Ok(ParamWatcher { _watcher: watcher, changes })
}
