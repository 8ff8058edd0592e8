//! Application State

use std::path::PathBuf;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Root of the built frontend bundle
    pub static_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(static_dir: impl Into<PathBuf>) -> Self {
        Self {
            static_dir: Arc::new(static_dir.into()),
        }
    }

    /// The SPA shell every client route boots from
    pub fn index_path(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}
