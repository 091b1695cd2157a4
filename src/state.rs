//! Application State
//!
//! Holds the catalog and the location of the site's static files. The state
//! is built once in `main` and handed to every handler through an `Arc`.

use crate::catalog::Catalog;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Name of the landing page inside the static directory
pub const INDEX_FILE: &str = "index.html";

/// Core application state
#[derive(Debug)]
pub struct AppState {
    /// Immutable product and category data
    pub catalog: Catalog,

    /// Directory containing `index.html`, `styles.css`, `js/` and `assets/`
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(catalog: Catalog, static_dir: PathBuf) -> Self {
        tracing::info!(static_dir = ?static_dir, "Using static directory");
        Self {
            catalog,
            static_dir,
        }
    }

    /// Finds the static directory when none is configured.
    ///
    /// Tries, in order: the current directory, `./static`, the parent
    /// directory. Falls back to `.`.
    pub fn locate_static_dir() -> PathBuf {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::locate_static_dir_from(&current_dir)
    }

    fn locate_static_dir_from(current_dir: &Path) -> PathBuf {
        if current_dir.join(INDEX_FILE).exists() {
            return current_dir.to_path_buf();
        }

        let nested = current_dir.join("static");
        if nested.join(INDEX_FILE).exists() {
            return nested;
        }

        if let Some(parent) = current_dir.parent() {
            if parent.join(INDEX_FILE).exists() {
                return parent.to_path_buf();
            }
        }

        PathBuf::from(".")
    }

    /// Reads the landing page from disk.
    pub async fn load_index_html(&self) -> Result<String, axum::http::StatusCode> {
        let path = self.static_dir.join(INDEX_FILE);
        tokio::fs::read_to_string(&path).await.map_err(|e| {
            tracing::warn!(path = ?path, error = %e, "Could not read landing page");
            if e.kind() == std::io::ErrorKind::NotFound {
                axum::http::StatusCode::NOT_FOUND
            } else {
                axum::http::StatusCode::INTERNAL_SERVER_ERROR
            }
        })
    }
}
