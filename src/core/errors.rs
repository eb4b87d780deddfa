//!    Error handling
//!
//! Application-boundary errors use anyhow; the editing core keeps small
//! concrete enums (`CommitError`, `RegistryError`) that convert cleanly
//! through `?` when they cross into app code.

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, ensure, Error};
use anyhow::Result;
use std::path::Path;

/// Result type alias for convenience throughout the application
pub type FieldmarkResult<T> = Result<T>;

/// Checks that a workspace path is usable before the app starts: an
/// existing path must be a regular file, and a missing one must at least
/// have a directory to be created in later.
pub fn validate_workspace_path<P: AsRef<Path>>(path: P) -> FieldmarkResult<()> {
    let path = path.as_ref();

    if path.exists() {
        ensure!(
            path.is_file(),
            "workspace path is not a file: {}",
            path.display()
        );
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        ensure!(
            parent.as_os_str().is_empty() || parent.is_dir(),
            "workspace directory does not exist: {}",
            parent.display()
        );
    }
    Ok(())
}

/// Checks a latitude/longitude pair from the CLI.
pub fn validate_map_origin(lat: f64, lon: f64) -> FieldmarkResult<()> {
    ensure!(lat.is_finite() && lon.is_finite(), "coordinates must be finite");
    ensure!(
        (-90.0..=90.0).contains(&lat),
        "latitude out of range [-90, 90]: {}",
        lat
    );
    ensure!(
        (-180.0..=180.0).contains(&lon),
        "longitude out of range [-180, 180]: {}",
        lon
    );
    Ok(())
}
