//! Command line arguments for the application

use crate::core::errors::FieldmarkResult;
use bevy::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// command line arguments for workspace loading and the initial map view
#[derive(Parser, Debug, Resource)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// path to the JSON workspace of saved work areas
    #[arg(long = "workspace", default_value = "fieldmark-workspace.json")]
    pub workspace_path: PathBuf,

    /// latitude of the map origin, decimal degrees
    #[arg(long, default_value_t = 37.0, allow_negative_numbers = true)]
    pub lat: f64,

    /// longitude of the map origin, decimal degrees
    #[arg(long, default_value_t = -122.0, allow_negative_numbers = true)]
    pub lon: f64,

    /// display debug information
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl CliArgs {
    pub fn validate(&self) -> FieldmarkResult<()> {
        crate::core::errors::validate_map_origin(self.lat, self.lon)?;
        crate::core::errors::validate_workspace_path(&self.workspace_path)?;
        Ok(())
    }
}
