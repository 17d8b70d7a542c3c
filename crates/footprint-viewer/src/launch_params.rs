//! Launch parameter parsing for the viewer.

use std::path::PathBuf;

use bevy::prelude::*;
use clap::Parser;

/// Default atlas texture, relative to the asset directory.
const DEFAULT_ATLAS: &str = "textures/building_atlas.png";

/// Launch parameters for the viewer.
#[derive(Resource, Debug, Clone, Parser)]
#[command(about = "3D viewer for building footprint geometry")]
pub struct LaunchParams {
    /// Response JSON file to display.
    pub input: PathBuf,

    /// Atlas texture path, relative to the asset directory.
    #[arg(long, default_value = DEFAULT_ATLAS)]
    pub atlas: String,

    /// Render without the atlas texture.
    #[arg(long)]
    pub untextured: bool,
}

/// Parse launch parameters from the command line.
pub fn parse() -> LaunchParams {
    LaunchParams::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = LaunchParams::try_parse_from(["footprint-viewer", "buildings.json"]).unwrap();
        assert_eq!(params.input, PathBuf::from("buildings.json"));
        assert_eq!(params.atlas, DEFAULT_ATLAS);
        assert!(!params.untextured);
    }

    #[test]
    fn test_input_is_required() {
        assert!(LaunchParams::try_parse_from(["footprint-viewer"]).is_err());
    }
}
