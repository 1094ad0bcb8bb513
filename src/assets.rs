use std::path::PathBuf;

use bevy::asset::{Asset, FileAssetIo};
use bevy::prelude::*;

/// Absolute path the asset reader will use for `filename`. Sounds and the
/// font sit next to the game itself, so missing-file checks must resolve
/// against the same root the reader does, not the process working directory.
pub fn asset_path(filename: &str) -> PathBuf {
    FileAssetIo::get_base_path().join(filename)
}

/// Handle for `filename`, or `None` with a single startup warning when the
/// file is missing from the asset root. A `None` handle never plays or
/// renders anything.
pub fn load_or_warn<A: Asset>(asset_server: &AssetServer, filename: &str) -> Option<Handle<A>> {
    if asset_path(filename).exists() {
        Some(asset_server.load(filename.to_owned()))
    } else {
        warn!("asset file '{filename}' not found, continuing without it");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_paths_are_rooted_not_cwd_relative() {
        let path = asset_path("bounce.wav");
        assert!(path.is_absolute());
        assert!(path.ends_with("bounce.wav"));
    }
}
