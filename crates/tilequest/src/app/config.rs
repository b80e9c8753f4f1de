use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

/// Window and loop settings read from `assets/config.json`. Every
/// field is optional; anything missing (or an unreadable file) falls
/// back to the defaults below, matching the shipped window of 900x600
/// at a 4x pixel scale and 30 frames per second.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct GameConfig {
    pub(crate) window_width: u32,
    pub(crate) window_height: u32,
    pub(crate) pixel_scale: u32,
    pub(crate) frame_rate: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: 900,
            window_height: 600,
            pixel_scale: 4,
            frame_rate: 30,
        }
    }
}

impl GameConfig {
    /// Logical drawing size for the virtual canvas. A scale of one (or
    /// zero) means drawing happens at window resolution with no
    /// scaling pass.
    pub(crate) fn logical_size(&self) -> Option<(u32, u32)> {
        if self.pixel_scale <= 1 {
            return None;
        }
        Some((
            (self.window_width / self.pixel_scale).max(1),
            (self.window_height / self.pixel_scale).max(1),
        ))
    }
}

pub(crate) fn load_game_config(path: &Path) -> GameConfig {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(error) => {
            info!(
                path = %path.display(),
                error = %error,
                "config_file_unreadable_using_defaults"
            );
            return GameConfig::default();
        }
    };
    match parse_game_config(&text) {
        Ok(config) => config,
        Err(reason) => {
            warn!(
                path = %path.display(),
                reason = reason.as_str(),
                "config_parse_failed_using_defaults"
            );
            GameConfig::default()
        }
    }
}

fn parse_game_config(text: &str) -> Result<GameConfig, String> {
    let deserializer = &mut serde_json::Deserializer::from_str(text);
    serde_path_to_error::deserialize(deserializer).map_err(|error| error.to_string())
}
