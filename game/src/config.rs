//! Settings file loading.

use bevy::prelude::*;
use sim::GameConfig;

const CONFIG_PATH: &str = "config.ron";

/// Load `config.ron` from the working directory. A missing file is normal
/// (first run, packaged build); a malformed one is reported and ignored.
pub fn load_config() -> GameConfig {
    let text = match std::fs::read_to_string(CONFIG_PATH) {
        Ok(text) => text,
        Err(_) => {
            info!("No {CONFIG_PATH} found, using default settings");
            return GameConfig::default();
        }
    };

    match ron::from_str(&text) {
        Ok(config) => {
            info!("Loaded settings from {CONFIG_PATH}");
            config
        }
        Err(e) => {
            warn!("Failed to parse {CONFIG_PATH} ({e}), using default settings");
            GameConfig::default()
        }
    }
}
