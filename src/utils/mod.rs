use std::path::{Path, PathBuf};

/// Date format used for due dates throughout the crate (`YYYY-MM-DD`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default name of the configuration file
pub const CONFIG_FILE: &str = "inventory.json";

/// Get the path to the configuration file inside a directory
pub fn get_config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE)
}
