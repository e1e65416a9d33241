use std::fs;
use std::path::Path;

use crate::error::{LexiconError, Result};
use crate::model::config::ConvertConfig;

/// Reads a JSON config file. Keys that are absent take their defaults.
pub fn load(path: &Path) -> Result<ConvertConfig> {
    if !path.exists() {
        return Err(LexiconError::Config(format!("{} not found", path.display())));
    }

    let data = fs::read_to_string(path)?;

    serde_json::from_str::<ConvertConfig>(&data)
        .map_err(|e| LexiconError::Config(format!("invalid {}: {e}", path.display())))
}
