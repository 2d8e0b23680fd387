use std::path::Path;

use anyhow::Context;

use crate::config::ProgressConfig;

/// Reads the calculation config from disk (JSON).
/// A missing file yields the default config.
pub fn load_config(path: &str) -> anyhow::Result<ProgressConfig> {
    if Path::new(path).exists() {
        let contents = std::fs::read_to_string(path).with_context(|| format!("reading config {path}"))?;
        let config: ProgressConfig =
            serde_json::from_str(&contents).with_context(|| format!("parsing config {path}"))?;
        log::info!(
            "config loaded from {} (average_includes_zero_actuals={})",
            path,
            config.average_includes_zero_actuals
        );
        Ok(config)
    } else {
        log::info!("no config at {}, using defaults", path);
        Ok(ProgressConfig::default())
    }
}

/// Writes the config as pretty-printed JSON.
pub fn save_config(config: &ProgressConfig, path: &str) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json).with_context(|| format!("writing config {path}"))?;
    log::info!("config saved to {}", path);
    Ok(())
}
