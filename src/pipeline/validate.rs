// src/pipeline/validate.rs

use std::path::Path;

use crate::error::Result;
use crate::models::Config;
use crate::utils::log;

/// Validate a configuration and print what it resolves to.
pub fn run_validate(config: &Config, config_path: &Path) -> Result<()> {
    log::info(&format!("Validating {}", config_path.display()));

    match config.validate() {
        Ok(()) => {
            log::success("Configuration OK");
            log::sub_item(&format!("Sources: {}", config.sources.len()));
            for source in &config.sources {
                log::sub_item(&format!("  {}", source));
            }
            log::sub_item(&format!("Output: {}", config.output_file));
            log::sub_item(&format!("Max items: {}", config.max_items));
            log::sub_item(&format!("User agent: {}", config.http.user_agent));
            log::sub_item(&format!("Timeout: {}s", config.http.timeout_secs));
            Ok(())
        }
        Err(e) => {
            log::error(&format!("Config validation failed: {}", e));
            Err(e)
        }
    }
}
