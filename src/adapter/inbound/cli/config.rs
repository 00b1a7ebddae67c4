//! Configuration loading shared by CLI handlers.

use std::path::Path;

use tracing::debug;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Load the configuration at `path`, falling back to the built-in watchlist
/// when the file does not exist.
#[allow(clippy::result_large_err)]
pub fn load(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!(path = %path.display(), "No config file, using built-in watchlist");
        output::warning(&format!(
            "{} not found, using built-in watchlist",
            path.display()
        ));
    }
    Config::load_or_default(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

    #[test]
    fn test_example_config_parses() {
        let config = Config::parse_toml(CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.watchlist().unwrap().len(), 3);
    }
}
