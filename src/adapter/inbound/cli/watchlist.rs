//! Handler for the `watchlist` command.

use std::path::Path;

use crate::adapter::inbound::cli::{config, output};
use crate::error::Result;

/// Print every watchlist entry with its derived cheap price.
#[allow(clippy::result_large_err)]
pub fn execute(config_path: &Path) -> Result<()> {
    let config = config::load(config_path)?;
    let watchlist = config.watchlist()?;
    output::watchlist(&watchlist);
    Ok(())
}
