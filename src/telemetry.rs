//! Tracing subscriber setup.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs a global `fmt` subscriber honouring `log_level` and `log_format`.
///
/// Does nothing if a global subscriber is already installed, so embedding
/// applications that configure tracing themselves are unaffected.
///
/// # Errors
///
/// Returns an error if `log_level` is not a valid filter directive.
pub fn init(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = if config.log_format == "json" {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    };

    if installed {
        tracing::debug!(format = %config.log_format, "Tracing initialised");
    }

    Ok(())
}
