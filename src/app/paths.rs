// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! The first available source wins:
//!
//! 1. a directory passed by the caller (tests, tools)
//! 2. `--config-dir`, recorded once at startup by [`init_cli_override`]
//! 3. the `PARALLAX_CARD_CONFIG_DIR` environment variable, if non-empty
//! 4. `<platform config dir>/ParallaxCard` from `dirs`

use std::path::PathBuf;
use std::sync::OnceLock;

/// Subdirectory created under the platform config dir.
const APP_DIR_NAME: &str = "ParallaxCard";

pub const ENV_CONFIG_DIR: &str = "PARALLAX_CARD_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Records the `--config-dir` argument. `None` leaves the lower sources in
/// charge; a second value is logged and ignored.
pub fn init_cli_override(config_dir: Option<String>) {
    let Some(dir) = config_dir else {
        return;
    };
    if CLI_CONFIG_DIR.set(PathBuf::from(&dir)).is_err() {
        tracing::warn!(dir = %dir, "config dir already set, ignoring");
    }
}

/// Resolves the config directory, `explicit` first.
///
/// Returns `None` only when no source applies and the platform has no
/// config directory.
pub fn get_app_config_dir_with_override(explicit: Option<PathBuf>) -> Option<PathBuf> {
    first_config_dir(
        explicit,
        CLI_CONFIG_DIR.get().cloned(),
        std::env::var(ENV_CONFIG_DIR).ok(),
        dirs::config_dir,
    )
}

/// Applies the precedence order to already gathered sources. The platform
/// lookup only runs when nothing else applies.
fn first_config_dir(
    explicit: Option<PathBuf>,
    cli: Option<PathBuf>,
    env: Option<String>,
    platform: impl FnOnce() -> Option<PathBuf>,
) -> Option<PathBuf> {
    explicit
        .or(cli)
        .or_else(|| env.filter(|value| !value.is_empty()).map(PathBuf::from))
        .or_else(|| platform().map(|base| base.join(APP_DIR_NAME)))
}
