// SPDX-License-Identifier: MPL-2.0
use parallax_card::app::{self, paths, Flags};
use pico_args::Arguments;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (`RUST_LOG` syntax).
const LOG_ENV: &str = "PARALLAX_CARD_LOG";

const HELP: &str = "\
parallax_card - a share card that tilts with the device

USAGE:
  parallax_card [OPTIONS]

OPTIONS:
  --lang <LOCALE>        UI language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  --motion <SOURCE>      pointer, simulated, trace or none
  --trace <FILE>         Motion trace replayed by the trace source
  --card-image <FILE>    Replacement card background image
  --avatar-image <FILE>  Replacement avatar image
  -h, --help             Print this help
";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Reads an optional flag value, ignoring (and logging) malformed input.
fn opt_value<T>(args: &mut Arguments, key: &'static str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(flag = key, error = %err, "ignoring invalid argument");
            None
        }
    }
}

fn main() -> iced::Result {
    init_logging();
    let mut args = Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: opt_value(&mut args, "--lang"),
        config_dir: opt_value(&mut args, "--config-dir"),
        motion: opt_value(&mut args, "--motion"),
        trace: opt_value::<PathBuf>(&mut args, "--trace"),
        card_image: opt_value::<PathBuf>(&mut args, "--card-image"),
        avatar_image: opt_value::<PathBuf>(&mut args, "--avatar-image"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    paths::init_cli_override(flags.config_dir.clone());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");
    app::run(flags)
}
