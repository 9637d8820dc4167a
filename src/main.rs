// SPDX-License-Identifier: MPL-2.0
use skyway::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
SkyWay Travel

USAGE:
  skyway [OPTIONS]

OPTIONS:
  -h, --help              Print this help
  --page <FILE>           Page manifest to show instead of the built-in page
  --config-dir <DIR>      Directory holding settings.toml
  --data-dir <DIR>        Directory holding the saved state
  --reduced-motion        Show content without entrance animations
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    init_logging();

    let flags = Flags {
        page_path: opt_string(&mut args, "--page"),
        config_dir: opt_string(&mut args, "--config-dir"),
        data_dir: opt_string(&mut args, "--data-dir"),
        reduced_motion: args.contains("--reduced-motion"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unknown arguments");
    }

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}

/// `RUST_LOG` wins over the default `info` level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn opt_string(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(%error, key, "invalid argument");
            None
        }
    }
}
