//! Logging setup for the skydocs CLI.
//!
//! Verbosity is resolved in this order:
//! 1. `--verbose`: debug for the skydocs crates
//! 2. `--quiet`: errors only
//! 3. `RUST_LOG`
//! 4. info for the skydocs crates

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "skydocs=debug,skydocs_config=debug,skydocs_cli=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_FILTER: &str = "skydocs=info,skydocs_config=info,skydocs_cli=info";

/// Installs the global tracing subscriber. Call once, before any logging.
///
/// Logs go to stderr so `preload` output on stdout stays clean.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = build_filter(verbose, quiet);

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Whether stderr should receive ANSI colors.
///
/// `NO_COLOR` disables and `FORCE_COLOR` forces colors; otherwise the
/// terminal decides.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::Term::stderr().features().colors_supported()
}
