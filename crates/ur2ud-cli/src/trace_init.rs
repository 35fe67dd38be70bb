use std::io;
use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

const VERBOSE_FILTER: &str = "ur2ud_core=debug,ur2ud_cli=debug";

/// Log filter for the process: `--verbose` wins, then `RUST_LOG`, then
/// warnings only.
pub fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new(VERBOSE_FILTER);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the stderr subscriber. Stdout carries the converted text, so
/// nothing else may write there.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_target(true)
            .with_env_filter(env_filter(verbose))
            .init();
    });
}
