//! Logging setup
//!
//! Logs go to stderr so JSON written to stdout stays machine-readable.
//! `RUST_LOG` takes precedence over the verbosity flag.

use tracing_subscriber::{fmt, EnvFilter};

pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "warn,cardassist=debug,cardassist_app=debug,cardassist_gen=debug"
    } else {
        "warn,cardassist=info,cardassist_app=info,cardassist_gen=info"
    }
}

pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    // A subscriber may already be installed (tests, embedding)
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init();
}
