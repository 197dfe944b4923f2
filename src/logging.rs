//! Diagnostic logging setup
//!
//! Log events go to stderr so they never mix with command output on stdout.
//! `GMCOLLAGE_LOG` takes an `EnvFilter` directive and wins over `-v`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "GMCOLLAGE_LOG";

fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

fn filter_for(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("gmcollage={}", level_for(verbose))))
}

pub fn init_tracing(verbose: u8) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
