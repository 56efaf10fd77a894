use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt};

/// Maps the `-v` count to a default level. `RUST_LOG` takes precedence.
pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

pub fn init_logging(verbose: u8) {
    let level = level_for_verbosity(verbose);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    // A subscriber may already be installed when running under tests.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
#[path = "../tests/src_inline/logging/tests.rs"]
mod tests;
