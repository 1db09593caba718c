use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_ENV: &str = "ESSAYGAUGE_LOG";

/// Installs the stderr subscriber for the binary. `ESSAYGAUGE_LOG` wins over
/// `RUST_LOG`, which wins over the `--verbose` default.
pub fn init(verbose: bool) {
    let default_level = if verbose {
        "essaygauge=debug"
    } else {
        "essaygauge=warn"
    };

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
