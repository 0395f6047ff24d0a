use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset and the caller has no preference.
pub const DEFAULT_FILTER: &str = "info,sqlx=warn,sea_orm=info";

fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Initialize tracing subscriber with compact human-readable output on stdout.
/// - Respects `RUST_LOG` if set
/// - Falls back to `default_filter`
pub fn init_logging_default(default_filter: &str) {
    let _ = fmt()
        .with_env_filter(env_filter(default_filter))
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// Initialize tracing subscriber with JSON structured output.
/// - Respects `RUST_LOG` if set, e.g. `RUST_LOG=info,query=debug` to see per-query page sizes
/// - Writes to stdout for consistent container logging behavior
pub fn init_logging_json(default_filter: &str) {
    let _ = fmt()
        .with_env_filter(env_filter(default_filter))
        .with_target(true)
        .json()
        .with_writer(io::stdout)
        .try_init();
}

/// Pick the output format at runtime (usually from `[logging] format` in config).
pub fn init_logging(json: bool, default_filter: &str) {
    if json {
        init_logging_json(default_filter);
    } else {
        init_logging_default(default_filter);
    }
}
