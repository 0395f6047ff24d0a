//! Shared helpers for binaries and tests across the workspace.

pub mod utils {
    pub mod logging;
}

pub use utils::logging::{init_logging, init_logging_default, init_logging_json, DEFAULT_FILTER};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        // try_init swallows the second registration
        init_logging(false, DEFAULT_FILTER);
        init_logging(true, DEFAULT_FILTER);
        tracing::info!("logging initialised twice without panicking");
    }
}
