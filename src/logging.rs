//! Diagnostics for the exercise binaries.
//!
//! Exercises log the parsed input and the branch they took at `debug`, and the
//! runner opens an `exercise` span per run. Everything goes to stderr: stdout is
//! reserved for prompts and the one result line, which tests compare byte for byte.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber. Later calls leave the first one in place.
///
/// # Example
/// ```bash
/// RUST_LOG=intro_exercises=debug sum-calculator
/// ```
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    if tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init();
        init();
        tracing::debug!("still logging after second init");
    }
}
