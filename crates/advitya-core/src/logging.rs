//! Tracing setup shared by the landing binaries.
//!
//! `RUST_LOG` always wins; otherwise the default directive is used.
//!
//! ```ignore
//! advitya_core::logging::init(false);
//! tracing::info!("landing page starting");
//! ```

use tracing_subscriber::EnvFilter;

/// Directive used when `RUST_LOG` is unset
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Directive used when `RUST_LOG` is unset and verbose output was requested
pub const VERBOSE_DIRECTIVE: &str = "debug";

/// Build the filter for the given verbosity.
pub fn env_filter(verbose: bool) -> EnvFilter {
    let default = if verbose {
        VERBOSE_DIRECTIVE
    } else {
        DEFAULT_DIRECTIVE
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global fmt subscriber. Later calls are ignored.
pub fn init(verbose: bool) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_target(false)
        .try_init();

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init(false);
        init(true);
        tracing::info!("logging initialised");
    }
}
