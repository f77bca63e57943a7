//! Context providers for the landing page.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(get_landing_config);
//!
//! // In child components
//! let config = use_landing_config();
//! ```

use advitya_core::LandingConfig;
use dioxus::prelude::*;

/// Get the landing config resolved from the command line.
pub fn get_landing_config() -> LandingConfig {
    crate::get_landing_config()
}

/// Hook to access the landing config from context.
pub fn use_landing_config() -> LandingConfig {
    use_context::<LandingConfig>()
}

/// Hook to read or set whether the splash intro has finished.
///
/// Set to true by the overlay's completion callback, or from the start
/// with `--skip-intro`.
pub fn use_intro_complete() -> Signal<bool> {
    use_context::<Signal<bool>>()
}
