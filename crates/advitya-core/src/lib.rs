//! Advitya Landing Core Library
//!
//! Animation, timing and layout logic behind the Advitya landing page.
//!
//! ## Overview
//!
//! The landing page is made of three pieces:
//!
//! - **Reveal counter** ([`reveal`]): a number that climbs from a start value to
//!   a target in fixed steps, snapping exactly onto the target at the end.
//! - **Timed overlay** ([`overlay`]): the full-screen splash that stays up for a
//!   display duration (or until the visitor scrolls) and then slides away,
//!   signalling completion exactly once.
//! - **Choice grid** ([`catalog`], [`selection`], [`connectors`]): the ten
//!   challenges laid out as a snake path, single-slot selection and the dashed
//!   connector geometry drawn between consecutive cards.
//!
//! Everything here is free of any rendering surface. The Dioxus front end
//! samples these functions from its own timers and layout events.
//!
//! ## Quick Start
//!
//! ```
//! use advitya_core::reveal::{CounterConfig, RevealSchedule};
//!
//! let schedule = RevealSchedule::new(&CounterConfig::year(2026));
//! let last = schedule.frames().last().unwrap();
//! assert_eq!(last.value, 2026.0);
//! ```

pub mod catalog;
pub mod config;
pub mod connectors;
pub mod error;
pub mod logging;
pub mod overlay;
pub mod reveal;
pub mod selection;

// Re-exports
pub use catalog::{ChoiceItem, GridLayout, GridPos, GAMES};
pub use config::{GridConfig, LandingConfig};
pub use connectors::{anchor_center, compute_connectors, AnchorSample, ConnectorLine, Point, Rect};
pub use error::{ConfigError, ConfigResult};
pub use overlay::{
    run_overlay, OverlayConfig, OverlayEffect, OverlayEvent, OverlayMachine, OverlayObserver,
    OverlayPhase, OverlayTimer,
};
pub use reveal::{
    animate, format_value, initial_text, CounterConfig, Easing, NumberFormat, RevealFrame,
    RevealSchedule, RevealState,
};
pub use selection::SelectionState;
