//! Advitya Landing UI Components
//!
//! Dioxus components shared by the landing page, in the festival's
//! vintage-parchment look:
//! - **Cream (#FFFDD0)**: splash background
//! - **Ring colours** (blue, yellow, red, green): the counting year digits
//! - **Sepia (#654321)**: borders, badges and connector lines
//! - **Signal blue (#2D8CFF)**: the floating call to action
//!
//! Animation timing lives in `advitya-core`; these components only sample it.

pub mod components;

pub use components::*;
