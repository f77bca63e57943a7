//! Colour constants for the festival look.

#![allow(dead_code)]

// === SPLASH ===
pub const CREAM: &str = "#FFFDD0";
pub const INK: &str = "#000000";

// === RING COLOURS (year digits) ===
pub const RING_BLUE: &str = "#0085C7";
pub const RING_YELLOW: &str = "#F4C300";
pub const RING_RED: &str = "#DF0024";
pub const RING_GREEN: &str = "#009F3D";

/// Cycled across the digits of the counting year
pub const RING_COLORS: [&str; 4] = [RING_BLUE, RING_YELLOW, RING_RED, RING_GREEN];

// === PARCHMENT (choice grid) ===
pub const SEPIA: &str = "#654321";
pub const SADDLE: &str = "#8B4513";
pub const INK_BROWN: &str = "#3d2817";
pub const TAN: &str = "#d2b48c";
pub const GOLD: &str = "#d4af37";
pub const BADGE_RED: &str = "#8B0000";

// === CALL TO ACTION ===
pub const CTA_BLUE: &str = "#2D8CFF";
pub const CTA_BLUE_HOVER: &str = "#1d6fd6";
