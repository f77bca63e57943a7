//! Reusable landing components
//!
//! - `Button` / `JoinUsButton`: call-to-action buttons
//! - `CountingNumber`: animated numeric reveal

mod button;
mod counting_number;

pub use button::*;
pub use counting_number::*;
