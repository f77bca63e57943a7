//! Landing page components.

mod choice_grid;
mod countdown_overlay;

pub use choice_grid::ChoiceGrid;
pub use countdown_overlay::CountdownOverlay;
