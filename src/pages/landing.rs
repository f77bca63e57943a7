//! Landing page - splash overlay over the challenge grid.
//!
//! The grid stays transparent until the overlay reports completion, then
//! fades in. `--skip-intro` starts with the intro already complete.

use advitya_ui::JoinUsButton;
use dioxus::prelude::*;

use crate::components::{ChoiceGrid, CountdownOverlay};
use crate::context::{use_intro_complete, use_landing_config};

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    let config = use_landing_config();
    let mut intro_complete = use_intro_complete();

    let content_opacity = if intro_complete() {
        config.grid.content_opacity
    } else {
        0.0
    };

    rsx! {
        main { class: "landing",
            if !intro_complete() {
                CountdownOverlay {
                    display_duration_ms: config.overlay.display_duration_ms,
                    on_complete: move |_| intro_complete.set(true),
                }
            }

            ChoiceGrid { content_opacity }

            JoinUsButton {}
        }
    }
}
