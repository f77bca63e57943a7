//! Games page - the challenge grid without the splash.

use advitya_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::ChoiceGrid;

#[component]
pub fn Games() -> Element {
    let navigator = use_navigator();

    rsx! {
        main { class: "landing",
            Button {
                variant: ButtonVariant::Ghost,
                class: "games-back".to_string(),
                onclick: move |_| {
                    navigator.push(Route::Landing {});
                },
                "\u{2190} Back"
            }
            ChoiceGrid {}
        }
    }
}
