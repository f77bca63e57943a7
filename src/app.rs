use dioxus::prelude::*;

use crate::context::get_landing_config;
use crate::pages::{Games, Landing};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Splash overlay, challenge grid and the Join Us button
/// - `/games` - The challenge grid on its own
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/games")]
    Games {},
}

/// Root application component.
///
/// Provides global styles, landing config and intro state, and routing.
#[component]
pub fn App() -> Element {
    let config = use_context_provider(get_landing_config);

    // Flipped by the splash overlay's completion callback
    let intro_complete: Signal<bool> = use_signal(|| config.skip_intro);
    use_context_provider(|| intro_complete);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
