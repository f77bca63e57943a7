//! Countdown Overlay Component
//!
//! Full-screen splash: the festival name with the year counting up beside it.
//! Stays up for the display duration (or until the visitor scrolls past the
//! threshold), slides away, then calls `on_complete` exactly once.

use advitya_core::overlay::{
    run_overlay, OverlayObserver, OverlayPhase, DEFAULT_DISPLAY_DURATION_MS,
};
use advitya_ui::CountingNumber;
use dioxus::prelude::*;
use tokio::sync::mpsc;

use crate::context::use_landing_config;
use crate::theme::colors::RING_COLORS;

/// Forwards `window.scrollY` on every scroll event
const SCROLL_LISTEN_JS: &str = r#"
if (window.__advityaScroll) {
  window.removeEventListener('scroll', window.__advityaScroll);
}
window.__advityaScroll = () => dioxus.send(window.scrollY);
window.addEventListener('scroll', window.__advityaScroll, { passive: true });
"#;

const SCROLL_UNLISTEN_JS: &str = r#"
if (window.__advityaScroll) {
  window.removeEventListener('scroll', window.__advityaScroll);
  window.__advityaScroll = undefined;
}
"#;

/// Bridges the overlay driver to this component's signals
struct PanelObserver {
    phase: Signal<OverlayPhase>,
    counter_started: Signal<bool>,
    on_complete: Option<EventHandler<()>>,
}

impl OverlayObserver for PanelObserver {
    fn phase_changed(&mut self, phase: OverlayPhase) {
        self.phase.set(phase);
    }

    fn counter_started(&mut self) {
        self.counter_started.set(true);
    }

    fn completed(&mut self) {
        tracing::info!("Splash overlay complete");
        if let Some(handler) = &self.on_complete {
            handler.call(());
        }
    }
}

/// Pump scroll offsets from the webview into the overlay driver.
async fn forward_scroll(scroll_tx: mpsc::UnboundedSender<f64>) {
    let mut listener = document::eval(SCROLL_LISTEN_JS);
    while let Ok(offset) = listener.recv::<f64>().await {
        if scroll_tx.send(offset).is_err() {
            break;
        }
    }
}

/// Splash overlay with the counting year
///
/// Timers and the scroll bridge run on tasks owned by this component, so
/// unmounting at any phase cancels all of them. The scroll listener is
/// detached as soon as the overlay hides, even if the component stays mounted.
#[component]
pub fn CountdownOverlay(
    /// How long the overlay stays up without a scroll (ms)
    #[props(default = DEFAULT_DISPLAY_DURATION_MS)]
    display_duration_ms: u64,
    /// Called once the overlay has fully slid away
    #[props(default)]
    on_complete: Option<EventHandler<()>>,
) -> Element {
    let landing = use_landing_config();
    let phase = use_signal(OverlayPhase::default);
    let counter_started = use_signal(|| false);

    let mut overlay_config = landing.overlay.clone();
    overlay_config.display_duration_ms = display_duration_ms;

    // One lifecycle per mount
    use_hook(move || {
        let (scroll_tx, scroll_rx) = mpsc::unbounded_channel();
        let forwarder = spawn(forward_scroll(scroll_tx));
        spawn(async move {
            let mut observer = PanelObserver {
                phase,
                counter_started,
                on_complete,
            };
            run_overlay(overlay_config, scroll_rx, &mut observer).await;
            // Hidden: nothing reads scroll offsets any more
            forwarder.cancel();
            let _ = document::eval(SCROLL_UNLISTEN_JS);
        });
    });

    use_drop(|| {
        let _ = document::eval(SCROLL_UNLISTEN_JS);
    });

    let current = phase();
    if !current.is_visible() {
        return VNode::empty();
    }

    let phase_class = current.class();
    let digit_colors: Vec<String> = RING_COLORS.iter().map(|c| c.to_string()).collect();

    rsx! {
        div { class: "countdown-overlay {phase_class}",
            div { class: "countdown-glow" }

            div { class: "countdown-content",
                div { class: "countdown-title-row",
                    h1 { class: "countdown-title", "Advitya" }
                    CountingNumber {
                        config: landing.counter.clone(),
                        start: ReadOnlySignal::new(counter_started),
                        digit_colors,
                        class: "countdown-year".to_string(),
                    }
                }

                div { class: "countdown-scroll-hint",
                    span { class: "scroll-hint-chevron", "aria-hidden": "true", "\u{2304}" }
                }
            }
        }
    }
}
