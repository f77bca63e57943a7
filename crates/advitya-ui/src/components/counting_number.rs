//! Counting Number Component
//!
//! Renders the text of an `advitya_core` reveal counter. The counter starts
//! the first time `start` reads true and runs on a task owned by this
//! component, so unmounting stops it mid-count.

use advitya_core::reveal::{animate, initial_text, CounterConfig};
use dioxus::prelude::*;

/// Properties for the CountingNumber component
#[derive(Clone, PartialEq, Props)]
pub struct CountingNumberProps {
    /// Range, timing and number format
    pub config: CounterConfig,
    /// Begin counting once this becomes true
    pub start: ReadOnlySignal<bool>,
    /// Colour each character, cycling through the list; empty renders plain text
    #[props(default)]
    pub digit_colors: Vec<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Colour for the character at `index`, cycling through `colors`
pub fn digit_color(colors: &[String], index: usize) -> Option<&str> {
    if colors.is_empty() {
        None
    } else {
        Some(colors[index % colors.len()].as_str())
    }
}

/// Animated number
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CountingNumber {
///         config: CounterConfig::year(2026),
///         start: started,
///     }
/// }
/// ```
#[component]
pub fn CountingNumber(props: CountingNumberProps) -> Element {
    let config = props.config.clone();
    let mut text = use_signal(|| initial_text(&config));
    let mut started = use_signal(|| false);
    let start = props.start;

    use_effect(move || {
        if !start() || *started.peek() {
            return;
        }
        started.set(true);

        let config = config.clone();
        spawn(async move {
            let state = animate(&config, move |_, frame| text.set(frame)).await;
            tracing::debug!(value = state.current_value, "Counting number finished");
        });
    });

    let extra_class = props.class.as_deref().unwrap_or("");
    let current = text();

    rsx! {
        span {
            class: "counting-number {extra_class}",
            "data-slot": "counting-number",
            if props.digit_colors.is_empty() {
                "{current}"
            } else {
                for (index, ch) in current.chars().enumerate() {
                    {
                        let color = digit_color(&props.digit_colors, index).unwrap_or("inherit");
                        rsx! {
                            span {
                                key: "{index}",
                                class: "counting-digit",
                                style: "color: {color};",
                                "{ch}"
                            }
                        }
                    }
                }
            }
        }
    }
}
