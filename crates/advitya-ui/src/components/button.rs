//! Button Components
//!
//! - Primary: Standard action, sepia border
//! - Cta: Solid blue call to action with a hard black outline
//! - Ghost: Subtle/secondary action

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Standard action button
    #[default]
    Primary,
    /// Call to action - solid blue, lifts on hover
    Cta,
    /// Subtle/secondary action
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Cta => "btn-cta",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Join a variant class with optional extra classes
fn button_class(variant: ButtonVariant, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", variant.class(), extra),
        _ => variant.class().to_string(),
    }
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Cta,
///         onclick: move |_| register(),
///         "Register"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Floating "Join Us" call to action, pinned bottom-centre above the page.
///
/// The arrow glyph nudges up-right and bounces once on hover (CSS only).
#[component]
pub fn JoinUsButton(
    /// Button label
    #[props(default = "Join Us".to_string())]
    label: String,
    /// Click handler
    #[props(default)]
    onclick: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div { class: "join-us-dock",
            Button {
                variant: ButtonVariant::Cta,
                class: "join-us-btn".to_string(),
                onclick: move |_| {
                    tracing::debug!("Join Us clicked");
                    if let Some(handler) = &onclick {
                        handler.call(());
                    }
                },
                span { class: "join-us-arrow", "aria-hidden": "true", "\u{2794}" }
                "{label}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Cta.class(), "btn-cta");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn button_class_joins_extra() {
        assert_eq!(button_class(ButtonVariant::Cta, None), "btn-cta");
        assert_eq!(button_class(ButtonVariant::Cta, Some("")), "btn-cta");
        assert_eq!(
            button_class(ButtonVariant::Cta, Some("join-us-btn")),
            "btn-cta join-us-btn"
        );
        assert_eq!(
            button_class(ButtonVariant::Ghost, Some("games-back")),
            "btn-ghost games-back"
        );
    }
}
