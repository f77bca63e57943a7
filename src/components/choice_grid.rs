//! Choice Grid Component
//!
//! The ten challenges on a parchment card, laid out along a snake path with
//! dashed connectors between consecutive circles. Tapping a circle selects it
//! and shows its description; tapping it again clears the selection.

use std::rc::Rc;
use std::time::Duration;

use advitya_core::catalog::{GridPos, GAMES};
use advitya_core::connectors::{
    anchor_center, compute_connectors, AnchorSample, ConnectorLine, Rect, SETTLE_DELAY_MS,
};
use advitya_core::selection::SelectionState;
use dioxus::prelude::*;

use crate::context::use_landing_config;

/// Signals `true` on every window resize
const RESIZE_LISTEN_JS: &str = r#"
if (window.__advityaResize) {
  window.removeEventListener('resize', window.__advityaResize);
}
window.__advityaResize = () => dioxus.send(true);
window.addEventListener('resize', window.__advityaResize);
"#;

const RESIZE_UNLISTEN_JS: &str = r#"
if (window.__advityaResize) {
  window.removeEventListener('resize', window.__advityaResize);
  window.__advityaResize = undefined;
}
"#;

/// Per-item pop-in stagger (ms)
const ITEM_STAGGER_MS: u32 = 50;

/// Measure every circle relative to the grid; unmeasurable circles are `None`.
async fn measure_anchors(
    grid: Option<Rc<MountedData>>,
    circles: Vec<Option<Rc<MountedData>>>,
    positions: &[GridPos],
) -> Vec<Option<AnchorSample>> {
    let grid_rect = match grid {
        Some(grid) => grid
            .get_client_rect()
            .await
            .ok()
            .map(|r| Rect::new(r.origin.x, r.origin.y, r.size.width, r.size.height)),
        None => None,
    };
    let Some(grid_rect) = grid_rect else {
        return vec![None; circles.len()];
    };

    let mut anchors = Vec::with_capacity(circles.len());
    for (circle, grid_pos) in circles.iter().zip(positions) {
        let sample = match circle {
            Some(circle) => circle.get_client_rect().await.ok().map(|r| AnchorSample {
                center: anchor_center(
                    Rect::new(r.origin.x, r.origin.y, r.size.width, r.size.height),
                    grid_rect,
                ),
                grid: *grid_pos,
            }),
            None => None,
        };
        anchors.push(sample);
    }
    anchors
}

/// Re-measure and replace the whole connector set.
async fn redraw_connectors(
    grid: Signal<Option<Rc<MountedData>>>,
    circles: Signal<Vec<Option<Rc<MountedData>>>>,
    positions: Vec<GridPos>,
    mut lines: Signal<Vec<ConnectorLine>>,
) {
    let anchors = measure_anchors(grid(), circles(), &positions).await;
    let measured = anchors.iter().filter(|a| a.is_some()).count();
    let next = compute_connectors(&anchors);
    tracing::debug!(measured, lines = next.len(), "Connectors redrawn");
    lines.set(next);
}

/// Redraw after the settle delay, then again on every resize.
async fn track_layout(
    grid: Signal<Option<Rc<MountedData>>>,
    circles: Signal<Vec<Option<Rc<MountedData>>>>,
    positions: Vec<GridPos>,
    lines: Signal<Vec<ConnectorLine>>,
) {
    let mut resize = document::eval(RESIZE_LISTEN_JS);

    tokio::time::sleep(Duration::from_millis(SETTLE_DELAY_MS)).await;
    redraw_connectors(grid, circles, positions.clone(), lines).await;

    while resize.recv::<bool>().await.is_ok() {
        redraw_connectors(grid, circles, positions.clone(), lines).await;
    }
}

/// Challenge grid with single-slot selection
#[component]
pub fn ChoiceGrid(
    /// Opacity of the card content, for fading in after the splash
    #[props(default = 1.0)]
    content_opacity: f64,
) -> Element {
    let landing = use_landing_config();
    let layout = landing.grid.layout();
    let positions = layout.positions(GAMES.len());

    let mut selection = use_signal(SelectionState::new);
    let mut grid_node: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let mut circle_nodes: Signal<Vec<Option<Rc<MountedData>>>> =
        use_signal(|| vec![None; GAMES.len()]);
    let lines: Signal<Vec<ConnectorLine>> = use_signal(Vec::new);

    let tracked_positions = positions.clone();
    use_hook(move || {
        spawn(track_layout(grid_node, circle_nodes, tracked_positions, lines));
    });

    use_drop(|| {
        let _ = document::eval(RESIZE_UNLISTEN_JS);
    });

    let columns = layout.columns();
    let challenge_count = GAMES.len();
    let selected = selection();

    rsx! {
        section {
            class: "choose-path",
            style: "opacity: {content_opacity};",

            div { class: "choose-path-border" }
            div { class: "corner-flourish top-left", "\u{2767}" }
            div { class: "corner-flourish top-right", "\u{2767}" }
            div { class: "corner-flourish bottom-left", "\u{2767}" }
            div { class: "corner-flourish bottom-right", "\u{2767}" }

            div { class: "choose-path-heading",
                h1 { class: "choose-path-title", "Choose Your Game" }
                div { class: "choose-path-pill", "{challenge_count} Challenges Await" }
            }

            div {
                class: "choice-grid",
                style: "grid-template-columns: repeat({columns}, minmax(0, 1fr));",
                onmounted: move |evt: MountedEvent| grid_node.set(Some(evt.data())),

                div { class: "connector-layer",
                    for line in lines() {
                        {
                            let sequence = line.sequence;
                            let style = line.style();
                            rsx! {
                                div { key: "{sequence}", class: "connector-line", style: "{style}" }
                            }
                        }
                    }
                }

                for (index, (game, pos)) in GAMES.iter().zip(positions.iter()).enumerate() {
                    {
                        let id = game.id;
                        let label = game.label;
                        let icon = game.icon_token;
                        let description = game.description;
                        let is_selected = selected.is_selected(id);
                        let row = pos.row;
                        let column = pos.column;
                        let z_index = if is_selected { 100 } else { 10 };
                        let delay_ms = id * ITEM_STAGGER_MS;

                        rsx! {
                            div {
                                key: "{id}",
                                class: if is_selected { "choice-item selected" } else { "choice-item" },
                                style: "grid-row: {row}; grid-column: {column}; z-index: {z_index}; animation-delay: {delay_ms}ms;",
                                onclick: move |_| {
                                    let now = selection.write().toggle(id);
                                    tracing::debug!(clicked = id, selected = ?now, "Selection changed");
                                },

                                div {
                                    class: "choice-circle",
                                    onmounted: move |evt: MountedEvent| {
                                        if let Some(slot) = circle_nodes.write().get_mut(index) {
                                            *slot = Some(evt.data());
                                        }
                                    },
                                    div { class: "choice-icon", "{icon}" }
                                    div { class: "choice-badge", "{id}" }
                                }

                                div { class: "choice-label",
                                    span { "{label}" }
                                }

                                if is_selected {
                                    div { class: "choice-tooltip",
                                        div { class: "choice-tooltip-card",
                                            h3 { "{label}" }
                                            p { "{description}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
