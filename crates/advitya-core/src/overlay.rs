//! Timed splash overlay.
//!
//! The overlay walks `Entering → Visible → Dismissing → Hidden`. The state
//! machine ([`OverlayMachine`]) is pure: it consumes [`OverlayEvent`]s and
//! answers with [`OverlayEffect`]s (arm/cancel a timer, start the counter,
//! report completion). [`run_overlay`] executes those effects with tokio
//! timers and a channel of scroll offsets.
//!
//! ## Timeline
//!
//! ```text
//! t=0        Mounted        → Visible    arm CounterDelay(300ms), Display(duration)
//! t=300      CounterDelay   → (same)     StartCounter
//! t=duration Display        → Dismissing arm Exit(800ms)
//!     or     Scrolled(y>50) → Dismissing cancel Display, arm Exit(800ms)
//! +800       Exit           → Hidden     Complete (exactly once)
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::error::{ConfigError, ConfigResult};

/// How long the overlay stays up without a scroll (ms)
pub const DEFAULT_DISPLAY_DURATION_MS: u64 = 5000;

/// Delay between mount and counter start, so the entry animation leads (ms)
pub const COUNTER_START_DELAY_MS: u64 = 300;

/// Length of the slide-away exit animation (ms)
pub const EXIT_ANIMATION_MS: u64 = 800;

/// Scroll offset past which the overlay dismisses early (px)
pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Overlay timing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub display_duration_ms: u64,
    pub counter_delay_ms: u64,
    pub exit_animation_ms: u64,
    pub scroll_threshold_px: f64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            display_duration_ms: DEFAULT_DISPLAY_DURATION_MS,
            counter_delay_ms: COUNTER_START_DELAY_MS,
            exit_animation_ms: EXIT_ANIMATION_MS,
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
        }
    }
}

impl OverlayConfig {
    pub fn with_display_duration(display_duration_ms: u64) -> Self {
        Self {
            display_duration_ms,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !self.scroll_threshold_px.is_finite() || self.scroll_threshold_px < 0.0 {
            return Err(ConfigError::Invalid(
                "overlay scroll_threshold_px must be a non-negative number".to_string(),
            ));
        }
        Ok(())
    }

    fn timer_duration(&self, timer: OverlayTimer) -> Duration {
        let ms = match timer {
            OverlayTimer::CounterDelay => self.counter_delay_ms,
            OverlayTimer::Display => self.display_duration_ms,
            OverlayTimer::Exit => self.exit_animation_ms,
        };
        Duration::from_millis(ms)
    }
}

/// Lifecycle phase of one overlay mount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayPhase {
    #[default]
    Entering,
    Visible,
    Dismissing,
    /// Terminal
    Hidden,
}

impl OverlayPhase {
    /// Whether the overlay is still in the tree
    pub fn is_visible(&self) -> bool {
        !matches!(self, OverlayPhase::Hidden)
    }

    /// Whether the exit animation is playing
    pub fn is_dismissing(&self) -> bool {
        matches!(self, OverlayPhase::Dismissing)
    }

    /// CSS class for the overlay root in this phase
    pub fn class(&self) -> &'static str {
        match self {
            OverlayPhase::Entering => "overlay-entering",
            OverlayPhase::Visible => "overlay-visible",
            OverlayPhase::Dismissing => "overlay-dismissing",
            OverlayPhase::Hidden => "overlay-hidden",
        }
    }
}

/// Timers owned by the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayTimer {
    CounterDelay,
    Display,
    Exit,
}

impl OverlayTimer {
    const ALL: [OverlayTimer; 3] = [
        OverlayTimer::CounterDelay,
        OverlayTimer::Display,
        OverlayTimer::Exit,
    ];

    fn index(self) -> usize {
        match self {
            OverlayTimer::CounterDelay => 0,
            OverlayTimer::Display => 1,
            OverlayTimer::Exit => 2,
        }
    }
}

/// Input to the overlay state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayEvent {
    Mounted,
    TimerFired(OverlayTimer),
    /// Window scroll offset in pixels
    Scrolled(f64),
}

/// Work the host must perform after an event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayEffect {
    Arm(OverlayTimer, Duration),
    Cancel(OverlayTimer),
    StartCounter,
    Complete,
}

/// Pure overlay state machine
#[derive(Debug, Clone)]
pub struct OverlayMachine {
    config: OverlayConfig,
    phase: OverlayPhase,
    counter_started: bool,
    completed: bool,
}

impl OverlayMachine {
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            config,
            phase: OverlayPhase::Entering,
            counter_started: false,
            completed: false,
        }
    }

    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    pub fn visible(&self) -> bool {
        self.phase.is_visible()
    }

    pub fn dismissing(&self) -> bool {
        self.phase.is_dismissing()
    }

    pub fn counter_started(&self) -> bool {
        self.counter_started
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    fn arm(&self, timer: OverlayTimer) -> OverlayEffect {
        OverlayEffect::Arm(timer, self.config.timer_duration(timer))
    }

    /// Advance the machine. Events that do not apply to the current phase are
    /// no-ops and return no effects.
    pub fn handle(&mut self, event: OverlayEvent) -> Vec<OverlayEffect> {
        match (self.phase, event) {
            (OverlayPhase::Entering, OverlayEvent::Mounted) => {
                self.phase = OverlayPhase::Visible;
                vec![
                    self.arm(OverlayTimer::CounterDelay),
                    self.arm(OverlayTimer::Display),
                ]
            }

            (
                OverlayPhase::Visible | OverlayPhase::Dismissing,
                OverlayEvent::TimerFired(OverlayTimer::CounterDelay),
            ) => {
                if self.counter_started {
                    return Vec::new();
                }
                self.counter_started = true;
                vec![OverlayEffect::StartCounter]
            }

            (OverlayPhase::Visible, OverlayEvent::TimerFired(OverlayTimer::Display)) => {
                self.phase = OverlayPhase::Dismissing;
                vec![self.arm(OverlayTimer::Exit)]
            }

            (OverlayPhase::Visible, OverlayEvent::Scrolled(offset))
                if offset > self.config.scroll_threshold_px =>
            {
                tracing::debug!(offset, "Scroll past threshold, dismissing overlay early");
                self.phase = OverlayPhase::Dismissing;
                vec![
                    OverlayEffect::Cancel(OverlayTimer::Display),
                    self.arm(OverlayTimer::Exit),
                ]
            }

            (OverlayPhase::Dismissing, OverlayEvent::TimerFired(OverlayTimer::Exit)) => {
                self.phase = OverlayPhase::Hidden;
                let mut effects = Vec::new();
                if !self.counter_started {
                    effects.push(OverlayEffect::Cancel(OverlayTimer::CounterDelay));
                }
                if !self.completed {
                    self.completed = true;
                    effects.push(OverlayEffect::Complete);
                }
                effects
            }

            _ => Vec::new(),
        }
    }
}

/// Receives the overlay's observable changes from [`run_overlay`]
pub trait OverlayObserver {
    fn phase_changed(&mut self, _phase: OverlayPhase) {}

    fn counter_started(&mut self) {}

    fn completed(&mut self) {}
}

/// Pending deadlines, one slot per [`OverlayTimer`]
#[derive(Debug, Default)]
struct Deadlines([Option<Instant>; 3]);

impl Deadlines {
    fn set(&mut self, timer: OverlayTimer, at: Instant) {
        self.0[timer.index()] = Some(at);
    }

    fn clear(&mut self, timer: OverlayTimer) {
        self.0[timer.index()] = None;
    }

    /// Earliest pending timer; ties go to the earlier entry in `ALL`
    fn next_due(&self) -> Option<(OverlayTimer, Instant)> {
        OverlayTimer::ALL
            .iter()
            .filter_map(|timer| self.0[timer.index()].map(|at| (*timer, at)))
            .min_by_key(|(_, at)| *at)
    }
}

/// Run one overlay lifecycle to completion.
///
/// Scroll offsets arrive on `scroll_events`; a closed channel simply stops
/// early dismissal. Returns the machine in its terminal state. Dropping the
/// future drops every pending timer with it.
pub async fn run_overlay<O>(
    config: OverlayConfig,
    mut scroll_events: mpsc::UnboundedReceiver<f64>,
    observer: &mut O,
) -> OverlayMachine
where
    O: OverlayObserver + ?Sized,
{
    let mut machine = OverlayMachine::new(config);
    let mut deadlines = Deadlines::default();
    let mut scroll_open = true;
    let mut event = OverlayEvent::Mounted;

    tracing::debug!(
        display_duration_ms = machine.config().display_duration_ms,
        "Overlay mounted"
    );

    loop {
        let before = machine.phase();
        let effects = machine.handle(event);
        if machine.phase() != before {
            tracing::debug!(from = ?before, to = ?machine.phase(), "Overlay phase changed");
            observer.phase_changed(machine.phase());
        }
        for effect in effects {
            match effect {
                OverlayEffect::Arm(timer, after) => deadlines.set(timer, Instant::now() + after),
                OverlayEffect::Cancel(timer) => deadlines.clear(timer),
                OverlayEffect::StartCounter => observer.counter_started(),
                OverlayEffect::Complete => observer.completed(),
            }
        }

        if machine.phase() == OverlayPhase::Hidden {
            break;
        }

        let next = deadlines.next_due();
        if next.is_none() && !scroll_open {
            tracing::warn!(phase = ?machine.phase(), "Overlay stalled with no pending timers");
            break;
        }

        let timer_fired = async {
            match next {
                Some((timer, at)) => {
                    tokio::time::sleep_until(at).await;
                    timer
                }
                None => std::future::pending().await,
            }
        };

        event = tokio::select! {
            biased;
            timer = timer_fired => {
                deadlines.clear(timer);
                OverlayEvent::TimerFired(timer)
            }
            offset = scroll_events.recv(), if scroll_open => match offset {
                Some(offset) => OverlayEvent::Scrolled(offset),
                None => {
                    scroll_open = false;
                    continue;
                }
            },
        };
    }

    machine
}
