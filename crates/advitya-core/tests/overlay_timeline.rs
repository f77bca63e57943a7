//! Timing scenarios for the splash overlay driver.
//!
//! Runs on a paused tokio clock, so every timestamp below is exact virtual time.

use std::time::Duration;

use advitya_core::overlay::{run_overlay, OverlayConfig, OverlayObserver, OverlayPhase};
use tokio::sync::mpsc;
use tokio::time::Instant;

/// Something the observer saw, stamped with milliseconds since mount
#[derive(Debug, Clone, PartialEq)]
enum Seen {
    Phase(u64, OverlayPhase),
    CounterStarted(u64),
    Completed(u64),
}

struct Recorder {
    mounted_at: Instant,
    seen: Vec<Seen>,
}

impl Recorder {
    fn new() -> Self {
        Self {
            mounted_at: Instant::now(),
            seen: Vec::new(),
        }
    }

    fn elapsed_ms(&self) -> u64 {
        self.mounted_at.elapsed().as_millis() as u64
    }

    fn completions(&self) -> Vec<u64> {
        self.seen
            .iter()
            .filter_map(|s| match s {
                Seen::Completed(at) => Some(*at),
                _ => None,
            })
            .collect()
    }

    fn phase_at(&self, phase: OverlayPhase) -> Option<u64> {
        self.seen.iter().find_map(|s| match s {
            Seen::Phase(at, p) if *p == phase => Some(*at),
            _ => None,
        })
    }
}

impl OverlayObserver for Recorder {
    fn phase_changed(&mut self, phase: OverlayPhase) {
        let at = self.elapsed_ms();
        self.seen.push(Seen::Phase(at, phase));
    }

    fn counter_started(&mut self) {
        let at = self.elapsed_ms();
        self.seen.push(Seen::CounterStarted(at));
    }

    fn completed(&mut self) {
        let at = self.elapsed_ms();
        self.seen.push(Seen::Completed(at));
    }
}

#[tokio::test(start_paused = true)]
async fn test_no_scroll_hides_after_display_plus_exit() {
    let (_scroll_tx, scroll_rx) = mpsc::unbounded_channel();
    let mut recorder = Recorder::new();

    let machine = run_overlay(OverlayConfig::default(), scroll_rx, &mut recorder).await;

    assert_eq!(machine.phase(), OverlayPhase::Hidden);
    assert_eq!(
        recorder.seen,
        vec![
            Seen::Phase(0, OverlayPhase::Visible),
            Seen::CounterStarted(300),
            Seen::Phase(5000, OverlayPhase::Dismissing),
            Seen::Phase(5800, OverlayPhase::Hidden),
            Seen::Completed(5800),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_scroll_past_threshold_dismisses_early() {
    let (scroll_tx, scroll_rx) = mpsc::unbounded_channel();
    let mut recorder = Recorder::new();

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(500)).await;
        let _ = scroll_tx.send(20.0);
        tokio::time::sleep(Duration::from_millis(500)).await;
        let _ = scroll_tx.send(80.0);
        // Later scrolls are no-ops once dismissing
        let _ = scroll_tx.send(300.0);
        tokio::time::sleep(Duration::from_millis(100)).await;
        let _ = scroll_tx.send(600.0);
    });

    run_overlay(OverlayConfig::default(), scroll_rx, &mut recorder).await;

    assert_eq!(recorder.phase_at(OverlayPhase::Dismissing), Some(1000));
    assert_eq!(recorder.phase_at(OverlayPhase::Hidden), Some(1800));
    assert_eq!(recorder.completions(), vec![1800]);
}

#[tokio::test(start_paused = true)]
async fn test_closed_scroll_channel_still_completes() {
    let (scroll_tx, scroll_rx) = mpsc::unbounded_channel::<f64>();
    drop(scroll_tx);
    let mut recorder = Recorder::new();

    run_overlay(OverlayConfig::with_display_duration(1000), scroll_rx, &mut recorder).await;

    assert_eq!(recorder.completions(), vec![1800]);
}

#[tokio::test(start_paused = true)]
async fn test_short_display_never_starts_counter() {
    let (_scroll_tx, scroll_rx) = mpsc::unbounded_channel();
    let config = OverlayConfig {
        display_duration_ms: 0,
        exit_animation_ms: 100,
        ..OverlayConfig::default()
    };
    let mut recorder = Recorder::new();

    let machine = run_overlay(config, scroll_rx, &mut recorder).await;

    assert!(!machine.counter_started());
    assert!(!recorder
        .seen
        .iter()
        .any(|s| matches!(s, Seen::CounterStarted(_))));
    assert_eq!(recorder.completions(), vec![100]);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_driver_never_completes() {
    let (_scroll_tx, scroll_rx) = mpsc::unbounded_channel();
    let mut recorder = Recorder::new();

    let driver = run_overlay(OverlayConfig::default(), scroll_rx, &mut recorder);
    let result = tokio::time::timeout(Duration::from_millis(2000), driver).await;
    assert!(result.is_err());

    tokio::time::advance(Duration::from_secs(10)).await;
    assert!(recorder.completions().is_empty());
    assert_eq!(recorder.phase_at(OverlayPhase::Dismissing), None);
}

#[tokio::test(start_paused = true)]
async fn test_hidden_releases_scroll_channel() {
    let (scroll_tx, scroll_rx) = mpsc::unbounded_channel();
    let mut recorder = Recorder::new();

    run_overlay(OverlayConfig::default(), scroll_rx, &mut recorder).await;

    // The scroll forwarder sees its sends fail and stops listening
    assert!(scroll_tx.is_closed());
    assert!(scroll_tx.send(120.0).is_err());
    assert_eq!(recorder.completions(), vec![5800]);
}
