//! Numeric reveal counter.
//!
//! A displayed number climbs from a start value to a target in a fixed number
//! of steps. The interpolation is a pure function of the step index
//! ([`RevealSchedule::frame`]); the async [`animate`] driver only samples it
//! from a tokio interval. Intermediate values are truncated toward the start
//! value at the configured precision, so the sequence never passes the target,
//! and the final frame snaps exactly onto it.
//!
//! ```
//! use advitya_core::reveal::{CounterConfig, RevealSchedule};
//!
//! let schedule = RevealSchedule::new(&CounterConfig::year(2026));
//! let values: Vec<f64> = schedule.frames().map(|f| f.value).collect();
//! assert_eq!(values.len(), 60);
//! assert_eq!(values[0], 33.0);
//! assert_eq!(*values.last().unwrap(), 2026.0);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::{Instant, MissedTickBehavior};

use crate::error::{ConfigError, ConfigResult};

/// Number of interpolation steps used when none is configured
pub const DEFAULT_STEPS: u32 = 60;

/// Default animation length for the year counter (ms)
pub const DEFAULT_DURATION_MS: u64 = 2000;

/// Upper bound on decimal places; beyond this f64 stops being meaningful
pub const MAX_DECIMAL_PLACES: u8 = 10;

/// Progress curve applied to the step fraction before interpolating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Equal increments per step
    #[default]
    Linear,
    /// Fast start, gentle landing (approximates a damped spring)
    EaseOutCubic,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` onto eased progress in `[0, 1]`.
    ///
    /// Both curves are non-decreasing, which keeps the counter monotonic.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// How a counter value is rendered to text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    /// Fixed number of fractional digits
    pub decimal_places: u8,
    /// Zero-pad the integer part to the digit count of the target
    pub pad_start: bool,
    /// Replaces `.` between the integer and fractional parts
    pub decimal_separator: String,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimal_places: 0,
            pad_start: false,
            decimal_separator: ".".to_string(),
        }
    }
}

/// Configuration for one counter instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub start_value: f64,
    pub target_value: f64,
    pub duration_ms: u64,
    pub steps: u32,
    pub easing: Easing,
    /// Replaces the whole default format when present
    pub format: NumberFormat,
}

impl CounterConfig {
    /// Four-digit year reveal: counts up from zero, zero-padded, in 2 s.
    pub fn year(year: u32) -> Self {
        Self {
            start_value: 0.0,
            target_value: f64::from(year),
            duration_ms: DEFAULT_DURATION_MS,
            steps: DEFAULT_STEPS,
            easing: Easing::Linear,
            format: NumberFormat {
                pad_start: true,
                ..NumberFormat::default()
            },
        }
    }

    /// Reject values the schedule or formatter cannot represent.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.start_value.is_finite() || !self.target_value.is_finite() {
            return Err(ConfigError::Invalid(
                "counter start and target must be finite".to_string(),
            ));
        }
        if self.steps == 0 {
            return Err(ConfigError::Invalid(
                "counter steps must be at least 1".to_string(),
            ));
        }
        if self.format.decimal_places > MAX_DECIMAL_PLACES {
            return Err(ConfigError::Invalid(format!(
                "counter decimal_places must be at most {}",
                MAX_DECIMAL_PLACES
            )));
        }
        if self.format.decimal_separator.is_empty() {
            return Err(ConfigError::Invalid(
                "counter decimal_separator must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Text shown before the first tick.
    pub fn initial_text(&self) -> String {
        initial_text(self)
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self::year(2026)
    }
}

/// Observable counter state for one mount
#[derive(Debug, Clone, PartialEq)]
pub struct RevealState {
    pub current_value: f64,
    pub target_value: f64,
    pub started: bool,
}

impl RevealState {
    pub fn new(config: &CounterConfig) -> Self {
        Self {
            current_value: config.start_value,
            target_value: config.target_value,
            started: false,
        }
    }

    pub fn start(&mut self) {
        self.started = true;
    }

    /// Move to `frame`'s value.
    ///
    /// Ignored before [`start`](Self::start) and for values that would move
    /// away from the target, so the displayed value only ever approaches it.
    pub fn apply(&mut self, frame: &RevealFrame) -> bool {
        if !self.started {
            return false;
        }
        let remaining = (self.target_value - self.current_value).abs();
        let next_remaining = (self.target_value - frame.value).abs();
        if next_remaining > remaining {
            return false;
        }
        self.current_value = frame.value;
        true
    }

    pub fn is_settled(&self) -> bool {
        self.current_value == self.target_value
    }
}

/// One sampled point of the schedule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealFrame {
    /// 1-based step index
    pub step: u32,
    pub value: f64,
    pub is_final: bool,
}

/// Pure step interpolation for a counter
#[derive(Debug, Clone, PartialEq)]
pub struct RevealSchedule {
    start: f64,
    target: f64,
    /// Zero means "show the target immediately"
    steps: u32,
    interval: Duration,
    easing: Easing,
    scale: f64,
}

impl RevealSchedule {
    pub fn new(config: &CounterConfig) -> Self {
        let interval = match config.steps {
            0 => Duration::ZERO,
            steps => Duration::from_millis(config.duration_ms) / steps,
        };
        // A sub-nanosecond step cannot be timed; show the target at once
        let immediate = interval.is_zero() || config.start_value == config.target_value;
        let steps = if immediate { 0 } else { config.steps };
        let interval = if immediate { Duration::ZERO } else { interval };
        let decimals = config.format.decimal_places.min(MAX_DECIMAL_PLACES);

        Self {
            start: config.start_value,
            target: config.target_value,
            steps,
            interval,
            easing: config.easing,
            scale: 10f64.powi(i32::from(decimals)),
        }
    }

    /// Time between consecutive frames; zero for an immediate schedule.
    pub fn step_interval(&self) -> Duration {
        self.interval
    }

    /// Number of frames [`frames`](Self::frames) yields.
    pub fn frame_count(&self) -> u32 {
        self.steps.max(1)
    }

    pub fn is_immediate(&self) -> bool {
        self.steps == 0
    }

    /// Sample step `step` (1-based). Steps at or past the end snap to the target.
    pub fn frame(&self, step: u32) -> RevealFrame {
        if step >= self.steps {
            return RevealFrame {
                step: self.frame_count(),
                value: self.target,
                is_final: true,
            };
        }

        let progress = self.easing.apply(f64::from(step) / f64::from(self.steps));
        let raw = self.start + (self.target - self.start) * progress;
        let value = if self.target >= self.start {
            ((raw * self.scale).floor() / self.scale).clamp(self.start, self.target)
        } else {
            ((raw * self.scale).ceil() / self.scale).clamp(self.target, self.start)
        };

        RevealFrame {
            step,
            value,
            is_final: false,
        }
    }

    /// Every frame in order, ending with the snapped target.
    pub fn frames(&self) -> impl Iterator<Item = RevealFrame> + '_ {
        (1..=self.frame_count()).map(move |step| self.frame(step))
    }
}

/// Number of digits in the integer part of `|value|`.
fn integer_digits(value: f64) -> usize {
    format!("{:.0}", value.abs().floor()).len()
}

/// Render `value` with the fixed decimals, separator and padding of `format`.
///
/// `target` decides the padded width when `pad_start` is set.
pub fn format_value(value: f64, target: f64, format: &NumberFormat) -> String {
    let decimals = usize::from(format.decimal_places.min(MAX_DECIMAL_PLACES));
    let fixed = if decimals > 0 {
        format!("{:.*}", decimals, value.abs())
    } else {
        format!("{:.0}", value.abs().round())
    };

    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let int_part = if format.pad_start {
        let width = integer_digits(target);
        format!("{:0>width$}", int_part, width = width)
    } else {
        int_part.to_string()
    };

    // No "-0" when the magnitude rounds away
    let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    match frac_part {
        Some(frac) => format!("{}{}{}{}", sign, int_part, format.decimal_separator, frac),
        None => format!("{}{}", sign, int_part),
    }
}

/// Text displayed before the counter starts ticking.
pub fn initial_text(config: &CounterConfig) -> String {
    format_value(config.start_value, config.target_value, &config.format)
}

/// Drive a counter in real time, handing each formatted frame to `on_frame`.
///
/// Resolves once the target has been shown. Dropping the future stops the
/// interval, so an unmounted owner never receives another frame.
pub async fn animate<F>(config: &CounterConfig, mut on_frame: F) -> RevealState
where
    F: FnMut(&RevealState, String),
{
    let schedule = RevealSchedule::new(config);
    let mut state = RevealState::new(config);
    state.start();

    tracing::debug!(
        target_value = config.target_value,
        frames = schedule.frame_count(),
        interval_us = schedule.step_interval().as_micros() as u64,
        "Reveal counter started"
    );

    if schedule.is_immediate() {
        let frame = schedule.frame(0);
        state.apply(&frame);
        on_frame(&state, format_value(frame.value, config.target_value, &config.format));
        return state;
    }

    let period = schedule.step_interval();
    let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    for frame in schedule.frames() {
        ticker.tick().await;
        if state.apply(&frame) {
            on_frame(&state, format_value(frame.value, config.target_value, &config.format));
        }
    }

    tracing::debug!(value = state.current_value, "Reveal counter settled");
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter(start: f64, target: f64, duration_ms: u64) -> CounterConfig {
        CounterConfig {
            start_value: start,
            target_value: target,
            duration_ms,
            ..CounterConfig::default()
        }
    }

    #[test]
    fn test_year_schedule_matches_fixed_steps() {
        let schedule = RevealSchedule::new(&CounterConfig::year(2026));
        assert_eq!(schedule.frame_count(), 60);
        assert_eq!(schedule.step_interval(), Duration::from_millis(2000) / 60);

        // 2026 / 60 = 33.766...
        assert_eq!(schedule.frame(1).value, 33.0);
        assert_eq!(schedule.frame(2).value, 67.0);
        assert_eq!(schedule.frame(59).value, 1992.0);

        let last = schedule.frame(60);
        assert!(last.is_final);
        assert_eq!(last.value, 2026.0);
    }

    #[test]
    fn test_zero_target_is_immediate() {
        let schedule = RevealSchedule::new(&counter(0.0, 0.0, 2000));
        assert!(schedule.is_immediate());
        let frames: Vec<_> = schedule.frames().collect();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].value, 0.0);
        assert!(frames[0].is_final);
    }

    #[test]
    fn test_zero_duration_is_immediate() {
        let schedule = RevealSchedule::new(&counter(0.0, 500.0, 0));
        assert!(schedule.is_immediate());
        assert_eq!(schedule.step_interval(), Duration::ZERO);
        let frames: Vec<_> = schedule.frames().collect();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].value, 500.0);
    }

    #[test]
    fn test_counting_down_truncates_toward_start() {
        let schedule = RevealSchedule::new(&counter(100.0, 0.0, 1000));
        let values: Vec<f64> = schedule.frames().map(|f| f.value).collect();
        // 100 - 100/60 = 98.33 -> 99 (rounded toward the start)
        assert_eq!(values[0], 99.0);
        assert!(values.windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(*values.last().unwrap(), 0.0);
    }

    #[test]
    fn test_decimal_places_truncate_at_precision() {
        let mut config = counter(0.0, 1.0, 600);
        config.steps = 3;
        config.format.decimal_places = 2;
        let schedule = RevealSchedule::new(&config);
        let values: Vec<f64> = schedule.frames().map(|f| f.value).collect();
        assert_eq!(values, vec![0.33, 0.66, 1.0]);
    }

    #[test]
    fn test_ease_out_reaches_target_and_front_loads() {
        let mut config = counter(0.0, 1000.0, 1000);
        config.easing = Easing::EaseOutCubic;
        let linear = RevealSchedule::new(&counter(0.0, 1000.0, 1000));
        let eased = RevealSchedule::new(&config);
        assert!(eased.frame(10).value > linear.frame(10).value);
        assert_eq!(eased.frames().last().unwrap().value, 1000.0);
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseOutCubic] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(2.0), 1.0);
        }
    }

    #[test]
    fn test_reveal_state_ignores_frames_before_start() {
        let config = CounterConfig::year(2026);
        let mut state = RevealState::new(&config);
        let frame = RevealSchedule::new(&config).frame(5);
        assert!(!state.apply(&frame));
        assert_eq!(state.current_value, 0.0);

        state.start();
        assert!(state.apply(&frame));
        assert_eq!(state.current_value, frame.value);
    }

    #[test]
    fn test_reveal_state_never_moves_away_from_target() {
        let config = CounterConfig::year(2026);
        let schedule = RevealSchedule::new(&config);
        let mut state = RevealState::new(&config);
        state.start();
        assert!(state.apply(&schedule.frame(30)));
        assert!(!state.apply(&schedule.frame(10)));
        assert_eq!(state.current_value, schedule.frame(30).value);
        assert!(!state.is_settled());
        assert!(state.apply(&schedule.frame(60)));
        assert!(state.is_settled());
    }

    #[test]
    fn test_format_year_padded() {
        let format = CounterConfig::year(2026).format;
        assert_eq!(format_value(0.0, 2026.0, &format), "0000");
        assert_eq!(format_value(33.0, 2026.0, &format), "0033");
        assert_eq!(format_value(2026.0, 2026.0, &format), "2026");
    }

    #[test]
    fn test_format_decimal_separator() {
        let format = NumberFormat {
            decimal_places: 2,
            pad_start: false,
            decimal_separator: ",".to_string(),
        };
        assert_eq!(format_value(3.5, 10.0, &format), "3,50");
        assert_eq!(format_value(0.0, 10.0, &format), "0,00");
    }

    #[test]
    fn test_format_padded_with_decimals() {
        let format = NumberFormat {
            decimal_places: 1,
            pad_start: true,
            decimal_separator: ".".to_string(),
        };
        assert_eq!(format_value(7.21, 123.4, &format), "007.2");
    }

    #[test]
    fn test_format_negative_values() {
        let format = NumberFormat {
            pad_start: true,
            ..NumberFormat::default()
        };
        assert_eq!(format_value(-42.0, -100.0, &format), "-042");
        assert_eq!(format_value(-0.2, -100.0, &format), "000");
    }

    #[test]
    fn test_initial_text_uses_start_value() {
        assert_eq!(CounterConfig::year(2026).initial_text(), "0000");

        let mut config = counter(10.0, 20.0, 100);
        config.format.decimal_places = 1;
        assert_eq!(initial_text(&config), "10.0");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = CounterConfig::default();
        assert!(config.validate().is_ok());

        config.steps = 0;
        assert!(config.validate().is_err());

        let mut config = CounterConfig::default();
        config.format.decimal_separator.clear();
        assert!(config.validate().is_err());

        let mut config = CounterConfig::default();
        config.target_value = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = CounterConfig::default();
        config.format.decimal_places = MAX_DECIMAL_PLACES + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_counter_config_deserializes_nested_format() {
        let json = r#"{ "target_value": 99.5, "format": { "decimal_places": 1, "decimal_separator": "," } }"#;
        let config: CounterConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.target_value, 99.5);
        assert_eq!(config.format.decimal_places, 1);
        assert_eq!(config.format.decimal_separator, ",");
        assert_eq!(config.steps, DEFAULT_STEPS);
        assert!(!config.format.pad_start);
    }

    #[tokio::test(start_paused = true)]
    async fn test_animate_emits_every_frame_and_settles() {
        let config = CounterConfig::year(2026);
        let started = Instant::now();
        let mut texts = Vec::new();

        let state = animate(&config, |_, text| texts.push(text)).await;

        assert!(state.is_settled());
        assert_eq!(texts.len(), 60);
        assert_eq!(texts.first().map(String::as_str), Some("0033"));
        assert_eq!(texts.last().map(String::as_str), Some("2026"));

        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(1990));
        assert!(elapsed <= Duration::from_millis(2010));
    }

    #[tokio::test(start_paused = true)]
    async fn test_animate_immediate_emits_once() {
        let config = counter(0.0, 0.0, 2000);
        let mut texts = Vec::new();
        let state = animate(&config, |_, text| texts.push(text)).await;
        assert!(state.is_settled());
        // Padding follows the target's digit count
        assert_eq!(texts, vec!["0".to_string()]);
    }

    #[test]
    fn test_sub_nanosecond_step_is_immediate() {
        let mut config = counter(0.0, 2026.0, 1);
        config.steps = 2_000_000;
        assert!(config.validate().is_ok());

        let schedule = RevealSchedule::new(&config);
        assert!(schedule.is_immediate());
        assert_eq!(schedule.step_interval(), Duration::ZERO);
        let frames: Vec<RevealFrame> = schedule.frames().collect();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].value, 2026.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_animate_with_oversized_steps_shows_target() {
        let json = r#"{ "duration_ms": 1, "steps": 2000000, "target_value": 2026 }"#;
        let config: CounterConfig = serde_json::from_str(json).unwrap();
        let mut texts = Vec::new();
        let state = animate(&config, |_, text| texts.push(text)).await;
        assert!(state.is_settled());
        assert_eq!(texts, vec!["2026".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_animation_stops_frames() {
        let config = CounterConfig::year(2026);
        let mut count = 0usize;
        {
            let animation = animate(&config, |_, _| count += 1);
            let _ = tokio::time::timeout(Duration::from_millis(500), animation).await;
        }
        tokio::time::advance(Duration::from_secs(5)).await;
        assert!(count > 0 && count < 60);
    }
}
