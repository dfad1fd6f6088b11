//! Fixed-period game clock using an accumulator pattern.
//!
//! `draw_web()` calls at ~60fps with variable delta. [`GameClock`] turns the
//! frame timestamps into two independent streams of discrete ticks: the
//! production cadence that mutates the economy, and the render cadence that
//! only refreshes the display snapshot.

/// One production tick per second.
pub const PRODUCTION_PERIOD_MS: f64 = 1000.0;
/// Display refresh every 200ms.
pub const REFRESH_PERIOD_MS: f64 = 200.0;
/// Longest frame gap credited to the refresh cadence at once. Production
/// always receives the full elapsed time, since frames pause in a hidden tab
/// while generators keep producing.
const MAX_REFRESH_DELTA_MS: f64 = 1000.0;

/// A single fixed-period tick source.
pub struct Cadence {
    /// Milliseconds per tick.
    period_ms: f64,
    /// Accumulated milliseconds not yet consumed as ticks.
    accumulator: f64,
}

impl Cadence {
    pub fn new(period_ms: f64) -> Self {
        Self {
            period_ms,
            accumulator: 0.0,
        }
    }

    /// Credit `delta_ms` of elapsed time. Returns how many whole periods
    /// completed.
    pub fn advance(&mut self, delta_ms: f64) -> u32 {
        self.accumulator += delta_ms;
        let ticks = (self.accumulator / self.period_ms) as u32;
        self.accumulator -= ticks as f64 * self.period_ms;
        ticks
    }
}

/// Ticks due this frame, per cadence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClockTicks {
    pub production: u32,
    pub refresh: u32,
}

impl ClockTicks {
    /// A production tick always re-renders, as does a render-cadence tick.
    pub fn needs_refresh(&self) -> bool {
        self.production > 0 || self.refresh > 0
    }
}

pub struct GameClock {
    production: Cadence,
    refresh: Cadence,
    /// Timestamp of the last update (ms), None if first frame
    last_timestamp: Option<f64>,
}

impl GameClock {
    pub fn new() -> Self {
        Self {
            production: Cadence::new(PRODUCTION_PERIOD_MS),
            refresh: Cadence::new(REFRESH_PERIOD_MS),
            last_timestamp: None,
        }
    }

    /// Feed wall-clock timestamp (from `performance.now()` or similar).
    /// Call once per draw frame.
    pub fn update(&mut self, now_ms: f64) -> ClockTicks {
        let delta = match self.last_timestamp {
            Some(prev) => (now_ms - prev).max(0.0),
            None => 0.0,
        };
        self.last_timestamp = Some(now_ms);

        ClockTicks {
            production: self.production.advance(delta),
            refresh: self.refresh.advance(delta.min(MAX_REFRESH_DELTA_MS)),
        }
    }
}

/// Milliseconds from the browser's monotonic clock.
///
/// Falls back to `Date.now()` when no `Performance` object is available.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}
