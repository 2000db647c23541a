use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Cadence at which playback advances the year index.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(900);

/// Accumulates host time while playing.
///
/// The timer is owned exclusively by the `Playing` state: acquired on
/// entry, dropped on exit, never duplicated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TickTimer {
    interval: Duration,
    accumulated: Duration,
}

impl TickTimer {
    fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
        }
    }

    fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.interval.is_zero() {
            return 0;
        }
        self.accumulated += elapsed;
        let ticks = (self.accumulated.as_nanos() / self.interval.as_nanos()) as u32;
        self.accumulated -= self.interval * ticks;
        ticks
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlaybackState {
    Paused,
    Playing(TickTimer),
}

/// Host-facing playback capabilities, mirroring button enabled-state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    pub can_play: bool,
    pub can_pause: bool,
}

/// Two-state play/pause machine driving year advancement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackController {
    state: PlaybackState,
    tick_interval: Duration,
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}

impl PlaybackController {
    #[must_use]
    pub fn new(tick_interval: Duration) -> Self {
        Self {
            state: PlaybackState::Paused,
            tick_interval,
        }
    }

    /// Starts playback with a fresh timer.
    ///
    /// Returns `false` (and leaves the running timer untouched) when
    /// already playing.
    pub fn play(&mut self) -> bool {
        if matches!(self.state, PlaybackState::Playing(_)) {
            return false;
        }
        self.state = PlaybackState::Playing(TickTimer::new(self.tick_interval));
        debug!("playback started");
        true
    }

    /// Stops playback, releasing the timer. Idempotent.
    pub fn pause(&mut self) -> bool {
        if matches!(self.state, PlaybackState::Paused) {
            return false;
        }
        self.state = PlaybackState::Paused;
        debug!("playback paused");
        true
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        matches!(self.state, PlaybackState::Playing(_))
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Advances playback time; returns the number of whole ticks elapsed.
    ///
    /// Always 0 while paused.
    pub fn step(&mut self, elapsed: Duration) -> u32 {
        match &mut self.state {
            PlaybackState::Paused => 0,
            PlaybackState::Playing(timer) => timer.advance(elapsed),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> PlaybackSnapshot {
        let playing = self.is_playing();
        PlaybackSnapshot {
            can_play: !playing,
            can_pause: playing,
        }
    }
}
