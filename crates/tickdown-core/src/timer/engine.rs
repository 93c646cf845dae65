//! Timer engine implementation.
//!
//! The timer engine is a tick-driven state machine over discrete one-second
//! ticks. It does not use internal threads - it starts and stops an injected
//! [`TickSource`], and the driver behind that source is responsible for
//! calling `tick()` once per second while the source is active.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Paused -> Running
//!          \-> Idle (reset, mode switch, or countdown completion)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::new(Box::new(store), Box::new(ticker));
//! engine.start();
//! // Once per second while the ticker is active:
//! engine.tick(); // Returns Some(Event::TimerCompleted) when the countdown ends
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::settings::{TimerMode, TimerSettings};
use super::ticker::TickSource;
use crate::events::Event;
use crate::storage::SettingsStore;
use crate::time::progress_pct;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerStatus {
    Idle,
    Running,
    Paused,
}

/// Serializable slice of engine state for persistence between processes.
///
/// Running is never persisted; `restore` demotes it to Paused.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub status: TimerStatus,
    pub mode: TimerMode,
    pub remaining_secs: u32,
}

/// Core timer engine.
///
/// Owns the countdown state exclusively; all mutation goes through the
/// command methods below. Settings are loaded from the injected store at
/// construction and written back on update, best-effort.
pub struct TimerEngine {
    status: TimerStatus,
    mode: TimerMode,
    /// Remaining time in whole seconds for the current countdown.
    remaining_secs: u32,
    settings: TimerSettings,
    store: Box<dyn SettingsStore>,
    ticker: Box<dyn TickSource>,
    on_complete: Option<Box<dyn FnMut()>>,
}

impl std::fmt::Debug for TimerEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerEngine")
            .field("status", &self.status)
            .field("mode", &self.mode)
            .field("remaining_secs", &self.remaining_secs)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl TimerEngine {
    /// Create a new timer engine.
    ///
    /// Starts in `Idle`, work mode, with the full work duration remaining.
    /// Settings come from the store, clamped into range; a store that fails
    /// to load yields the defaults.
    pub fn new(store: Box<dyn SettingsStore>, ticker: Box<dyn TickSource>) -> Self {
        let settings = store.load().clamped();
        let remaining_secs = settings.total_secs(TimerMode::Work);
        Self {
            status: TimerStatus::Idle,
            mode: TimerMode::Work,
            remaining_secs,
            settings,
            store,
            ticker,
            on_complete: None,
        }
    }

    /// Replace the completion callback. The engine holds exactly one; it is
    /// invoked with no arguments each time a countdown reaches zero naturally.
    pub fn set_on_complete(&mut self, callback: impl FnMut() + 'static) {
        self.on_complete = Some(Box::new(callback));
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn status(&self) -> TimerStatus {
        self.status
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn settings(&self) -> TimerSettings {
        self.settings
    }

    /// Total configured duration for the active mode.
    ///
    /// Always derived from `(mode, settings)`, never cached.
    pub fn total_secs(&self) -> u32 {
        self.settings.total_secs(self.mode)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            status: self.status,
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            total_secs: self.total_secs(),
            progress_pct: progress_pct(self.remaining_secs, self.total_secs()),
            settings: self.settings,
            at: Utc::now(),
        }
    }

    /// Serializable state for persistence between CLI invocations.
    pub fn persistable(&self) -> TimerSnapshot {
        TimerSnapshot {
            // A snapshot taken mid-run resumes as paused.
            status: match self.status {
                TimerStatus::Running => TimerStatus::Paused,
                other => other,
            },
            mode: self.mode,
            remaining_secs: self.remaining_secs,
        }
    }

    /// Restore state persisted by [`persistable`](Self::persistable).
    ///
    /// Remaining time is capped at the current total for the restored mode,
    /// so a snapshot taken under bigger settings cannot overshoot.
    pub fn restore(&mut self, snapshot: TimerSnapshot) {
        self.mode = snapshot.mode;
        self.status = match snapshot.status {
            TimerStatus::Running => TimerStatus::Paused,
            other => other,
        };
        self.remaining_secs = snapshot.remaining_secs.min(self.total_secs());
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin (or resume) the countdown. No-op while already running.
    pub fn start(&mut self) -> Option<Event> {
        if self.status == TimerStatus::Running {
            return None; // Already running; never double-schedule ticks.
        }
        self.status = TimerStatus::Running;
        self.ticker.start();
        Some(Event::TimerStarted {
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            total_secs: self.total_secs(),
            at: Utc::now(),
        })
    }

    /// Halt the countdown, keeping the remaining time. No-op unless running.
    pub fn pause(&mut self) -> Option<Event> {
        if self.status != TimerStatus::Running {
            return None;
        }
        self.ticker.stop();
        self.status = TimerStatus::Paused;
        Some(Event::TimerPaused {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Return to idle with the full duration for the current mode.
    pub fn reset(&mut self) -> Option<Event> {
        self.ticker.stop();
        self.status = TimerStatus::Idle;
        self.remaining_secs = self.total_secs();
        Some(Event::TimerReset {
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Switch the active mode. Cancels a run in progress and loads the new
    /// mode's full duration.
    pub fn switch_mode(&mut self, mode: TimerMode) -> Option<Event> {
        self.ticker.stop();
        self.status = TimerStatus::Idle;
        self.mode = mode;
        self.remaining_secs = self.total_secs();
        Some(Event::ModeSwitched {
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Replace the settings, clamped into range, and persist them.
    ///
    /// Persistence is best-effort: a failing store leaves the in-memory
    /// update in effect. While idle the remaining time is recomputed for the
    /// current mode; while running or paused it is left untouched until the
    /// next reset or mode switch.
    pub fn update_settings(&mut self, settings: TimerSettings) -> Option<Event> {
        self.settings = settings.clamped();
        let _ = self.store.save(&self.settings);
        if self.status == TimerStatus::Idle {
            self.remaining_secs = self.total_secs();
        }
        Some(Event::SettingsUpdated {
            settings: self.settings,
            at: Utc::now(),
        })
    }

    /// Apply one one-second tick. Only has an effect while running, so a
    /// tick delivered late, after a pause/reset/switch, is inert.
    ///
    /// Returns `Some(Event::TimerCompleted)` at the tick that reaches zero;
    /// by the time the completion callback or the caller observes anything,
    /// the engine is already idle with zero remaining.
    pub fn tick(&mut self) -> Option<Event> {
        if self.status != TimerStatus::Running {
            return None;
        }
        if self.remaining_secs > 1 {
            self.remaining_secs -= 1;
            return None;
        }
        self.ticker.stop();
        self.remaining_secs = 0;
        self.status = TimerStatus::Idle;
        if let Some(callback) = self.on_complete.as_mut() {
            callback();
        }
        Some(Event::TimerCompleted {
            mode: self.mode,
            at: Utc::now(),
        })
    }
}
