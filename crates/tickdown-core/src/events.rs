use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{TimerMode, TimerSettings, TimerStatus};

/// Every state change in the engine produces an Event.
/// The CLI prints them; a GUI would poll or subscribe to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        mode: TimerMode,
        remaining_secs: u32,
        total_secs: u32,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerReset {
        mode: TimerMode,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    ModeSwitched {
        mode: TimerMode,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    SettingsUpdated {
        settings: TimerSettings,
        at: DateTime<Utc>,
    },
    /// The countdown reached zero via normal ticking (never via reset).
    TimerCompleted {
        mode: TimerMode,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        status: TimerStatus,
        mode: TimerMode,
        remaining_secs: u32,
        total_secs: u32,
        progress_pct: f64,
        settings: TimerSettings,
        at: DateTime<Utc>,
    },
}
