use serde::{Deserialize, Serialize};

/// Which of the two configured countdown durations is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerMode {
    Work,
    Break,
}

/// Upper bound for the minutes fields.
pub const MAX_MINUTES: u32 = 99;
/// Upper bound for the seconds fields.
pub const MAX_SECONDS: u32 = 59;

/// User-configured durations for each mode.
///
/// Invariant: minutes are within `[0, 99]` and seconds within `[0, 59]`.
/// Out-of-range input is clamped at the point of update, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSettings {
    #[serde(default = "default_work_minutes")]
    pub work_minutes: u32,
    #[serde(default)]
    pub work_seconds: u32,
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
    #[serde(default)]
    pub break_seconds: u32,
}

fn default_work_minutes() -> u32 {
    25
}
fn default_break_minutes() -> u32 {
    5
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            work_minutes: default_work_minutes(),
            work_seconds: 0,
            break_minutes: default_break_minutes(),
            break_seconds: 0,
        }
    }
}

impl TimerSettings {
    /// Return a copy with every field forced into range.
    pub fn clamped(self) -> Self {
        Self {
            work_minutes: self.work_minutes.min(MAX_MINUTES),
            work_seconds: self.work_seconds.min(MAX_SECONDS),
            break_minutes: self.break_minutes.min(MAX_MINUTES),
            break_seconds: self.break_seconds.min(MAX_SECONDS),
        }
    }

    /// Total configured duration in seconds for the given mode.
    ///
    /// Recomputed on demand; callers must not cache this across settings or
    /// mode changes.
    pub fn total_secs(&self, mode: TimerMode) -> u32 {
        match mode {
            TimerMode::Work => crate::time::total_seconds(self.work_minutes, self.work_seconds),
            TimerMode::Break => crate::time::total_seconds(self.break_minutes, self.break_seconds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_is_25_and_5_minutes() {
        let s = TimerSettings::default();
        assert_eq!(s.total_secs(TimerMode::Work), 25 * 60);
        assert_eq!(s.total_secs(TimerMode::Break), 5 * 60);
    }

    #[test]
    fn total_is_minutes_times_60_plus_seconds() {
        let s = TimerSettings {
            work_minutes: 1,
            work_seconds: 30,
            break_minutes: 0,
            break_seconds: 45,
        };
        assert_eq!(s.total_secs(TimerMode::Work), 90);
        assert_eq!(s.total_secs(TimerMode::Break), 45);
    }

    #[test]
    fn clamp_caps_out_of_range_fields() {
        let s = TimerSettings {
            work_minutes: 500,
            work_seconds: 75,
            break_minutes: 100,
            break_seconds: 60,
        }
        .clamped();
        assert_eq!(s.work_minutes, 99);
        assert_eq!(s.work_seconds, 59);
        assert_eq!(s.break_minutes, 99);
        assert_eq!(s.break_seconds, 59);
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let s: TimerSettings = toml::from_str("work_minutes = 30").unwrap();
        assert_eq!(s.work_minutes, 30);
        assert_eq!(s.work_seconds, 0);
        assert_eq!(s.break_minutes, 5);
    }

    proptest! {
        #[test]
        fn clamped_is_always_in_range(wm: u32, ws: u32, bm: u32, bs: u32) {
            let s = TimerSettings {
                work_minutes: wm,
                work_seconds: ws,
                break_minutes: bm,
                break_seconds: bs,
            }
            .clamped();
            prop_assert!(s.work_minutes <= MAX_MINUTES);
            prop_assert!(s.work_seconds <= MAX_SECONDS);
            prop_assert!(s.break_minutes <= MAX_MINUTES);
            prop_assert!(s.break_seconds <= MAX_SECONDS);
        }

        #[test]
        fn clamped_total_never_exceeds_99_59(wm: u32, ws: u32) {
            let s = TimerSettings {
                work_minutes: wm,
                work_seconds: ws,
                break_minutes: 0,
                break_seconds: 0,
            }
            .clamped();
            prop_assert!(s.total_secs(TimerMode::Work) <= 99 * 60 + 59);
        }
    }
}
