//! Pure time helpers shared by the engine and presentation layers.

/// Format a second count as `MM:SS`, zero-padded to two digits each.
///
/// The minutes portion grows past two digits for inputs beyond 99:59
/// rather than truncating.
pub fn format_mm_ss(total_secs: u32) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// Total seconds for a minutes/seconds pair.
pub fn total_seconds(minutes: u32, seconds: u32) -> u32 {
    minutes.saturating_mul(60).saturating_add(seconds)
}

/// Elapsed progress as a percentage in `[0, 100]`.
///
/// Defined as 0 when `total` is 0 to avoid a division by zero.
pub fn progress_pct(remaining: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let done = total.saturating_sub(remaining);
    (done as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn format_pads_both_fields() {
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(65), "01:05");
        assert_eq!(format_mm_ss(1500), "25:00");
    }

    #[test]
    fn format_grows_past_two_digit_minutes() {
        assert_eq!(format_mm_ss(5999), "99:59");
        assert_eq!(format_mm_ss(6000), "100:00");
    }

    #[test]
    fn total_seconds_combines_fields() {
        assert_eq!(total_seconds(25, 0), 1500);
        assert_eq!(total_seconds(1, 30), 90);
        assert_eq!(total_seconds(0, 0), 0);
    }

    #[test]
    fn progress_endpoints() {
        assert_eq!(progress_pct(100, 100), 0.0);
        assert_eq!(progress_pct(0, 100), 100.0);
        assert_eq!(progress_pct(0, 0), 0.0);
    }

    #[test]
    fn progress_midpoint() {
        assert_eq!(progress_pct(50, 100), 50.0);
    }

    proptest! {
        #[test]
        fn progress_is_always_in_range(remaining: u32, total: u32) {
            let p = progress_pct(remaining, total);
            prop_assert!((0.0..=100.0).contains(&p));
        }

        #[test]
        fn format_always_has_colon_and_padding(secs: u32) {
            let s = format_mm_ss(secs);
            prop_assert!(s.len() >= 5);
            prop_assert!(s.contains(':'));
            let suffix = format!("{:02}", secs % 60);
            prop_assert!(s.ends_with(&suffix));
        }
    }
}
