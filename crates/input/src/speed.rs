//! Speed gestures to tick intervals.
//!
//! Results are clamped to `[MIN_INTERVAL_MS, MAX_INTERVAL_MS]` so repeated
//! gestures never produce an interval the simulation would reject.

use crate::types::{INTERVAL_STEP_MS, MAX_INTERVAL_MS, MIN_INTERVAL_MS};

/// Interval after one speed-up gesture.
pub fn faster(current_ms: u64) -> i64 {
    clamp(current_ms.saturating_sub(INTERVAL_STEP_MS))
}

/// Interval after one slow-down gesture.
pub fn slower(current_ms: u64) -> i64 {
    clamp(current_ms.saturating_add(INTERVAL_STEP_MS))
}

fn clamp(ms: u64) -> i64 {
    ms.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faster_never_goes_below_floor() {
        assert_eq!(faster(100), 90);
        assert_eq!(faster(MIN_INTERVAL_MS), MIN_INTERVAL_MS as i64);
        assert_eq!(faster(0), MIN_INTERVAL_MS as i64);
    }

    #[test]
    fn slower_is_capped() {
        assert_eq!(slower(100), 110);
        assert_eq!(slower(MAX_INTERVAL_MS), MAX_INTERVAL_MS as i64);
    }
}
