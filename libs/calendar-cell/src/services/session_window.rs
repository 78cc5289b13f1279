use chrono::{DateTime, Utc};

use crate::models::{SessionWindowStatus, TimeWindow};

/// Sessions may be joined up to this many minutes before their nominal start.
pub const PRE_ROLL_MINUTES: i64 = 15;

/// Sessions remain joinable up to this many minutes after their nominal end.
pub const POST_ROLL_MINUTES: i64 = 30;

/// Decide whether a session can be joined at `now`.
///
/// Pure; callers re-invoke on a timer as time passes. The late check
/// dominates: a window far in the past stays blocked no matter what the
/// distance to its start says.
pub fn can_start_session(window: &TimeWindow, now: DateTime<Utc>) -> SessionWindowStatus {
    let minutes_until_start = (window.start - now).num_minutes();
    let minutes_until_end = (window.end - now).num_minutes();

    let too_early = minutes_until_start > PRE_ROLL_MINUTES;
    let too_late = minutes_until_end < -POST_ROLL_MINUTES;

    SessionWindowStatus {
        blocked: too_early || too_late,
        minutes_until_start,
        minutes_until_end,
    }
}
