use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use shared_models::error::SchedulingError;

/// Half-open interval `[start, end)` in absolute time. The timezone rides
/// along for display and day-boundary arithmetic; ordering and duration come
/// from the instants alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub timezone: String,
}

impl TimeWindow {
    pub fn new(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        timezone: impl Into<String>,
    ) -> Result<Self, SchedulingError> {
        if start >= end {
            return Err(SchedulingError::Validation(
                "Start time must be before end time".to_string(),
            ));
        }

        Ok(Self {
            start,
            end,
            timezone: timezone.into(),
        })
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// One cell of the month view. Recomputed per request, no persistent identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// First valid instant of this day in the grid's timezone.
    pub starts_at: DateTime<Utc>,
    pub in_current_month: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionWindowStatus {
    pub blocked: bool,
    pub minutes_until_start: i64,
    pub minutes_until_end: i64,
}
