use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::debug;

use shared_config::AppConfig;
use shared_models::error::SchedulingError;

use crate::models::{CalendarDay, TimeWindow};

/// Parse a named timezone, e.g. a practitioner preference or an admin's
/// explicit override.
pub fn resolve_timezone(name: &str) -> Result<Tz, SchedulingError> {
    name.parse::<Tz>()
        .map_err(|_| SchedulingError::InvalidTimezone(name.to_string()))
}

/// The timezone a view renders in: an explicit override (an admin inspecting
/// another timezone's calendar) wins over the configured viewer default.
pub fn viewing_timezone(config: &AppConfig, override_name: Option<&str>) -> Result<Tz, SchedulingError> {
    resolve_timezone(override_name.unwrap_or(&config.default_timezone))
}

/// Build the month view for `year`/`month` (1-12): complete Monday-to-Sunday
/// weeks, with leading and trailing days flagged as outside the month.
///
/// A month whose last day already falls on a Sunday gets no trailing fill.
/// Day starts are resolved in `tz`, so the grid stays correct when viewing
/// another timezone's schedule.
pub fn generate_month_grid(
    year: i32,
    month: u32,
    tz: Tz,
) -> Result<Vec<CalendarDay>, SchedulingError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| SchedulingError::Validation(format!("Invalid month {}-{}", year, month)))?;
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next_month| next_month.pred_opt())
        .ok_or_else(|| SchedulingError::Validation(format!("Invalid month {}-{}", year, month)))?;

    let grid_start = first - Duration::days(first.weekday().num_days_from_monday() as i64);
    let grid_end = last + Duration::days((6 - last.weekday().num_days_from_monday()) as i64);

    let mut days = Vec::with_capacity(42);
    for date in grid_start.iter_days() {
        if date > grid_end {
            break;
        }
        days.push(CalendarDay {
            date,
            starts_at: local_day_start(date, tz)?,
            in_current_month: date.year() == year && date.month() == month,
        });
    }

    debug!("Generated {}-day grid for {}-{:02} in {}", days.len(), year, month, tz);
    Ok(days)
}

/// First valid instant of `date` in `tz`. An ambiguous midnight (fall-back)
/// resolves to the earlier instant; a skipped midnight (spring-forward) falls
/// through to the first wall-clock hour that exists.
pub fn local_day_start(date: NaiveDate, tz: Tz) -> Result<DateTime<Utc>, SchedulingError> {
    let midnight = date.and_time(NaiveTime::MIN);
    if let Some(start) = tz.from_local_datetime(&midnight).earliest() {
        return Ok(start.with_timezone(&Utc));
    }

    tz.from_local_datetime(&(midnight + Duration::hours(1)))
        .earliest()
        .map(|start| start.with_timezone(&Utc))
        .ok_or_else(|| {
            SchedulingError::InvalidTimezone(format!("{} has no valid start of day on {}", tz, date))
        })
}

/// Absolute-time window covering one calendar day in `tz`. This is what scopes
/// a slot query once the user picks a day off the grid.
pub fn local_day_window(date: NaiveDate, tz: Tz) -> Result<TimeWindow, SchedulingError> {
    let next = date
        .succ_opt()
        .ok_or_else(|| SchedulingError::Validation(format!("No day follows {}", date)))?;

    TimeWindow::new(local_day_start(date, tz)?, local_day_start(next, tz)?, tz.name())
}
