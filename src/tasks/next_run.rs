use crate::config::NextRunStrategy;
use anyhow::{anyhow, bail};
use chrono::{DateTime, Utc};
use croner::Cron;
use time::OffsetDateTime;
use tracing::warn;

/// Calculates the next run of the task with the specified schedule. The returned time is strictly
/// after `from`, unless strategy defines a zero delay.
pub fn next_run_after(
    strategy: &NextRunStrategy,
    schedule: &str,
    from: OffsetDateTime,
) -> OffsetDateTime {
    match strategy {
        NextRunStrategy::FixedDelay { delay } => from + *delay,
        NextRunStrategy::Cron { fallback_delay } => {
            next_cron_occurrence(schedule, from).unwrap_or_else(|err| {
                warn!(
                    task.schedule = schedule,
                    "Cannot calculate next run from the schedule, falling back to {} delay: {err:?}",
                    humantime::format_duration(*fallback_delay)
                );
                from + *fallback_delay
            })
        }
    }
}

/// Maximum number of days in every month, leap years included.
const MAX_DAYS_IN_MONTH: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Finds the earliest occurrence of the five-field cron schedule that is strictly after `from`.
/// Day-of-month and day-of-week are combined with OR when both are restricted.
///
/// Search for a schedule that never matches walks through several years before giving up, so
/// impossible day and month combinations are rejected upfront, see [`has_matching_days`].
fn next_cron_occurrence(schedule: &str, from: OffsetDateTime) -> anyhow::Result<OffsetDateTime> {
    let cron = Cron::new(schedule)
        .parse()
        .map_err(|err| anyhow!("Failed to parse schedule `{schedule}`: {err:?}"))?;
    if !has_matching_days(schedule) {
        bail!("Schedule `{schedule}` has no upcoming occurrences: no such day in any month.");
    }

    let from_utc = DateTime::<Utc>::from_timestamp(from.unix_timestamp(), from.nanosecond())
        .ok_or_else(|| anyhow!("Time `{from}` is out of the supported range."))?;
    let find_next = |start: &DateTime<Utc>| {
        cron.find_next_occurrence(start, false)
            .map_err(|err| anyhow!("Schedule `{schedule}` has no upcoming occurrences: {err:?}"))
    };

    // Occurrences are calculated with a second precision, so sub-second `from` may produce a match
    // within the same second.
    let mut next = find_next(&from_utc)?;
    if next <= from_utc {
        next = find_next(&next)?;
    }

    Ok(OffsetDateTime::from_unix_timestamp(next.timestamp())?)
}

/// Checks whether day-of-month and month fields of the parsed schedule can match any calendar day.
/// Only plain numeric lists are checked, anything else (ranges, steps, names, restricted
/// day-of-week) is left to the cron search.
fn has_matching_days(schedule: &str) -> bool {
    let fields = schedule.split_whitespace().collect::<Vec<_>>();
    let &[_, _, days, months, weekdays] = fields.as_slice() else {
        return true;
    };
    if !matches!(weekdays, "*" | "?") {
        return true;
    }

    let parse_list = |field: &str| {
        field
            .split(',')
            .map(|value| value.parse::<u32>().ok())
            .collect::<Option<Vec<_>>>()
    };
    let (Some(days), Some(months)) = (parse_list(days), parse_list(months)) else {
        return true;
    };

    months
        .iter()
        .filter_map(|month| MAX_DAYS_IN_MONTH.get((*month as usize).checked_sub(1)?))
        .any(|max_days| days.iter().any(|day| day <= max_days))
}
