use chrono::{Duration, NaiveDate};

use crate::model::{FieldSnapshot, Phase, ScheduleEntry, TournamentInfo, TournamentLabel};

/// Events run start..start+3 inclusive.
const EVENT_DAYS: i64 = 3;
/// A just-finished event stays on the dashboard one extra day.
const GRACE_DAYS: i64 = 1;

/// Lifecycle stage from the field snapshot's `current_round`: absent or 0
/// means the event has not started, 1 through 4 means it is underway,
/// anything else means it is over.
#[must_use]
pub fn phase(snapshot: &FieldSnapshot) -> Phase {
    match snapshot.current_round {
        None | Some(0) => Phase::Pre,
        Some(1..=4) => Phase::Live,
        Some(_) => Phase::Post,
    }
}

/// Pick the event the dashboard should show.
///
/// The event named by the live field snapshot wins as long as `today` falls
/// on or before its grace-window end. A stale or unmatched name falls back to
/// the earliest future-starting entry, and failing that the last entry in the
/// schedule, which may already be in the past. Entries without a parseable
/// start date never qualify as "next up" but can still be the final fallback.
#[must_use]
pub fn select_event<'a>(
    schedule: &'a [ScheduleEntry],
    current_field_event: Option<&str>,
    today: NaiveDate,
) -> Option<&'a ScheduleEntry> {
    if schedule.is_empty() {
        return None;
    }

    if let Some(name) = current_field_event {
        if let Some(candidate) = schedule.iter().find(|e| e.event_name == name) {
            if let Some(start) = candidate.parsed_start() {
                let end = start + Duration::days(EVENT_DAYS);
                if today <= end + Duration::days(GRACE_DAYS) {
                    return Some(candidate);
                }
            }
        }
    }

    schedule
        .iter()
        .filter_map(|e| e.parsed_start().map(|start| (start, e)))
        .filter(|(start, _)| *start >= today)
        .min_by_key(|(start, _)| *start)
        .map(|(_, e)| e)
        .or_else(|| schedule.last())
}

/// Badge for the selected event: UPCOMING when its start is still ahead,
/// LIVE while the field snapshot says play is underway, otherwise none.
#[must_use]
pub fn compute_label(
    selected: &ScheduleEntry,
    phase: Phase,
    today: NaiveDate,
) -> Option<TournamentLabel> {
    if let Some(start) = selected.parsed_start() {
        if start > today {
            return Some(TournamentLabel::Upcoming);
        }
    }
    if phase == Phase::Live {
        return Some(TournamentLabel::Live);
    }
    None
}

/// Resolve the schedule plus field snapshot into the per-cycle tournament
/// header, or `None` when the schedule is empty.
#[must_use]
pub fn resolve_tournament(
    schedule: &[ScheduleEntry],
    snapshot: &FieldSnapshot,
    today: NaiveDate,
) -> Option<TournamentInfo> {
    let selected = select_event(schedule, snapshot.event_name.as_deref(), today)?;
    let label = compute_label(selected, phase(snapshot), today);

    Some(TournamentInfo {
        event_name: selected.event_name.clone(),
        course: selected.course.clone(),
        start_date: selected.start_date.clone(),
        label,
    })
}
