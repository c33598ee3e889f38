//! Diary month view: per calendar day, merge diary records, attendance
//! logs and material purchases into a DayStats used purely for calendar
//! rendering. Read model only; signing/locking is enforced by the command
//! layer on top of it.

use crate::models::attendance::AttendanceLog;
use crate::models::day_stats::DayStats;
use crate::models::diary::DiaryRecord;
use crate::models::material::Material;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Build the day → stats mapping for one month's worth of fetched records.
/// A day "has content" when it carries a diary record OR at least one
/// attendance log with a non-empty description.
pub fn month_stats(
    records: &[DiaryRecord],
    logs: &[AttendanceLog],
    materials: &[Material],
) -> BTreeMap<NaiveDate, DayStats> {
    let mut days: BTreeMap<NaiveDate, DayStats> = BTreeMap::new();

    for rec in records {
        let day = days.entry(rec.date).or_default();
        day.has_record = true;
        day.status = Some(rec.status);
    }

    for log in logs {
        let day = days.entry(log.date).or_default();
        day.total_hours += log.hours;
        if !log.description.trim().is_empty() {
            day.has_record = true;
            day.work_lines.push(log.description.clone());
        }
    }

    for m in materials {
        let day = days.entry(m.date).or_default();
        if !m.description.trim().is_empty() {
            day.work_lines.push(format!("material: {}", m.description));
        }
    }

    days
}

/// Whether a record (or its absence) currently accepts field edits.
/// absent → editable (first save creates a draft); draft → editable;
/// signed → locked until an explicit unlock.
pub fn can_edit(record: Option<&DiaryRecord>) -> bool {
    match record {
        Some(r) => !r.is_locked(),
        None => true,
    }
}
