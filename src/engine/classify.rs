use chrono::{Duration, NaiveDate};

use crate::model::ScheduleStatus;

/// How far ahead a finish date counts as "due soon".
pub const DUE_SOON_WINDOW_DAYS: i64 = 7;

/// Classify one task relative to an explicit evaluation date.
///
/// Lateness dominates: a task completed after its finish date is Overdue no
/// matter where `today` sits, and an unfinished task past its finish date is
/// Overdue even when the finish also falls inside the due-soon window. A
/// completed-on-time task is OnTrack regardless of dates.
pub fn classify(
    today: NaiveDate,
    finish: NaiveDate,
    completion_date: Option<NaiveDate>,
) -> ScheduleStatus {
    match completion_date {
        Some(done) if done > finish => ScheduleStatus::Overdue,
        Some(_) => ScheduleStatus::OnTrack,
        None => {
            if finish < today {
                ScheduleStatus::Overdue
            } else if finish <= today + Duration::days(DUE_SOON_WINDOW_DAYS) {
                ScheduleStatus::DueSoon
            } else {
                ScheduleStatus::OnTrack
            }
        }
    }
}
