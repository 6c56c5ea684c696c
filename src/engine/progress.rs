use chrono::{Duration, NaiveDate};

use crate::model::{TaskKind, TaskStatus};

/// Map a task's status to a completion fraction (0.0 – 1.0). Purely
/// status-driven; dates never influence it. Milestones are instantaneous
/// and never partially complete, so they always report 0.
pub fn progress_fraction(kind: TaskKind, status: TaskStatus) -> f32 {
    if kind.is_milestone() {
        return 0.0;
    }
    match status {
        TaskStatus::Closed => 1.0,
        TaskStatus::InProcess => 0.5,
        TaskStatus::NotStarted | TaskStatus::Undefined => 0.0,
    }
}

/// Date the progress bar reaches: start + duration × fraction, rounded to
/// whole days. `None` when either bound is absent (nothing to interpolate).
pub fn progress_end(
    start: Option<NaiveDate>,
    finish: Option<NaiveDate>,
    fraction: f32,
) -> Option<NaiveDate> {
    let (start, finish) = (start?, finish?);
    let total_days = (finish - start).num_days();
    let elapsed = (total_days as f64 * f64::from(fraction)).round() as i64;
    Some(start + Duration::days(elapsed))
}
