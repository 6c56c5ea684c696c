use chrono::NaiveDate;

use crate::model::{Task, TaskKind, TaskStatus};

/// One raw input row, fields still unparsed. The import layer extracts these
/// from whatever tabular source it reads; all semantic parsing happens here.
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    pub name: String,
    pub project: String,
    pub kind: String,
    pub start: String,
    pub finish: String,
    pub completion_date: String,
    pub status: String,
}

/// Try parsing a date string with several common formats.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    for fmt in &["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%m/%d/%Y", "%d-%m-%Y", "%d.%m.%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    None
}

/// Map a type cell to a task kind. Accepts the Chinese column vocabulary of
/// the source sheets alongside the English equivalents.
pub fn parse_kind(s: &str) -> TaskKind {
    match s.trim().to_lowercase().as_str() {
        "母專案" | "parent" | "parent project" => TaskKind::Parent,
        "子專案" | "sub" | "subproject" | "sub project" => TaskKind::Sub,
        "里程碑" | "milestone" => TaskKind::Milestone,
        _ => TaskKind::Undefined,
    }
}

/// Map a status cell to a task status; free text falls back to Undefined.
pub fn parse_status(s: &str) -> TaskStatus {
    match s.trim().to_lowercase().as_str() {
        "closed" | "close" | "done" | "complete" | "completed" => TaskStatus::Closed,
        "in process" | "in-process" | "in progress" | "in-progress" => TaskStatus::InProcess,
        "not start" | "not-start" | "not started" | "not-started" => TaskStatus::NotStarted,
        _ => TaskStatus::Undefined,
    }
}

/// Warn about a date cell that failed to parse. The row stays in the model;
/// only its date-dependent derivations are lost.
fn warn_degraded(row_number: usize, column: &str, value: &str) {
    eprintln!(
        "Warning: row {}: unparseable {} date '{}', treating as absent",
        row_number, column, value
    );
}

/// Convert raw rows to tasks. A malformed date cell downgrades to absent
/// (with a stderr warning); it never rejects the row. Milestones get a
/// zero-duration span: finish is forced equal to start. An inverted range
/// (finish before start) is clamped to a zero-duration span at start, so
/// every derived date stays within [start, finish].
pub fn normalize(rows: &[RawRow]) -> Vec<Task> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            // Header occupies line 1, so data row i sits on line i + 2.
            let line = i + 2;
            let mut task = Task::new(row.name.trim(), row.project.trim(), parse_kind(&row.kind));
            task.status = parse_status(&row.status);

            task.start = parse_date(&row.start);
            if task.start.is_none() && !row.start.trim().is_empty() {
                warn_degraded(line, "start", row.start.trim());
            }

            task.finish = parse_date(&row.finish);
            if task.finish.is_none() && !row.finish.trim().is_empty() {
                warn_degraded(line, "finish", row.finish.trim());
            }

            task.completion_date = parse_date(&row.completion_date);
            if task.completion_date.is_none() && !row.completion_date.trim().is_empty() {
                warn_degraded(line, "completion", row.completion_date.trim());
            }

            if task.kind.is_milestone() {
                task.finish = task.start;
            } else if let (Some(start), Some(finish)) = (task.start, task.finish) {
                task.finish = Some(finish.max(start));
            }
            task
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn row(name: &str, kind: &str, start: &str, finish: &str) -> RawRow {
        RawRow {
            name: name.into(),
            project: "Alpha".into(),
            kind: kind.into(),
            start: start.into(),
            finish: finish.into(),
            ..Default::default()
        }
    }

    #[test]
    fn parses_iso_and_regional_dates() {
        assert_eq!(parse_date("2025-03-03"), Some(d(2025, 3, 3)));
        assert_eq!(parse_date(" 2025/03/03 "), Some(d(2025, 3, 3)));
        assert_eq!(parse_date("03.03.2025"), Some(d(2025, 3, 3)));
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("not a date"), None);
    }

    #[test]
    fn kind_vocabulary_both_languages() {
        assert_eq!(parse_kind("母專案"), TaskKind::Parent);
        assert_eq!(parse_kind("子專案"), TaskKind::Sub);
        assert_eq!(parse_kind("里程碑"), TaskKind::Milestone);
        assert_eq!(parse_kind("Parent"), TaskKind::Parent);
        assert_eq!(parse_kind("MILESTONE"), TaskKind::Milestone);
        assert_eq!(parse_kind("???"), TaskKind::Undefined);
    }

    #[test]
    fn status_free_text_is_undefined() {
        assert_eq!(parse_status("Closed"), TaskStatus::Closed);
        assert_eq!(parse_status("In process"), TaskStatus::InProcess);
        assert_eq!(parse_status("Not start"), TaskStatus::NotStarted);
        assert_eq!(parse_status("blocked on vendor"), TaskStatus::Undefined);
        assert_eq!(parse_status(""), TaskStatus::Undefined);
    }

    #[test]
    fn bad_date_cell_keeps_the_row() {
        let tasks = normalize(&[row("t", "sub", "garbage", "2025-01-10")]);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].start, None);
        assert_eq!(tasks[0].finish, Some(d(2025, 1, 10)));
    }

    #[test]
    fn inverted_range_clamps_finish_to_start() {
        let tasks = normalize(&[row("t", "sub", "2025-02-01", "2025-01-01")]);
        assert_eq!(tasks[0].start, Some(d(2025, 2, 1)));
        assert_eq!(tasks[0].finish, Some(d(2025, 2, 1)));
    }

    #[test]
    fn milestone_finish_snaps_to_start() {
        let tasks = normalize(&[row("m", "里程碑", "2025-05-01", "2025-06-30")]);
        assert_eq!(tasks[0].start, Some(d(2025, 5, 1)));
        assert_eq!(tasks[0].finish, Some(d(2025, 5, 1)));
    }
}
