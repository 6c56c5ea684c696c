use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::engine::normalize::{normalize, RawRow};
use crate::engine::{classify, progress, sort, ticks};
use crate::model::{Granularity, ScheduleStatus, Task, TaskKind, Tick};

/// How the renderer colors task bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorMode {
    #[default]
    ByProject,
    ByStatus,
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "project" | "by-project" => Ok(ColorMode::ByProject),
            "status" | "by-status" => Ok(ColorMode::ByStatus),
            other => Err(format!(
                "unknown color mode '{}' (expected project or status)",
                other
            )),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColorMode::ByProject => "project",
            ColorMode::ByStatus => "status",
        })
    }
}

/// Collaborator-layer selections for one pipeline pass.
#[derive(Debug, Clone)]
pub struct ViewOptions {
    pub granularity: Granularity,
    /// Only include tasks belonging to these projects; `None` keeps all.
    pub projects: Option<BTreeSet<String>>,
    /// Only include top-level parent tasks.
    pub parents_only: bool,
    pub color_mode: ColorMode,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            granularity: Granularity::Daily,
            projects: None,
            parents_only: false,
            color_mode: ColorMode::default(),
        }
    }
}

/// Overall date extent of the dated tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    pub min_start: NaiveDate,
    pub max_finish: NaiveDate,
}

/// The finalized, immutable output of one pipeline pass. Everything the
/// external renderer needs: ordered annotated tasks, the time-axis plan,
/// and the two warning views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskModel {
    pub tasks: Vec<Task>,
    /// `None` when no task carries both a start and a finish anywhere.
    pub span: Option<DateSpan>,
    pub granularity: Granularity,
    /// Axis label format for renderer-native ticks.
    pub tick_format: String,
    /// Explicit boundaries; empty means the renderer falls back to its own
    /// automatic ticks.
    pub ticks: Vec<Tick>,
    pub color_mode: ColorMode,
    /// Tasks past due or completed late, in display order.
    pub overdue: Vec<Task>,
    /// Unfinished tasks due within the next seven days, in display order.
    pub due_soon: Vec<Task>,
}

impl TaskModel {
    /// True when filtering left nothing to render; the caller should show
    /// an empty-state message instead of an empty chart.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Run one full pipeline pass over raw rows.
///
/// `today` is the single evaluation instant for every classification in the
/// pass; callers supply it explicitly so a pass is deterministic.
pub fn build_model(rows: &[RawRow], options: &ViewOptions, today: NaiveDate) -> TaskModel {
    let mut tasks = normalize(rows);

    if let Some(projects) = &options.projects {
        tasks.retain(|t| projects.contains(&t.project));
    }
    if options.parents_only {
        tasks.retain(|t| t.kind == TaskKind::Parent);
    }

    sort::sort_hierarchy(&mut tasks);

    for task in &mut tasks {
        task.progress = progress::progress_fraction(task.kind, task.status);
        task.progress_end = if task.kind.is_milestone() {
            None
        } else {
            progress::progress_end(task.start, task.finish, task.progress)
        };
        task.schedule_status = task
            .finish
            .map(|finish| classify::classify(today, finish, task.completion_date));
    }

    let span = date_span(&tasks);
    let ticks = span
        .map(|s| ticks::tick_marks(s.min_start, s.max_finish, options.granularity))
        .unwrap_or_default();

    let view = |wanted: ScheduleStatus| -> Vec<Task> {
        tasks
            .iter()
            .filter(|t| t.schedule_status == Some(wanted))
            .cloned()
            .collect()
    };

    TaskModel {
        overdue: view(ScheduleStatus::Overdue),
        due_soon: view(ScheduleStatus::DueSoon),
        span,
        granularity: options.granularity,
        tick_format: options.granularity.tick_format().to_string(),
        ticks,
        color_mode: options.color_mode,
        tasks,
    }
}

/// Earliest start and latest finish over the dated tasks.
fn date_span(tasks: &[Task]) -> Option<DateSpan> {
    let min_start = tasks.iter().filter_map(|t| t.start).min()?;
    let max_finish = tasks.iter().filter_map(|t| t.finish).max()?;
    Some(DateSpan {
        min_start,
        max_finish,
    })
}
