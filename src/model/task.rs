use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Hierarchy level of a task. Governs sort precedence within a project and
/// whether the task spans a duration or marks a single point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    Parent,
    Sub,
    Milestone,
    Undefined,
}

impl TaskKind {
    /// Sort rank: parents before subs before milestones, unknowns last.
    pub fn rank(self) -> u8 {
        match self {
            TaskKind::Parent => 1,
            TaskKind::Sub => 2,
            TaskKind::Milestone => 3,
            TaskKind::Undefined => 4,
        }
    }

    pub fn is_milestone(self) -> bool {
        matches!(self, TaskKind::Milestone)
    }
}

/// Reported completion state of a task, from the status column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    Closed,
    InProcess,
    NotStarted,
    #[default]
    Undefined,
}

/// Where a task stands relative to the evaluation date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleStatus {
    Overdue,
    DueSoon,
    OnTrack,
}

/// A single task or milestone in the schedule.
///
/// `progress`, `progress_end`, `schedule_status` and `display_index` are
/// derived by the pipeline; a freshly normalized task carries their defaults
/// until the later stages fill them in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    /// Owning top-level project group.
    pub project: String,
    pub kind: TaskKind,
    pub start: Option<NaiveDate>,
    /// Equal to `start` for milestones (zero duration).
    pub finish: Option<NaiveDate>,
    /// When the task was actually marked done, if ever.
    pub completion_date: Option<NaiveDate>,
    pub status: TaskStatus,
    /// Completion fraction in [0.0, 1.0], derived from `status` alone.
    pub progress: f32,
    /// Date the progress bar reaches, within [start, finish].
    pub progress_end: Option<NaiveDate>,
    /// `None` for tasks without a finish date.
    pub schedule_status: Option<ScheduleStatus>,
    /// Fixed vertical slot assigned by the hierarchy sort.
    pub display_index: u32,
}

impl Task {
    /// Create a task with no derived fields populated yet.
    pub fn new(name: impl Into<String>, project: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            name: name.into(),
            project: project.into(),
            kind,
            start: None,
            finish: None,
            completion_date: None,
            status: TaskStatus::Undefined,
            progress: 0.0,
            progress_end: None,
            schedule_status: None,
            display_index: 0,
        }
    }

    /// Y-axis label combining the project group and the task name.
    pub fn display_label(&self) -> String {
        format!("{} / {}", self.project, self.name)
    }
}
