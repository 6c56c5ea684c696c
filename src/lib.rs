//! Scheduling-and-classification engine for Gantt timeline dashboards.
//!
//! Turns raw tabular schedule rows into an ordered, bucketed,
//! status-annotated task model ready for an external renderer: hierarchical
//! sort with fixed display slots, time-axis bucketing across six
//! granularities, status-driven progress intervals, and overdue / due-soon
//! classification against an explicit evaluation date.

pub mod engine;
pub mod error;
pub mod io;
pub mod model;

pub use engine::{build_model, ColorMode, DateSpan, RawRow, TaskModel, ViewOptions};
pub use error::EngineError;
pub use model::{Granularity, ScheduleStatus, Task, TaskKind, TaskStatus, Tick};
