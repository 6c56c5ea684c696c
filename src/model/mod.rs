pub mod granularity;
pub mod task;

pub use granularity::{Granularity, Tick};
pub use task::{ScheduleStatus, Task, TaskKind, TaskStatus};
