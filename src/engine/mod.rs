pub mod assemble;
pub mod classify;
pub mod normalize;
pub mod progress;
pub mod sort;
pub mod ticks;

pub use assemble::{build_model, ColorMode, DateSpan, TaskModel, ViewOptions};
pub use normalize::RawRow;
