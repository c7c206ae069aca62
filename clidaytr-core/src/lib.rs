//! clidaytr-core: task model, stage transitions, and board classification
//! for the clidaytr personal kanban CLI.
//!
//! Everything here is pure in-memory state. Loading and persisting the board
//! file, config, and table drawing live in the `clidaytr-cli` crate.

pub mod board;
pub mod limits;
pub mod store;
pub mod task;
pub mod time;

pub use board::{BoardColumns, BoardView};
pub use limits::Limits;
pub use store::{AddOutcome, DeleteOutcome, TaskStore, TransitionOutcome};
pub use task::{NextStage, Priority, Stage, Task};
pub use time::timestamp;
