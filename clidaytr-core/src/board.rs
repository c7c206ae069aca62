//! BoardView — classification of active tasks into display columns.
//!
//! Two paths, deliberately not unified:
//! - the full board walks the map in id order, untouched
//! - the filtered per-board view sorts everything by priority first, then
//!   keeps one board
//!
//! The full board also folds backlog cards into the IN-PROGRESS column, so
//! its BACKLOG column is always empty; only the filtered view fills it. Both
//! quirks are observable behavior the tool has always had (see DESIGN.md).

use crate::limits::Limits;
use crate::task::{Stage, Task};
use std::collections::BTreeMap;

/// The four columns, each a list of `[id] title` entries in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardColumns {
    pub todo: Vec<String>,
    pub in_progress: Vec<String>,
    pub backlog: Vec<String>,
    pub done: Vec<String>,
}

pub struct BoardView<'a> {
    tasks: &'a BTreeMap<u64, Task>,
    limits: Limits,
}

fn entry(id: u64, task: &Task) -> String {
    format!("[{id}] {}", task.title)
}

impl<'a> BoardView<'a> {
    pub fn new(tasks: &'a BTreeMap<u64, Task>, limits: Limits) -> Self {
        Self { tasks, limits }
    }

    /// Full board: every task, id order, backlog folded into in-progress.
    pub fn columns(&self) -> BoardColumns {
        let mut cols = BoardColumns::default();
        for (id, task) in self.tasks {
            let line = entry(*id, task);
            match task.stage {
                Stage::Todo => cols.todo.push(line),
                Stage::InProgress | Stage::Backlog => cols.in_progress.push(line),
                // done (and anything unexpected) lands newest-first
                _ => cols.done.insert(0, line),
            }
        }
        cols.done.truncate(self.limits.done_shown());
        cols
    }

    /// One board: all tasks sorted by priority (high first, stable), then
    /// filtered to `name` and classified. Backlog keeps its own column here.
    pub fn columns_for_board(&self, name: &str) -> BoardColumns {
        let mut sorted: Vec<(&u64, &Task)> = self.tasks.iter().collect();
        sorted.sort_by_key(|(_, task)| task.priority);

        let mut cols = BoardColumns::default();
        for (id, task) in sorted {
            if task.board != name {
                continue;
            }
            let line = entry(*id, task);
            match task.stage {
                Stage::Todo => cols.todo.push(line),
                Stage::InProgress => cols.in_progress.push(line),
                Stage::Backlog => cols.backlog.push(line),
                _ => cols.done.insert(0, line),
            }
        }
        cols.done.truncate(self.limits.done_shown());
        cols
    }
}
