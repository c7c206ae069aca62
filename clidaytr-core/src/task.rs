//! Task model and the stage state machine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position of a task in the workflow.
///
/// `Deleted` is a terminal side-branch: tasks only carry it inside the
/// archive, never in the active set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Todo,
    InProgress,
    Backlog,
    Done,
    Deleted,
}

/// What a stage steps to in a given direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStage {
    To(Stage),
    /// Terminal in the requested direction (`done` forward, `todo` back).
    End,
    /// A stage that should never appear in the active set.
    Illegal,
}

impl Stage {
    /// One step forward: todo -> in-progress -> backlog -> done.
    pub fn promote_target(self) -> NextStage {
        match self {
            Stage::Todo => NextStage::To(Stage::InProgress),
            Stage::InProgress => NextStage::To(Stage::Backlog),
            Stage::Backlog => NextStage::To(Stage::Done),
            Stage::Done => NextStage::End,
            Stage::Deleted => NextStage::Illegal,
        }
    }

    /// One step back: done -> backlog -> in-progress -> todo.
    pub fn regress_target(self) -> NextStage {
        match self {
            Stage::Done => NextStage::To(Stage::Backlog),
            Stage::Backlog => NextStage::To(Stage::InProgress),
            Stage::InProgress => NextStage::To(Stage::Todo),
            Stage::Todo => NextStage::End,
            Stage::Deleted => NextStage::Illegal,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Todo => "todo",
            Stage::InProgress => "in-progress",
            Stage::Backlog => "backlog",
            Stage::Done => "done",
            Stage::Deleted => "deleted",
        };
        f.write_str(name)
    }
}

/// Task priority, stored on disk as its numeric value (1 = highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Priority {
    High = 1,
    Medium = 2,
    Low = 3,
}

impl From<Priority> for u8 {
    fn from(p: Priority) -> u8 {
        p as u8
    }
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(Priority::High),
            2 => Ok(Priority::Medium),
            3 => Ok(Priority::Low),
            other => Err(format!("priority out of range (1-3): {other}")),
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(format!("invalid priority '{other}' (use high, medium or low)")),
        }
    }
}

/// One task on the board.
///
/// `created_at` is written once; `updated_at` moves on every stage change,
/// deletion included. `priority` and `board` are fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub stage: Stage,
    pub title: String,
    pub created_at: String,
    pub updated_at: String,
    pub priority: Priority,
    pub board: String,
}

impl Task {
    /// Fresh task in `todo`, timestamped `now`.
    pub fn new(title: impl Into<String>, priority: Priority, board: impl Into<String>, now: &str) -> Self {
        Self {
            stage: Stage::Todo,
            title: title.into(),
            created_at: now.to_string(),
            updated_at: now.to_string(),
            priority,
            board: board.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promote_chain_ends_at_done() {
        assert_eq!(Stage::Todo.promote_target(), NextStage::To(Stage::InProgress));
        assert_eq!(Stage::InProgress.promote_target(), NextStage::To(Stage::Backlog));
        assert_eq!(Stage::Backlog.promote_target(), NextStage::To(Stage::Done));
        assert_eq!(Stage::Done.promote_target(), NextStage::End);
    }

    #[test]
    fn test_regress_chain_ends_at_todo() {
        assert_eq!(Stage::Done.regress_target(), NextStage::To(Stage::Backlog));
        assert_eq!(Stage::Backlog.regress_target(), NextStage::To(Stage::InProgress));
        assert_eq!(Stage::InProgress.regress_target(), NextStage::To(Stage::Todo));
        assert_eq!(Stage::Todo.regress_target(), NextStage::End);
    }

    #[test]
    fn test_deleted_is_illegal_in_both_directions() {
        assert_eq!(Stage::Deleted.promote_target(), NextStage::Illegal);
        assert_eq!(Stage::Deleted.regress_target(), NextStage::Illegal);
    }

    #[test]
    fn test_wire_shape() {
        let task = Task::new("write report", Priority::High, "work", "2024-Jan-05 14:30:00");
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["stage"], "todo");
        assert_eq!(json["priority"], 1);
        assert_eq!(json["board"], "work");
        assert_eq!(json["created_at"], "2024-Jan-05 14:30:00");

        let back: Task = serde_json::from_value(json).unwrap();
        assert_eq!(back, task);
    }

    #[test]
    fn test_stage_wire_names() {
        assert_eq!(serde_json::to_value(Stage::InProgress).unwrap(), "inprogress");
        assert_eq!(serde_json::to_value(Stage::Deleted).unwrap(), "deleted");
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert!("urgent".parse::<Priority>().is_err());
        assert!(Priority::try_from(4).is_err());
    }
}
