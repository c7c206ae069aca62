//! TaskStore — the active task map plus the deleted-task archive.
//!
//! Invariants:
//! - an id lives in exactly one of the two maps
//! - ids are `max(active ∪ deleted) + 1`, so they only ever grow and are
//!   never reused, even after deletions
//!
//! Batch operations return one outcome per input item; a bad item never
//! aborts its siblings. The caller persists the whole store once per batch.

use crate::limits::Limits;
use crate::task::{NextStage, Priority, Stage, Task};
use crate::time;
use anyhow::{Result, bail};
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone)]
pub struct TaskStore {
    active: BTreeMap<u64, Task>,
    deleted: BTreeMap<u64, Task>,
    limits: Limits,
}

/// Per-title outcome of `add`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Created { id: u64, title: String },
    TitleTooLong { limit: usize, title: String },
    TodoLimitReached { title: String },
}

/// Per-id outcome of `delete`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted { id: u64 },
    NotFound { id: u64 },
    InvalidId { raw: String },
}

/// Per-id outcome of `promote` and `regress`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    Moved { id: u64, to: Stage },
    WipLimitReached { id: u64, limit: usize },
    /// Terminal for the requested direction: `done` on promote, `todo` on
    /// regress. Stage and timestamp are left untouched.
    AtEnd { id: u64 },
    /// The stored stage has no business being in the active set.
    IllegalStage { id: u64, stage: Stage },
    NotFound { id: u64 },
    InvalidId { raw: String },
}

impl TaskStore {
    pub fn new(limits: Limits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    /// Rebuild a store from persisted maps, rejecting state that breaks the
    /// one-map-per-id invariant.
    pub fn from_parts(
        active: BTreeMap<u64, Task>,
        deleted: BTreeMap<u64, Task>,
        limits: Limits,
    ) -> Result<Self> {
        if let Some(id) = active.keys().find(|id| deleted.contains_key(*id)) {
            bail!("task {id} is in both the active set and the archive");
        }
        Ok(Self {
            active,
            deleted,
            limits,
        })
    }

    pub fn active(&self) -> &BTreeMap<u64, Task> {
        &self.active
    }

    pub fn deleted(&self) -> &BTreeMap<u64, Task> {
        &self.deleted
    }

    fn next_id(&self) -> u64 {
        let max_active = self.active.keys().next_back().copied().unwrap_or(0);
        let max_deleted = self.deleted.keys().next_back().copied().unwrap_or(0);
        max_active.max(max_deleted) + 1
    }

    fn count_stage(&self, stage: Stage) -> usize {
        self.active.values().filter(|t| t.stage == stage).count()
    }

    /// Create one task per title in `todo`. Titles over the length limit and
    /// titles arriving while the todo cap is full are skipped, each with its
    /// own outcome. The todo count is re-checked per title, so a batch can
    /// fill the remaining headroom and then start bouncing.
    pub fn add(&mut self, titles: &[String], priority: Priority, board: &str) -> Vec<AddOutcome> {
        let now = time::timestamp();
        let mut out = Vec::with_capacity(titles.len());

        for title in titles {
            let limit = self.limits.title_limit();
            if title.chars().count() > limit {
                out.push(AddOutcome::TitleTooLong {
                    limit,
                    title: title.clone(),
                });
                continue;
            }

            if let Some(cap) = self.limits.todo {
                if self.count_stage(Stage::Todo) >= cap {
                    out.push(AddOutcome::TodoLimitReached { title: title.clone() });
                    continue;
                }
            }

            let id = self.next_id();
            self.active.insert(id, Task::new(title.clone(), priority, board, &now));
            out.push(AddOutcome::Created {
                id,
                title: title.clone(),
            });
        }

        out
    }

    /// Soft-delete: move each task to the archive with stage `deleted`.
    pub fn delete(&mut self, raw_ids: &[String]) -> Vec<DeleteOutcome> {
        let now = time::timestamp();
        raw_ids.iter().map(|raw| self.delete_one(raw, &now)).collect()
    }

    fn delete_one(&mut self, raw: &str, now: &str) -> DeleteOutcome {
        let Ok(id) = raw.trim().parse::<u64>() else {
            return DeleteOutcome::InvalidId { raw: raw.to_string() };
        };
        let Some(mut task) = self.active.remove(&id) else {
            return DeleteOutcome::NotFound { id };
        };

        task.stage = Stage::Deleted;
        task.updated_at = now.to_string();
        self.deleted.insert(id, task);
        DeleteOutcome::Deleted { id }
    }

    /// Step each task one stage forward. Only the todo -> in-progress edge is
    /// gated: it checks the live in-progress count against the WIP limit at
    /// the moment of each transition.
    pub fn promote(&mut self, raw_ids: &[String]) -> Vec<TransitionOutcome> {
        let now = time::timestamp();
        raw_ids.iter().map(|raw| self.promote_one(raw, &now)).collect()
    }

    fn promote_one(&mut self, raw: &str, now: &str) -> TransitionOutcome {
        let Ok(id) = raw.trim().parse::<u64>() else {
            return TransitionOutcome::InvalidId { raw: raw.to_string() };
        };

        let in_progress = self.count_stage(Stage::InProgress);
        let Some(task) = self.active.get_mut(&id) else {
            return TransitionOutcome::NotFound { id };
        };

        match task.stage.promote_target() {
            NextStage::To(next) => {
                if next == Stage::InProgress {
                    if let Some(cap) = self.limits.wip {
                        if in_progress >= cap {
                            return TransitionOutcome::WipLimitReached { id, limit: cap };
                        }
                    }
                }
                task.stage = next;
                task.updated_at = now.to_string();
                TransitionOutcome::Moved { id, to: next }
            }
            NextStage::End => TransitionOutcome::AtEnd { id },
            NextStage::Illegal => TransitionOutcome::IllegalStage { id, stage: task.stage },
        }
    }

    /// Step each task one stage back. No limits apply on the way down.
    pub fn regress(&mut self, raw_ids: &[String]) -> Vec<TransitionOutcome> {
        let now = time::timestamp();
        raw_ids.iter().map(|raw| self.regress_one(raw, &now)).collect()
    }

    fn regress_one(&mut self, raw: &str, now: &str) -> TransitionOutcome {
        let Ok(id) = raw.trim().parse::<u64>() else {
            return TransitionOutcome::InvalidId { raw: raw.to_string() };
        };
        let Some(task) = self.active.get_mut(&id) else {
            return TransitionOutcome::NotFound { id };
        };

        match task.stage.regress_target() {
            NextStage::To(next) => {
                task.stage = next;
                task.updated_at = now.to_string();
                TransitionOutcome::Moved { id, to: next }
            }
            NextStage::End => TransitionOutcome::AtEnd { id },
            NextStage::Illegal => TransitionOutcome::IllegalStage { id, stage: task.stage },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(ts: &[&str]) -> Vec<String> {
        ts.iter().map(|s| s.to_string()).collect()
    }

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_ids_grow_and_survive_deletes() {
        let mut store = TaskStore::new(Limits::default());
        store.add(&titles(&["a", "b"]), Priority::Medium, "home");
        store.delete(&ids(&["2"]));
        let out = store.add(&titles(&["c"]), Priority::Medium, "home");

        // id 2 sits in the archive, so the next id is 3, not 2.
        assert_eq!(
            out,
            vec![AddOutcome::Created {
                id: 3,
                title: "c".to_string()
            }]
        );
        assert!(store.active().contains_key(&1));
        assert!(store.deleted().contains_key(&2));
    }

    #[test]
    fn test_delete_moves_to_archive() {
        let mut store = TaskStore::new(Limits::default());
        store.add(&titles(&["a"]), Priority::Low, "home");
        let out = store.delete(&ids(&["1"]));

        assert_eq!(out, vec![DeleteOutcome::Deleted { id: 1 }]);
        assert!(store.active().is_empty());
        let archived = &store.deleted()[&1];
        assert_eq!(archived.stage, Stage::Deleted);
        assert_eq!(archived.title, "a");
    }

    #[test]
    fn test_delete_batch_isolates_bad_entries() {
        let mut store = TaskStore::new(Limits::default());
        store.add(&titles(&["a", "b"]), Priority::Medium, "home");
        let out = store.delete(&ids(&["nope", "9", "1"]));

        assert_eq!(
            out,
            vec![
                DeleteOutcome::InvalidId {
                    raw: "nope".to_string()
                },
                DeleteOutcome::NotFound { id: 9 },
                DeleteOutcome::Deleted { id: 1 },
            ]
        );
        assert!(store.active().contains_key(&2));
    }

    #[test]
    fn test_promote_updates_timestamp_and_keeps_the_rest() {
        let mut store = TaskStore::new(Limits::default());
        store.add(&titles(&["a"]), Priority::High, "work");
        let created = store.active()[&1].created_at.clone();
        store.active.get_mut(&1).unwrap().updated_at = "2000-Jan-01 00:00:00".to_string();

        let out = store.promote(&ids(&["1"]));
        assert_eq!(
            out,
            vec![TransitionOutcome::Moved {
                id: 1,
                to: Stage::InProgress
            }]
        );

        let task = &store.active()[&1];
        assert_eq!(task.created_at, created);
        assert_ne!(task.updated_at, "2000-Jan-01 00:00:00");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.board, "work");
    }

    #[test]
    fn test_promote_done_is_a_noop() {
        let mut store = TaskStore::new(Limits::default());
        store.add(&titles(&["a"]), Priority::Medium, "home");
        store.promote(&ids(&["1", "1", "1"]));
        assert_eq!(store.active()[&1].stage, Stage::Done);

        let before = store.active()[&1].updated_at.clone();
        let out = store.promote(&ids(&["1"]));
        assert_eq!(out, vec![TransitionOutcome::AtEnd { id: 1 }]);
        assert_eq!(store.active()[&1].stage, Stage::Done);
        assert_eq!(store.active()[&1].updated_at, before);
    }

    #[test]
    fn test_regress_todo_is_a_noop() {
        let mut store = TaskStore::new(Limits::default());
        store.add(&titles(&["a"]), Priority::Medium, "home");
        let before = store.active()[&1].updated_at.clone();

        let out = store.regress(&ids(&["1"]));
        assert_eq!(out, vec![TransitionOutcome::AtEnd { id: 1 }]);
        assert_eq!(store.active()[&1].stage, Stage::Todo);
        assert_eq!(store.active()[&1].updated_at, before);
    }

    #[test]
    fn test_wip_limit_blocks_the_next_promotion() {
        let limits = Limits {
            wip: Some(2),
            ..Limits::default()
        };
        let mut store = TaskStore::new(limits);
        store.add(&titles(&["a", "b", "c"]), Priority::Medium, "home");
        store.promote(&ids(&["1", "2"]));

        let out = store.promote(&ids(&["3"]));
        assert_eq!(out, vec![TransitionOutcome::WipLimitReached { id: 3, limit: 2 }]);
        assert_eq!(store.active()[&3].stage, Stage::Todo);
    }

    #[test]
    fn test_wip_limit_counts_live_within_a_batch() {
        let limits = Limits {
            wip: Some(1),
            ..Limits::default()
        };
        let mut store = TaskStore::new(limits);
        store.add(&titles(&["a", "b"]), Priority::Medium, "home");

        // First promotion fills the only slot; the second must bounce.
        let out = store.promote(&ids(&["1", "2"]));
        assert_eq!(
            out,
            vec![
                TransitionOutcome::Moved {
                    id: 1,
                    to: Stage::InProgress
                },
                TransitionOutcome::WipLimitReached { id: 2, limit: 1 },
            ]
        );
    }

    #[test]
    fn test_wip_limit_does_not_gate_later_stages() {
        let limits = Limits {
            wip: Some(1),
            ..Limits::default()
        };
        let mut store = TaskStore::new(limits);
        store.add(&titles(&["a"]), Priority::Medium, "home");
        store.promote(&ids(&["1"]));

        // in-progress -> backlog is unconditional even at the cap
        let out = store.promote(&ids(&["1"]));
        assert_eq!(
            out,
            vec![TransitionOutcome::Moved {
                id: 1,
                to: Stage::Backlog
            }]
        );
    }

    #[test]
    fn test_todo_limit_rejects_overflow() {
        let limits = Limits {
            todo: Some(2),
            ..Limits::default()
        };
        let mut store = TaskStore::new(limits);
        let out = store.add(&titles(&["a", "b", "c"]), Priority::Medium, "home");

        assert_eq!(out.len(), 3);
        assert!(matches!(out[0], AddOutcome::Created { id: 1, .. }));
        assert!(matches!(out[1], AddOutcome::Created { id: 2, .. }));
        assert!(matches!(out[2], AddOutcome::TodoLimitReached { .. }));
        assert_eq!(store.active().len(), 2);
    }

    #[test]
    fn test_title_length_limit() {
        let limits = Limits {
            taskname: Some(10),
            ..Limits::default()
        };
        let mut store = TaskStore::new(limits);
        let out = store.add(
            &titles(&["this title is too long", "short"]),
            Priority::Medium,
            "home",
        );

        assert_eq!(
            out[0],
            AddOutcome::TitleTooLong {
                limit: 10,
                title: "this title is too long".to_string()
            }
        );
        assert!(matches!(out[1], AddOutcome::Created { id: 1, .. }));
        assert_eq!(store.active().len(), 1);
    }

    #[test]
    fn test_promote_catches_bad_ids_per_item() {
        let mut store = TaskStore::new(Limits::default());
        store.add(&titles(&["a"]), Priority::Medium, "home");

        let out = store.promote(&ids(&["x", "1"]));
        assert_eq!(
            out,
            vec![
                TransitionOutcome::InvalidId { raw: "x".to_string() },
                TransitionOutcome::Moved {
                    id: 1,
                    to: Stage::InProgress
                },
            ]
        );
    }

    #[test]
    fn test_from_parts_rejects_an_id_in_both_maps() {
        let mut source = TaskStore::new(Limits::default());
        source.add(&titles(&["a"]), Priority::Medium, "home");
        let task = source.active()[&1].clone();

        let active: BTreeMap<u64, Task> = [(1, task.clone())].into();
        let deleted: BTreeMap<u64, Task> = [(1, task)].into();
        assert!(TaskStore::from_parts(active, deleted, Limits::default()).is_err());
    }

    #[test]
    fn test_illegal_stage_is_reported_not_skipped_over() {
        let mut store = TaskStore::new(Limits::default());
        store.add(&titles(&["a"]), Priority::Medium, "home");
        store.active.get_mut(&1).unwrap().stage = Stage::Deleted;

        let out = store.promote(&ids(&["1"]));
        assert_eq!(
            out,
            vec![TransitionOutcome::IllegalStage {
                id: 1,
                stage: Stage::Deleted
            }]
        );
    }
}
