//! Persisted board state: one JSON file holding the active map and the
//! deleted-task archive.
//!
//! The whole file is rewritten after every mutating command; there is no
//! locking or write-to-temp-then-rename. Two invocations racing on the same
//! file can clobber each other — accepted for a single-user tool.

use anyhow::{Context, Result};
use clidaytr_core::{Task, TaskStore};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;

use crate::config::Config;

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredState {
    #[serde(default)]
    data: BTreeMap<u64, Task>,
    #[serde(default)]
    deleted: BTreeMap<u64, Task>,
}

/// Load the store, initializing an empty data file on first run.
pub fn read_store(cfg: &Config) -> Result<TaskStore> {
    let p = &cfg.clidaytr_data;
    if !p.exists() {
        println!("No data, initializing data file.");
        write_state(cfg, &StoredState::default())?;
        return Ok(TaskStore::new(cfg.limits));
    }

    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    let stored: StoredState = serde_json::from_str(&s)
        .with_context(|| format!("parse {} (not a clidaytr data file?)", p.display()))?;
    TaskStore::from_parts(stored.data, stored.deleted, cfg.limits)
        .with_context(|| format!("load {}", p.display()))
}

pub fn write_store(cfg: &Config, store: &TaskStore) -> Result<()> {
    let stored = StoredState {
        data: store.active().clone(),
        deleted: store.deleted().clone(),
    };
    write_state(cfg, &stored)
}

fn write_state(cfg: &Config, stored: &StoredState) -> Result<()> {
    let p = &cfg.clidaytr_data;
    let json = serde_json::to_string_pretty(stored).context("serialize board state")?;
    fs::write(p, json).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}
