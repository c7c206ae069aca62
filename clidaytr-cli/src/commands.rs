//! Command handlers: load config and state, run one store operation, print
//! per-item status lines, persist, and optionally repaint the board.

use anyhow::Result;
use clidaytr_core::{
    AddOutcome, BoardView, DeleteOutcome, Priority, TaskStore, TransitionOutcome,
};

use crate::config::{Config, load_config};
use crate::state;
use crate::table::{self, Footers};

pub fn add(titles: &[String], priority: Priority, board: &str) -> Result<()> {
    let cfg = load_config()?;
    let mut store = state::read_store(&cfg)?;

    for outcome in store.add(titles, priority, board) {
        match outcome {
            AddOutcome::Created { id, title } => {
                println!("Creating new task w/ id: {id} -> {title}");
            }
            AddOutcome::TitleTooLong { limit, title } => {
                println!("Task must be at most {limit} chars, Brevity counts: {title}");
            }
            AddOutcome::TodoLimitReached { title } => {
                println!("No new todos, limit reached already: {title}");
            }
        }
    }

    state::write_store(&cfg, &store)?;
    repaint(&cfg, &store)
}

pub fn delete(ids: &[String]) -> Result<()> {
    let cfg = load_config()?;
    let mut store = state::read_store(&cfg)?;

    for outcome in store.delete(ids) {
        match outcome {
            DeleteOutcome::Deleted { id } => println!("Removed task {id}."),
            DeleteOutcome::NotFound { id } => {
                println!("No existing task with that id: {id}");
            }
            DeleteOutcome::InvalidId { raw } => println!("Invalid task id: {raw}"),
        }
    }

    state::write_store(&cfg, &store)?;
    repaint(&cfg, &store)
}

pub fn promote(ids: &[String]) -> Result<()> {
    let cfg = load_config()?;
    let mut store = state::read_store(&cfg)?;

    for outcome in store.promote(ids) {
        match outcome {
            TransitionOutcome::Moved { id, to } => {
                println!("Promoting task {id} to {to}.");
            }
            TransitionOutcome::WipLimitReached { id, limit } => {
                println!("Can not promote {id}, in-progress limit of {limit} reached.");
            }
            TransitionOutcome::AtEnd { id } => {
                println!("Can not promote {id}, already done.");
            }
            other => print_lookup_failure(&other),
        }
    }

    state::write_store(&cfg, &store)?;
    repaint(&cfg, &store)
}

pub fn regress(ids: &[String]) -> Result<()> {
    let cfg = load_config()?;
    let mut store = state::read_store(&cfg)?;

    for outcome in store.regress(ids) {
        match outcome {
            TransitionOutcome::Moved { id, to } => {
                println!("Regressing task {id} to {to}.");
            }
            TransitionOutcome::AtEnd { id } => {
                println!("Already in todo, can not regress {id}.");
            }
            other => print_lookup_failure(&other),
        }
    }

    state::write_store(&cfg, &store)?;
    repaint(&cfg, &store)
}

fn print_lookup_failure(outcome: &TransitionOutcome) {
    match outcome {
        TransitionOutcome::NotFound { id } => {
            println!("No existing task with that id: {id}");
        }
        TransitionOutcome::InvalidId { raw } => println!("Invalid task id: {raw}"),
        TransitionOutcome::IllegalStage { id, stage } => {
            println!("Can not move task {id}: unexpected stage '{stage}'.");
        }
        // Moved / WipLimitReached / AtEnd are handled by the callers
        other => println!("{other:?}"),
    }
}

pub fn show(name: &str) -> Result<()> {
    let cfg = load_config()?;
    let store = state::read_store(&cfg)?;

    let view = BoardView::new(store.active(), cfg.limits);
    table::print_board(&view.columns_for_board(name), &Footers::for_board(name));
    Ok(())
}

pub fn display() -> Result<()> {
    let cfg = load_config()?;
    let store = state::read_store(&cfg)?;

    paint_full_board(&cfg, &store);
    Ok(())
}

fn paint_full_board(cfg: &Config, store: &TaskStore) {
    let view = BoardView::new(store.active(), cfg.limits);
    table::print_board(&view.columns(), &Footers::full_board());
}

fn repaint(cfg: &Config, store: &TaskStore) -> Result<()> {
    if cfg.repaint {
        paint_full_board(cfg, store);
    }
    Ok(())
}
