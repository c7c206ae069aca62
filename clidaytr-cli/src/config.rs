use anyhow::{Context, Result};
use clidaytr_core::Limits;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Per-user config, loaded once per invocation and handed down explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the board data file.
    pub clidaytr_data: PathBuf,

    /// Repaint the full board after every mutating command.
    #[serde(default)]
    pub repaint: bool,

    #[serde(default)]
    pub limits: Limits,
}

/// Config and data live under `CLIDAYTR_HOME`, falling back to `HOME`.
pub fn clidaytr_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("CLIDAYTR_HOME") {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(clidaytr_home()?.join(".clidaytr.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    let s = fs::read_to_string(&p)
        .with_context(|| format!("read {} (run: clidaytr configure)", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

/// `clidaytr configure`: write a config pointing at a data file next to it.
pub fn init_config(force: bool) -> Result<()> {
    let p = config_path()?;
    if p.exists() && !force {
        println!(
            "Config already exists: {} (pass --force to overwrite)",
            p.display()
        );
        return Ok(());
    }

    let cfg = Config {
        clidaytr_data: clidaytr_home()?.join(".clidaytr.json"),
        repaint: false,
        limits: Limits::default(),
    };
    let s = toml::to_string_pretty(&cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    println!("Wrote {}", p.display());
    Ok(())
}
