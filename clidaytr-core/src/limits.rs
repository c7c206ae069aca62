//! Creation and display limits, sourced from the user's config.

use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE_LIMIT: usize = 40;
pub const DEFAULT_DONE_SHOWN: usize = 10;

/// Optional board limits. Absent `todo`/`wip` means unlimited; absent
/// `taskname`/`done` fall back to the defaults above.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Max task title length in characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taskname: Option<usize>,
    /// Max tasks in `todo` across all boards.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub todo: Option<usize>,
    /// Max tasks in-progress at once.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wip: Option<usize>,
    /// Max entries shown in the DONE column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<usize>,
}

impl Limits {
    pub fn title_limit(&self) -> usize {
        self.taskname.unwrap_or(DEFAULT_TITLE_LIMIT)
    }

    pub fn done_shown(&self) -> usize {
        self.done.unwrap_or(DEFAULT_DONE_SHOWN)
    }
}
