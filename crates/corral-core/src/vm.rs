//! VM record and lifecycle state types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length of a VM name in bytes.
pub const MAX_NAME_LEN: usize = 49;

/// Lifecycle state of a VM record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VmState {
    /// VM is running
    Running,
    /// VM is stopped (also the answer for unknown or out-of-range queries)
    #[default]
    Stopped,
    /// VM is paused
    Paused,
}

impl fmt::Display for VmState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VmState::Running => write!(f, "running"),
            VmState::Stopped => write!(f, "stopped"),
            VmState::Paused => write!(f, "paused"),
        }
    }
}

/// A VM record tracked by the manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vm {
    /// Identifier assigned at creation. Ids are count-based, so an id vacated
    /// by a removal can be minted again; lookups resolve to the first match.
    pub id: i32,
    /// Human-readable name, at most [`MAX_NAME_LEN`] bytes
    pub name: String,
    /// Current lifecycle state
    pub state: VmState,
    /// Creation timestamp
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Vm {
    /// Create a new VM record in the stopped state.
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            state: VmState::Stopped,
            created_at: chrono::Utc::now(),
        }
    }

    /// Check if the VM is in the running state.
    pub fn is_running(&self) -> bool {
        self.state == VmState::Running
    }
}
