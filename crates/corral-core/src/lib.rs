//! # corral-core
//!
//! In-process VM record collection and lifecycle management.
//!
//! The crate keeps an ordered collection of VM records and drives a small
//! state machine over them: at most one VM runs at a time, and starting a
//! stopped VM demotes the previous runner to paused instead of stopping it.
//! "Running" is a label on the record; no actual machine is controlled.
//!
//! ## Quick Start
//!
//! ```
//! use corral_core::{ManagerConfig, VmManager, VmState};
//!
//! # fn example() -> corral_core::Result<()> {
//! // Seed two stopped VMs (VM0, VM1), then add a third
//! let mut manager = VmManager::new(ManagerConfig::new(2));
//! let id = manager.add("worker")?;
//!
//! manager.start(id)?;
//! assert_eq!(manager.state_at(2), VmState::Running);
//!
//! manager.stop(id)?;
//! manager.remove(id)?;
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

mod config;
mod error;
mod manager;
mod vm;

pub use config::ManagerConfig;
pub use error::{Error, Result};
pub use manager::VmManager;
pub use vm::{Vm, VmState, MAX_NAME_LEN};
