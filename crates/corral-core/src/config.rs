//! Configuration for the VM manager.
//!
//! Configuration is loaded from environment variables with sensible defaults.

/// Configuration for a [`VmManager`](crate::VmManager).
#[derive(Debug, Clone, Default)]
pub struct ManagerConfig {
    /// Number of VMs to seed at creation (a negative count seeds none).
    pub initial_vms: i32,
    /// Maximum number of VMs in the collection (default: 0 = unlimited).
    pub max_vms: usize,
}

impl ManagerConfig {
    /// Create a configuration seeding `initial_vms` VMs with no capacity limit.
    pub fn new(initial_vms: i32) -> Self {
        Self {
            initial_vms,
            max_vms: 0,
        }
    }

    /// Limit the collection to at most `max_vms` VMs (0 = unlimited).
    pub fn with_max_vms(mut self, max_vms: usize) -> Self {
        self.max_vms = max_vms;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `CORRAL_INITIAL_VMS` | `0` |
    /// | `CORRAL_MAX_VMS` | `0` (unlimited) |
    ///
    /// Values that fail to parse fall back to the defaults.
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            initial_vms: std::env::var("CORRAL_INITIAL_VMS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.initial_vms),
            max_vms: std::env::var("CORRAL_MAX_VMS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.max_vms),
        }
    }
}
