//! VM manager: owns the record collection and drives lifecycle transitions.

use crate::config::ManagerConfig;
use crate::error::{Error, Result};
use crate::vm::{Vm, VmState, MAX_NAME_LEN};

/// Manages an ordered collection of VM records and their lifecycle state.
///
/// Starting a stopped VM makes it the sole runner by demoting any other
/// running VM to paused. Resuming a paused VM takes a fast path that skips
/// the demotion scan, so an earlier runner is left running alongside it
/// until the next start from stopped.
///
/// All operations are synchronous; mutations take `&mut self`, so shared
/// use requires an external lock around the whole manager.
pub struct VmManager {
    vms: Vec<Vm>,
    max_vms: usize,
}

impl VmManager {
    /// Create a manager seeded from the given configuration.
    ///
    /// Seeds `config.initial_vms` stopped VMs with ids `0..n-1` and names
    /// `VM0`, `VM1`, ... A non-positive count seeds none; there is no error
    /// path, callers observe the outcome through [`count`](Self::count).
    pub fn new(config: ManagerConfig) -> Self {
        let seed = if config.initial_vms > 0 {
            config.initial_vms
        } else {
            0
        };
        let vms: Vec<Vm> = (0..seed).map(|id| Vm::new(id, format!("VM{}", id))).collect();

        tracing::info!(count = vms.len(), "VM manager created");
        Self {
            vms,
            max_vms: config.max_vms,
        }
    }

    /// Create a manager holding `count` stopped VMs and no capacity limit.
    pub fn with_vms(count: i32) -> Self {
        Self::new(ManagerConfig::new(count))
    }

    /// Append a new stopped VM with the given name and return its id.
    ///
    /// The id is the current count plus one, independent of the ids already
    /// present. After removals this can mint an id that is still live;
    /// lookups resolve such duplicates to the first match in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NameTooLong`] if `name` exceeds [`MAX_NAME_LEN`]
    /// bytes and [`Error::AtCapacity`] if the configured limit is reached.
    /// The collection is untouched on error.
    pub fn add(&mut self, name: &str) -> Result<i32> {
        if name.len() > MAX_NAME_LEN {
            return Err(Error::NameTooLong { len: name.len() });
        }

        if self.max_vms > 0 && self.vms.len() >= self.max_vms {
            return Err(Error::AtCapacity(self.max_vms));
        }

        let id = self.vms.len() as i32 + 1;
        self.vms.push(Vm::new(id, name));

        tracing::info!(vm_id = id, name = %name, "VM added");
        Ok(id)
    }

    /// Remove the first VM whose id matches.
    ///
    /// Records after the removed one shift left, so relative order is
    /// preserved.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the collection holds no VMs and
    /// [`Error::NotFound`] if no record carries the id.
    pub fn remove(&mut self, id: i32) -> Result<()> {
        if self.vms.is_empty() {
            return Err(Error::Empty);
        }

        let index = self
            .vms
            .iter()
            .position(|vm| vm.id == id)
            .ok_or(Error::NotFound(id))?;
        self.vms.remove(index);

        tracing::info!(vm_id = id, "VM removed");
        Ok(())
    }

    /// Start the first VM whose id matches.
    ///
    /// A stopped VM becomes the sole runner: every other running VM is
    /// demoted to paused. A paused VM resumes directly without the demotion
    /// scan.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no record carries the id and
    /// [`Error::AlreadyRunning`] if the matched VM is already running.
    pub fn start(&mut self, id: i32) -> Result<()> {
        let index = self
            .vms
            .iter()
            .position(|vm| vm.id == id)
            .ok_or(Error::NotFound(id))?;

        match self.vms[index].state {
            VmState::Running => Err(Error::AlreadyRunning(id)),
            VmState::Paused => {
                self.vms[index].state = VmState::Running;
                tracing::info!(vm_id = id, "VM resumed");
                Ok(())
            }
            VmState::Stopped => {
                self.vms[index].state = VmState::Running;
                for (i, vm) in self.vms.iter_mut().enumerate() {
                    if i != index && vm.state == VmState::Running {
                        vm.state = VmState::Paused;
                        tracing::debug!(vm_id = vm.id, "VM demoted to paused");
                    }
                }
                tracing::info!(vm_id = id, "VM started");
                Ok(())
            }
        }
    }

    /// Stop the first VM whose id matches.
    ///
    /// Only a running VM can be stopped; a paused VM must be resumed first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the collection holds no VMs,
    /// [`Error::NotRunning`] if the matched VM is not running, and
    /// [`Error::NotFound`] if no record carries the id.
    pub fn stop(&mut self, id: i32) -> Result<()> {
        if self.vms.is_empty() {
            return Err(Error::Empty);
        }

        for vm in self.vms.iter_mut() {
            if vm.id == id {
                if vm.state != VmState::Running {
                    return Err(Error::NotRunning(id));
                }
                vm.state = VmState::Stopped;
                tracing::info!(vm_id = id, "VM stopped");
                return Ok(());
            }
        }

        Err(Error::NotFound(id))
    }

    /// State of the VM at `index` in collection order.
    ///
    /// The lookup is positional, not an id search; after removals positions
    /// and ids diverge. An empty collection or an out-of-range index answers
    /// [`VmState::Stopped`] rather than an error.
    pub fn state_at(&self, index: i32) -> VmState {
        if index < 0 {
            return VmState::Stopped;
        }
        self.vms
            .get(index as usize)
            .map(|vm| vm.state)
            .unwrap_or(VmState::Stopped)
    }

    /// Get the first VM whose id matches.
    pub fn get(&self, id: i32) -> Option<&Vm> {
        self.vms.iter().find(|vm| vm.id == id)
    }

    /// Get the currently running VM, if any.
    pub fn running(&self) -> Option<&Vm> {
        self.vms.iter().find(|vm| vm.is_running())
    }

    /// All VM records in collection order.
    pub fn vms(&self) -> &[Vm] {
        &self.vms
    }

    /// Number of VMs in the collection.
    pub fn count(&self) -> usize {
        self.vms.len()
    }

    /// Check if the collection holds no VMs.
    pub fn is_empty(&self) -> bool {
        self.vms.is_empty()
    }
}

impl Default for VmManager {
    fn default() -> Self {
        Self::new(ManagerConfig::default())
    }
}
