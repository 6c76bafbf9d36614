//! Per-host download admission
//!
//! Each host gets a lazily created counting semaphore capping how many
//! article downloads may hit it at once. Gates are created on first use and
//! live for the whole crawl.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

/// Map of host name to its download gate.
#[derive(Debug)]
pub struct HostGates {
    slots: usize,
    inner: Mutex<HashMap<String, Arc<Semaphore>>>,
}

impl HostGates {
    /// `slots` is the per-host concurrency cap applied to every gate.
    pub fn new(slots: usize) -> Self {
        Self {
            slots,
            inner: Mutex::new(HashMap::new()),
        }
    }

    /// Fetch (or create) the gate for a host. The gate is cloned out so the
    /// map lock is dropped before anyone awaits a permit on it.
    pub fn gate(&self, host: &str) -> Arc<Semaphore> {
        let mut map = self.inner.lock().unwrap();
        Arc::clone(
            map.entry(host.to_string())
                .or_insert_with(|| Arc::new(Semaphore::new(self.slots))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_host_shares_a_gate() {
        let gates = HostGates::new(8);
        let a = gates.gate("example.com");
        let b = gates.gate("example.com");
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_distinct_hosts_get_distinct_gates() {
        let gates = HostGates::new(8);
        let a = gates.gate("one.example.com");
        let b = gates.gate("two.example.com");
        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_gate_carries_configured_capacity() {
        let gates = HostGates::new(3);
        assert_eq!(gates.gate("example.com").available_permits(), 3);
    }
}
