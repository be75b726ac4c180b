#![cfg(any(test, feature = "testutils"))]

use std::collections::BTreeMap;

use alloy_primitives::{Address, B256, U256, U512};

use crate::Host;

/// One event-log entry as the in-memory host records it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogRecord {
    pub topic: B256,
    pub payload: U256,
    pub indexed: (Address, Address),
}

/// In-memory stand-in for the production host. Storage is a plain map
/// (absent key reads as zero), the caller is settable per invocation and
/// the log is append-only.
///
/// Writes apply eagerly: there is no rollback here. The contract performs
/// all precondition checks before its first storage write, so an aborted
/// operation leaves this host byte-identical to its pre-call state, which
/// tests assert via `PartialEq` snapshots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryHost {
    caller: Address,
    storage: BTreeMap<U512, U512>,
    logs: Vec<LogRecord>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_caller(caller: Address) -> Self {
        MemoryHost {
            caller,
            ..Self::default()
        }
    }

    pub fn set_caller(&mut self, caller: Address) {
        self.caller = caller;
    }

    pub fn logs(&self) -> &[LogRecord] {
        &self.logs
    }

    /// Number of distinct slots ever written.
    pub fn slots_written(&self) -> usize {
        self.storage.len()
    }
}

impl Host for MemoryHost {
    fn storage_get(&self, key: U512) -> U512 {
        self.storage.get(&key).copied().unwrap_or(U512::ZERO)
    }

    fn storage_set(&mut self, key: U512, value: U512) {
        self.storage.insert(key, value);
    }

    fn caller(&self) -> Address {
        self.caller
    }

    fn append_log(&mut self, topic: B256, payload: U256, indexed1: Address, indexed2: Address) {
        self.logs.push(LogRecord {
            topic,
            payload,
            indexed: (indexed1, indexed2),
        });
    }
}
