pub mod testutils;

pub use alloy_primitives::{Address, B256, I256, U256, U512};

/// Boundary with the hosting execution environment.
///
/// The host owns a flat key-addressed space of fixed-width slots, knows
/// which account invoked the current operation, and keeps an
/// order-preserving event log. Keys and slots are 512 bits wide, enough
/// for the contract's nested key derivation to keep its region tags
/// without wrapping. The host also wraps every invocation in an atomic
/// scope: when an operation returns an error, it discards all storage
/// writes and log records staged since the invocation began. The
/// contract never caches ledger state across invocations; everything
/// goes through this trait.
pub trait Host {
    /// Value stored at `key`, zero if the slot was never written.
    fn storage_get(&self, key: U512) -> U512;

    /// Write `value` at `key`, replacing any prior value.
    fn storage_set(&mut self, key: U512, value: U512);

    /// Account that invoked the current operation. Host-supplied, trusted.
    fn caller(&self) -> Address;

    /// Append a record to the event log. Records are durable once the
    /// invocation commits and discarded with it on abort.
    fn append_log(&mut self, topic: B256, payload: U256, indexed1: Address, indexed2: Address);
}
