use alloy_primitives::{b256, Address, B256, I256};
use host::Host;

// Pre-computed topic identifiers, the standard Transfer/Approval log
// topics so third-party indexers recognize the records.
pub const TRANSFER_TOPIC: B256 =
    b256!("ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef");
pub const APPROVAL_TOPIC: B256 =
    b256!("8c5be1e5ebec7d5bd14f71427d1e84f3dd0314c0f7b2291e5b200ac8c7c3b925");

// Emission must come after the operation's storage writes: the host rolls
// records and writes back together if the invocation aborts.

pub fn transfer_event<H: Host>(e: &mut H, from: Address, to: Address, value: I256) {
    e.append_log(TRANSFER_TOPIC, value.into_raw(), from, to);
}

pub fn approval_event<H: Host>(e: &mut H, owner: Address, spender: Address, allowance: I256) {
    e.append_log(APPROVAL_TOPIC, allowance.into_raw(), owner, spender);
}
