use alloy_primitives::{Address, I256, U256, U512};
use host::Host;

use crate::errors::TokenError;
use crate::storage_key::{balance_key, TOTAL_SUPPLY_KEY};

// Amounts occupy the low 256 bits of a slot, as their raw
// two's-complement word.

pub fn write_total_supply<H: Host>(e: &mut H, supply: I256) {
    e.storage_set(TOTAL_SUPPLY_KEY, U512::from(supply.into_raw()));
}

pub fn read_total_supply<H: Host>(e: &H) -> I256 {
    I256::from_raw(e.storage_get(TOTAL_SUPPLY_KEY).wrapping_to::<U256>())
}

fn write_balance<H: Host>(e: &mut H, addr: Address, amount: I256) {
    e.storage_set(balance_key(addr), U512::from(amount.into_raw()));
}

pub fn read_balance<H: Host>(e: &H, addr: Address) -> I256 {
    I256::from_raw(e.storage_get(balance_key(addr)).wrapping_to::<U256>())
}

/// Unchecked credit. The credited slot can never exceed the total supply,
/// which already fits the amount width, so there is no overflow guard
/// here.
pub fn receive_balance<H: Host>(e: &mut H, addr: Address, amount: I256) {
    let balance = read_balance(e, addr);
    write_balance(e, addr, balance + amount);
}

pub fn spend_balance<H: Host>(e: &mut H, addr: Address, amount: I256) -> Result<(), TokenError> {
    let balance = read_balance(e, addr);
    if balance < amount {
        return Err(TokenError::PreconditionViolation);
    }
    write_balance(e, addr, balance - amount);
    Ok(())
}
