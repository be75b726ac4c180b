use alloy_primitives::{Address, I256, U256, U512};
use host::Host;

use crate::errors::TokenError;
use crate::storage_key::allowance_key;

pub fn read_allowance<H: Host>(e: &H, owner: Address, spender: Address) -> I256 {
    I256::from_raw(e.storage_get(allowance_key(owner, spender)).wrapping_to::<U256>())
}

/// Absolute overwrite of any prior value.
pub fn write_allowance<H: Host>(e: &mut H, owner: Address, spender: Address, amount: I256) {
    e.storage_set(allowance_key(owner, spender), U512::from(amount.into_raw()));
}

pub fn spend_allowance<H: Host>(
    e: &mut H,
    owner: Address,
    spender: Address,
    amount: I256,
) -> Result<(), TokenError> {
    let allowed = read_allowance(e, owner, spender);
    if allowed < amount {
        return Err(TokenError::PreconditionViolation);
    }
    if amount > I256::ZERO {
        write_allowance(e, owner, spender, allowed - amount);
    }
    Ok(())
}
