use alloy_primitives::{Address, I256};
use host::Host;

use crate::allowance::{read_allowance, spend_allowance, write_allowance};
use crate::balance::{
    read_balance, read_total_supply, receive_balance, spend_balance, write_total_supply,
};
use crate::errors::TokenError;
use crate::event::{approval_event, transfer_event};
use crate::interface::TokenInterface;

fn check_nonnegative_amount(amount: I256) -> Result<(), TokenError> {
    if amount < I256::ZERO {
        return Err(TokenError::PreconditionViolation);
    }
    Ok(())
}

pub struct Token;

// Precondition evaluation order is fixed per operation: amount sign,
// then balance sufficiency, then allowance sufficiency. Every check runs
// before the first storage write of the operation, so an abort never
// follows a write.
impl TokenInterface for Token {
    fn initialize<H: Host>(e: &mut H, supply: I256) {
        let deployer = e.caller();
        write_total_supply(e, supply);
        receive_balance(e, deployer, supply);
    }

    fn total_supply<H: Host>(e: &H) -> I256 {
        read_total_supply(e)
    }

    fn balance_of<H: Host>(e: &H, account: Address) -> I256 {
        read_balance(e, account)
    }

    fn allowance<H: Host>(e: &H, owner: Address, spender: Address) -> I256 {
        read_allowance(e, owner, spender)
    }

    fn approve<H: Host>(e: &mut H, spender: Address, amount: I256) -> Result<bool, TokenError> {
        check_nonnegative_amount(amount)?;

        let owner = e.caller();
        write_allowance(e, owner, spender, amount);
        approval_event(e, owner, spender, amount);
        Ok(true)
    }

    fn transfer<H: Host>(e: &mut H, to: Address, amount: I256) -> Result<bool, TokenError> {
        check_nonnegative_amount(amount)?;

        let from = e.caller();
        spend_balance(e, from, amount)?;
        receive_balance(e, to, amount);
        transfer_event(e, from, to, amount);
        Ok(true)
    }

    fn transfer_from<H: Host>(
        e: &mut H,
        from: Address,
        to: Address,
        amount: I256,
    ) -> Result<bool, TokenError> {
        check_nonnegative_amount(amount)?;

        let spender = e.caller();
        // Balance sufficiency is checked ahead of the allowance so the
        // allowance decrement is never staged before every gate has
        // passed.
        if read_balance(e, from) < amount {
            return Err(TokenError::PreconditionViolation);
        }
        spend_allowance(e, from, spender, amount)?;
        spend_balance(e, from, amount)?;
        receive_balance(e, to, amount);
        transfer_event(e, from, to, amount);
        Ok(true)
    }
}
