use alloy_primitives::{Address, I256};
use host::Host;

use crate::errors::TokenError;

/// The externally callable surface of the ledger: one invocation per
/// call, atomic with respect to storage effects. An `Err` return is the
/// abort signal; the host discards everything the invocation staged.
///
/// The acting party for the three mutators is `e.caller()`, supplied by
/// the host.
pub trait TokenInterface {
    /// Write the total supply and credit it to the invoking account.
    /// No in-core guard against re-initialization; the deployment
    /// context decides who gets to call this.
    fn initialize<H: Host>(e: &mut H, supply: I256);

    fn total_supply<H: Host>(e: &H) -> I256;

    /// Balance of `account`, zero if never credited.
    fn balance_of<H: Host>(e: &H, account: Address) -> I256;

    /// Amount `spender` may still move out of `owner`'s balance, zero if
    /// never approved.
    fn allowance<H: Host>(e: &H, owner: Address, spender: Address) -> I256;

    /// Set the caller's allowance for `spender` to `amount`, replacing
    /// any prior value.
    fn approve<H: Host>(e: &mut H, spender: Address, amount: I256) -> Result<bool, TokenError>;

    /// Move `amount` from the caller's balance to `to`.
    fn transfer<H: Host>(e: &mut H, to: Address, amount: I256) -> Result<bool, TokenError>;

    /// Move `amount` from `from` to `to`, drawing down the caller's
    /// allowance from `from`.
    fn transfer_from<H: Host>(
        e: &mut H,
        from: Address,
        to: Address,
        amount: I256,
    ) -> Result<bool, TokenError>;
}
