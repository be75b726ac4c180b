#![cfg(test)]

use alloy_primitives::{Address, I256};
use host::testutils::MemoryHost;
use token_contract::{Token, TokenInterface};

pub fn addr(byte: u8) -> Address {
    Address::repeat_byte(byte)
}

pub fn amt(value: i64) -> I256 {
    I256::try_from(value).unwrap()
}

/// Ledger conservation: the balances of `accounts` must add up to the
/// total supply. Callers pass every account that ever took part.
pub fn assert_conserved(env: &MemoryHost, accounts: &[Address]) {
    let sum = accounts
        .iter()
        .fold(I256::ZERO, |acc, a| acc + Token::balance_of(env, *a));
    assert_eq!(sum, Token::total_supply(env));
}

pub fn assert_non_negative(env: &MemoryHost, accounts: &[Address]) {
    for a in accounts {
        assert!(Token::balance_of(env, *a) >= I256::ZERO);
        for s in accounts {
            assert!(Token::allowance(env, *a, *s) >= I256::ZERO);
        }
    }
}

pub(crate) struct Setup {
    pub(crate) env: MemoryHost,
    pub(crate) accounts: Vec<Address>,
}

impl Setup {
    /// Fresh ledger with `supply` credited to accounts[0].
    pub(crate) fn new(supply: i64) -> Self {
        let accounts = vec![addr(0xA1), addr(0xB2), addr(0xC3), addr(0xD4)];
        let mut env = MemoryHost::with_caller(accounts[0]);
        Token::initialize(&mut env, amt(supply));
        Setup { env, accounts }
    }
}
