#![cfg(test)]

use alloy_primitives::{Address, I256};
use host::testutils::MemoryHost;

use crate::contract::Token;
use crate::interface::TokenInterface;

pub fn addr(byte: u8) -> Address {
    Address::repeat_byte(byte)
}

pub fn amt(value: i64) -> I256 {
    I256::try_from(value).unwrap()
}

pub(crate) struct Setup {
    pub(crate) env: MemoryHost,
    pub(crate) deployer: Address,
}

impl Default for Setup {
    // Fresh host with the full supply credited to the deployer.
    fn default() -> Self {
        let deployer = addr(0xA1);
        let mut env = MemoryHost::with_caller(deployer);
        Token::initialize(&mut env, amt(1_000_000));
        Setup { env, deployer }
    }
}
