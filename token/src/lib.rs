mod allowance;
mod balance;
mod contract;
mod errors;
mod event;
mod interface;
mod storage_key;
mod testutils;

pub use crate::contract::Token;
pub use crate::errors::TokenError;
pub use crate::event::{APPROVAL_TOPIC, TRANSFER_TOPIC};
pub use crate::interface::TokenInterface;
