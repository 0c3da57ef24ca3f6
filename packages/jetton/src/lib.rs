use cosmwasm_std::{Coin, Uint128};

mod address;
mod msg;

pub use crate::address::{contract_address, wallet_address, CONTRACT_ADDR_PREFIX};
pub use crate::msg::{
    Bounced, BurnNotification, InternalTransfer, MasterHookMsg, OwnerHookMsg,
    TransferNotification, WalletHookMsg, WalletInstantiateMsg,
};

/// Denom of the native coin attached to messages.
pub const NATIVE_DENOM: &str = "nanoton";

/// One whole token in base units (9 decimals).
pub const ONE_TOKEN: u128 = 1_000_000_000;

/// Native value a contract keeps aside to pay for the next hop of a cascade.
pub const GAS_CONSUMPTION: u128 = 15_000_000;

/// Funds vector carrying `amount` of the native coin; empty when zero.
pub fn native_funds(amount: Uint128) -> Vec<Coin> {
    if amount.is_zero() {
        vec![]
    } else {
        vec![Coin {
            denom: NATIVE_DENOM.to_string(),
            amount,
        }]
    }
}
