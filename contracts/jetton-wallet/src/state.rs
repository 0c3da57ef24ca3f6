use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;

#[cw_serde]
pub struct Config {
    /// Holder; fixed at deploy time.
    pub owner: Addr,
    /// The sale contract that mints into this wallet.
    pub master: Addr,
    pub wallet_code_id: u64,
}

// ---- Storage keys ----

pub const CONFIG: Item<Config> = Item::new("config");
pub const BALANCE: Item<Uint128> = Item::new("balance");
