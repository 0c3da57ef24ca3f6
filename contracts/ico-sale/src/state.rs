use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    /// Upper bound on total_supply, enforced by mint and buy.
    pub max_supply: Uint128,
    /// Cleared by CloseMint; no new tokens afterwards.
    pub mintable: bool,
    /// Code of the per-holder wallet. Part of every wallet address.
    pub wallet_code_id: u64,
}

#[cw_serde]
pub struct Supply {
    /// All tokens ever minted, sale and admin mint alike.
    pub total_supply: Uint128,
    /// Tokens reported burned by wallets.
    pub total_burned: Uint128,
}

#[cw_serde]
pub struct Ico {
    /// True between SetupIco and FinalizeIco.
    pub active: bool,
    /// Native nano per whole token.
    pub price: Uint128,
    pub start_time: u64,
    pub end_time: u64,
    pub hard_cap: Uint128,
    pub tokens_sold: Uint128,
    /// Native value paid by buyers, held until finalize.
    pub funds_raised: Uint128,
}

impl Ico {
    pub fn is_ongoing(&self, now: u64) -> bool {
        self.start_time <= now && now < self.end_time
    }
}

impl Default for Ico {
    fn default() -> Self {
        Self {
            active: false,
            price: Uint128::zero(),
            start_time: 0,
            end_time: 0,
            hard_cap: Uint128::zero(),
            tokens_sold: Uint128::zero(),
            funds_raised: Uint128::zero(),
        }
    }
}

// ---- Storage keys ----

pub const CONFIG: Item<Config> = Item::new("config");
pub const SUPPLY: Item<Supply> = Item::new("supply");
pub const ICO: Item<Ico> = Item::new("ico");
