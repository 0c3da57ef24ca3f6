use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};
use jetton::InternalTransfer;

pub use jetton::WalletInstantiateMsg as InstantiateMsg;

#[cw_serde]
pub enum ExecuteMsg {
    /// Owner: move `amount` to the wallet of another holder.
    Transfer {
        query_id: u64,
        amount: Uint128,
        /// Owner of the receiving wallet.
        #[serde(rename = "sender")]
        destination: String,
        response_destination: String,
        custom_payload: Option<Binary>,
        forward_ton_amount: Uint128,
        forward_payload: Binary,
    },

    /// Credit from the master or from a sibling wallet
    InternalTransfer(InternalTransfer),

    /// Owner: destroy `amount` and report it to the master
    Burn {
        query_id: u64,
        amount: Uint128,
        response_destination: String,
        custom_payload: Option<Binary>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(WalletDataResponse)]
    WalletData {},
}

// ---- Response types ----

#[cw_serde]
pub struct WalletDataResponse {
    pub balance: Uint128,
    pub owner: Addr,
    pub master: Addr,
    pub wallet_code_id: u64,
}
