use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};
use jetton::BurnNotification;

#[cw_serde]
pub struct InstantiateMsg {
    /// Administrator of the sale; gates configuration and minting.
    pub owner: String,
    /// Hard ceiling on total supply, in token base units.
    pub max_supply: Uint128,
    /// Stored code of the jetton wallet contract.
    pub wallet_code_id: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Owner: open (or reopen) the sale with a full configuration.
    SetupIco {
        price: Uint128,
        start_time: u64,
        end_time: u64,
        hard_cap: Uint128,
    },

    /// Owner: change price and end time of the active sale
    UpdateIco {
        new_price: Uint128,
        new_end_time: u64,
    },

    /// Owner: close the sale. `emergency` skips the end-of-sale check.
    FinalizeIco { emergency: bool },

    /// Owner: mint `amount` into the receiver's wallet
    Mint { amount: Uint128, receiver: String },

    /// Buy tokens with the attached native coin.
    /// A bare value transfer does the same.
    Buy {},

    /// Wallet hook: reconcile a burn
    BurnNotification(BurnNotification),

    /// Owner: stop all future minting
    CloseMint {},

    /// Owner: hand over administration
    ChangeOwner { new_owner: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(IcoInfoResponse)]
    IcoInfo {},

    #[returns(JettonDataResponse)]
    JettonData {},

    /// Address of the holder's wallet, deployed or not
    #[returns(WalletAddressResponse)]
    WalletAddress { owner: String },
}

// ---- Response types ----

#[cw_serde]
pub struct IcoInfoResponse {
    pub active: bool,
    pub price: Uint128,
    pub start_time: u64,
    pub end_time: u64,
    pub hard_cap: Uint128,
    pub tokens_sold: Uint128,
    /// Block time inside [start_time, end_time), whatever `active` says
    pub is_ongoing: bool,
}

#[cw_serde]
pub struct JettonDataResponse {
    pub total_supply: Uint128,
    pub total_burned: Uint128,
    pub max_supply: Uint128,
    pub mintable: bool,
    pub owner: Addr,
    pub wallet_code_id: u64,
}

#[cw_serde]
pub struct WalletAddressResponse {
    pub wallet_address: Addr,
}

// ---- Wire payloads ----

/// Rides in `forward_payload` of a purchase credit so a bounce can be
/// unwound: `payment` goes back to the buyer.
#[cw_serde]
pub struct PurchaseReceipt {
    pub payment: Uint128,
}
