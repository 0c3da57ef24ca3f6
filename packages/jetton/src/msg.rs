use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, to_json_vec, Addr, Binary, Coin, CosmosMsg, StdResult, Uint128, WasmMsg,
};

use crate::address::contract_address;

/// Init message of a jetton wallet. Its bytes also fix the wallet address.
#[cw_serde]
pub struct WalletInstantiateMsg {
    pub owner: String,
    pub master: String,
    pub wallet_code_id: u64,
}

impl WalletInstantiateMsg {
    pub fn address(&self) -> StdResult<Addr> {
        Ok(contract_address(self.wallet_code_id, &to_json_vec(self)?))
    }

    /// Deploys the wallet if it does not exist yet. Carries no value.
    pub fn into_cosmos_msg(self) -> StdResult<CosmosMsg> {
        let label = format!("jetton-wallet:{}", self.owner);
        Ok(WasmMsg::Instantiate {
            admin: None,
            code_id: self.wallet_code_id,
            msg: to_json_binary(&self)?,
            funds: vec![],
            label,
        }
        .into())
    }
}

/// Credit sent to a wallet by the sale contract or by another wallet.
#[cw_serde]
pub struct InternalTransfer {
    pub query_id: u64,
    pub amount: Uint128,
    /// Owner of the debited wallet, or the sale contract when minting.
    pub from: String,
    pub response_destination: String,
    pub forward_ton_amount: Uint128,
    pub forward_payload: Binary,
}

impl InternalTransfer {
    pub fn into_binary(self) -> StdResult<Binary> {
        to_json_binary(&WalletHookMsg::InternalTransfer(self))
    }

    pub fn into_cosmos_msg<T: Into<String>>(
        self,
        contract_addr: T,
        funds: Vec<Coin>,
    ) -> StdResult<CosmosMsg> {
        Ok(WasmMsg::Execute {
            contract_addr: contract_addr.into(),
            msg: self.into_binary()?,
            funds,
        }
        .into())
    }
}

/// Sent by a wallet to the sale contract after burning.
#[cw_serde]
pub struct BurnNotification {
    pub query_id: u64,
    pub amount: Uint128,
    /// Owner of the wallet that burned.
    pub sender: String,
    pub response_destination: String,
}

impl BurnNotification {
    pub fn into_binary(self) -> StdResult<Binary> {
        to_json_binary(&MasterHookMsg::BurnNotification(self))
    }

    pub fn into_cosmos_msg<T: Into<String>>(
        self,
        contract_addr: T,
        funds: Vec<Coin>,
    ) -> StdResult<CosmosMsg> {
        Ok(WasmMsg::Execute {
            contract_addr: contract_addr.into(),
            msg: self.into_binary()?,
            funds,
        }
        .into())
    }
}

/// Sent to the owner of a credited wallet when the transfer asked to forward value.
#[cw_serde]
pub struct TransferNotification {
    pub query_id: u64,
    pub amount: Uint128,
    pub from: String,
    pub forward_payload: Binary,
}

impl TransferNotification {
    pub fn into_binary(self) -> StdResult<Binary> {
        to_json_binary(&OwnerHookMsg::TransferNotification(self))
    }

    pub fn into_cosmos_msg<T: Into<String>>(
        self,
        contract_addr: T,
        funds: Vec<Coin>,
    ) -> StdResult<CosmosMsg> {
        Ok(WasmMsg::Execute {
            contract_addr: contract_addr.into(),
            msg: self.into_binary()?,
            funds,
        }
        .into())
    }
}

/// Envelope a wallet expects for credits.
#[cw_serde]
pub enum WalletHookMsg {
    InternalTransfer(InternalTransfer),
}

/// Envelope the sale contract expects for burn reconciliation.
#[cw_serde]
pub enum MasterHookMsg {
    BurnNotification(BurnNotification),
}

/// Envelope a wallet owner receives when value is forwarded to it.
#[cw_serde]
pub enum OwnerHookMsg {
    TransferNotification(TransferNotification),
}

/// Handed to a contract when a message it sent failed and came back.
#[cw_serde]
pub struct Bounced {
    /// Address the failed message was sent to.
    pub to: Addr,
    /// The original message body.
    pub body: Binary,
    /// Native value returned with the bounce.
    pub value: Uint128,
}
