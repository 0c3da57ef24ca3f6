use cosmwasm_std::{Deps, Env, StdResult};
use jetton::wallet_address;

use crate::msg::{IcoInfoResponse, JettonDataResponse, WalletAddressResponse};
use crate::state::{CONFIG, ICO, SUPPLY};

pub fn query_ico_info(deps: Deps, env: Env) -> StdResult<IcoInfoResponse> {
    let ico = ICO.load(deps.storage)?;
    Ok(IcoInfoResponse {
        active: ico.active,
        price: ico.price,
        start_time: ico.start_time,
        end_time: ico.end_time,
        hard_cap: ico.hard_cap,
        tokens_sold: ico.tokens_sold,
        is_ongoing: ico.is_ongoing(env.block.time.seconds()),
    })
}

pub fn query_jetton_data(deps: Deps) -> StdResult<JettonDataResponse> {
    let config = CONFIG.load(deps.storage)?;
    let supply = SUPPLY.load(deps.storage)?;
    Ok(JettonDataResponse {
        total_supply: supply.total_supply,
        total_burned: supply.total_burned,
        max_supply: config.max_supply,
        mintable: config.mintable,
        owner: config.owner,
        wallet_code_id: config.wallet_code_id,
    })
}

/// Pure derivation; the wallet need not exist.
pub fn query_wallet_address(deps: Deps, env: Env, owner: String) -> StdResult<WalletAddressResponse> {
    let config = CONFIG.load(deps.storage)?;
    let owner = deps.api.addr_validate(&owner)?;
    Ok(WalletAddressResponse {
        wallet_address: wallet_address(config.wallet_code_id, &env.contract.address, &owner)?,
    })
}
