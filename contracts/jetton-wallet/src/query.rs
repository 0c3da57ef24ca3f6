use cosmwasm_std::{Deps, StdResult};

use crate::msg::WalletDataResponse;
use crate::state::{BALANCE, CONFIG};

pub fn query_wallet_data(deps: Deps) -> StdResult<WalletDataResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(WalletDataResponse {
        balance: BALANCE.load(deps.storage)?,
        owner: config.owner,
        master: config.master,
        wallet_code_id: config.wallet_code_id,
    })
}
