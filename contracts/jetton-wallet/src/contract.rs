use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;
use jetton::Bounced;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{Config, BALANCE, CONFIG};

const CONTRACT_NAME: &str = "crates.io:jetton-wallet";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Deployed by the master or a sibling wallet. The init message fixes the
/// address, so there is nothing to authorize here.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        owner: deps.api.addr_validate(&msg.owner)?,
        master: deps.api.addr_validate(&msg.master)?,
        wallet_code_id: msg.wallet_code_id,
    };
    CONFIG.save(deps.storage, &config)?;
    BALANCE.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner.to_string())
        .add_attribute("master", config.master.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Transfer {
            query_id,
            amount,
            destination,
            response_destination,
            custom_payload: _,
            forward_ton_amount,
            forward_payload,
        } => crate::execute::transfer::execute_transfer(
            deps,
            env,
            info,
            query_id,
            amount,
            destination,
            response_destination,
            forward_ton_amount,
            forward_payload,
        ),
        ExecuteMsg::InternalTransfer(credit) => {
            crate::execute::internal_transfer::execute_internal_transfer(deps, env, info, credit)
        }
        ExecuteMsg::Burn {
            query_id,
            amount,
            response_destination,
            custom_payload: _,
        } => crate::execute::burn::execute_burn(deps, env, info, query_id, amount, response_destination),
    }
}

/// A transfer or burn notification sent from here failed; give the tokens back.
pub fn bounce(deps: DepsMut, env: Env, msg: Bounced) -> Result<Response, ContractError> {
    crate::execute::bounce::execute_bounce(deps, env, msg)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::WalletData {} => to_json_binary(&crate::query::query_wallet_data(deps)?),
    }
}
