use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;
use jetton::Bounced;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{Config, Ico, Supply, CONFIG, ICO, SUPPLY};

const CONTRACT_NAME: &str = "crates.io:ico-sale";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.max_supply.is_zero() {
        return Err(ContractError::InvalidConfiguration {
            reason: "max_supply must be greater than zero".to_string(),
        });
    }

    let config = Config {
        owner: deps.api.addr_validate(&msg.owner)?,
        max_supply: msg.max_supply,
        mintable: true,
        wallet_code_id: msg.wallet_code_id,
    };

    CONFIG.save(deps.storage, &config)?;
    SUPPLY.save(
        deps.storage,
        &Supply {
            total_supply: Uint128::zero(),
            total_burned: Uint128::zero(),
        },
    )?;
    ICO.save(deps.storage, &Ico::default())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner.to_string())
        .add_attribute("max_supply", config.max_supply.to_string())
        .add_attribute("wallet_code_id", config.wallet_code_id.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetupIco {
            price,
            start_time,
            end_time,
            hard_cap,
        } => crate::execute::setup_ico::execute_setup_ico(
            deps, env, info, price, start_time, end_time, hard_cap,
        ),
        ExecuteMsg::UpdateIco {
            new_price,
            new_end_time,
        } => crate::execute::update_ico::execute_update_ico(deps, env, info, new_price, new_end_time),
        ExecuteMsg::FinalizeIco { emergency } => {
            crate::execute::finalize_ico::execute_finalize_ico(deps, env, info, emergency)
        }
        ExecuteMsg::Mint { amount, receiver } => {
            crate::execute::mint::execute_mint(deps, env, info, amount, receiver)
        }
        ExecuteMsg::Buy {} => crate::execute::buy::execute_buy(deps, env, info),
        ExecuteMsg::BurnNotification(notification) => {
            crate::execute::burn_notification::execute_burn_notification(
                deps,
                env,
                info,
                notification,
            )
        }
        ExecuteMsg::CloseMint {} => crate::execute::admin::execute_close_mint(deps, info),
        ExecuteMsg::ChangeOwner { new_owner } => {
            crate::execute::admin::execute_change_owner(deps, info, new_owner)
        }
    }
}

/// Bare value transfer with no body: a purchase.
pub fn receive(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    crate::execute::buy::execute_buy(deps, env, info)
}

/// A message this contract sent failed at its destination.
pub fn bounce(deps: DepsMut, env: Env, msg: Bounced) -> Result<Response, ContractError> {
    crate::execute::bounce::execute_bounce(deps, env, msg)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::IcoInfo {} => to_json_binary(&crate::query::query_ico_info(deps, env)?),
        QueryMsg::JettonData {} => to_json_binary(&crate::query::query_jetton_data(deps)?),
        QueryMsg::WalletAddress { owner } => {
            to_json_binary(&crate::query::query_wallet_address(deps, env, owner)?)
        }
    }
}
