use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};
use cw_utils::may_pay;
use jetton::{native_funds, BurnNotification, GAS_CONSUMPTION, NATIVE_DENOM};

use crate::error::ContractError;
use crate::state::{BALANCE, CONFIG};

/// Owner: destroy `amount` and tell the master, which returns the excess value.
pub fn execute_burn(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    query_id: u64,
    amount: Uint128,
    response_destination: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let value = may_pay(&info, NATIVE_DENOM)?;
    if value < Uint128::new(GAS_CONSUMPTION) {
        return Err(ContractError::InsufficientValue {
            need: GAS_CONSUMPTION.to_string(),
            have: value.to_string(),
        });
    }

    let balance = BALANCE.load(deps.storage)?;
    if amount > balance {
        return Err(ContractError::InsufficientBalance {
            balance: balance.to_string(),
            amount: amount.to_string(),
        });
    }
    let balance = balance.checked_sub(amount)?;
    BALANCE.save(deps.storage, &balance)?;

    let response_destination = deps.api.addr_validate(&response_destination)?;
    let notification = BurnNotification {
        query_id,
        amount,
        sender: config.owner.to_string(),
        response_destination: response_destination.to_string(),
    };

    Ok(Response::new()
        .add_message(notification.into_cosmos_msg(config.master.as_str(), native_funds(value))?)
        .add_attribute("action", "burn")
        .add_attribute("owner", config.owner.to_string())
        .add_attribute("amount", amount.to_string())
        .add_attribute("balance", balance.to_string()))
}
