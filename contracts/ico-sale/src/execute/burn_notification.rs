use cosmwasm_std::{BankMsg, DepsMut, Env, MessageInfo, Response};
use cw_utils::may_pay;
use jetton::{native_funds, wallet_address, BurnNotification, NATIVE_DENOM};

use crate::error::ContractError;
use crate::state::{CONFIG, SUPPLY};

/// Wallet hook: a holder burned tokens. Only the holder's own wallet may report it.
pub fn execute_burn_notification(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    notification: BurnNotification,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let holder = deps.api.addr_validate(&notification.sender)?;
    let wallet = wallet_address(config.wallet_code_id, &env.contract.address, &holder)?;
    if info.sender != wallet {
        return Err(ContractError::Unauthorized);
    }

    let mut supply = SUPPLY.load(deps.storage)?;
    supply.total_burned = supply.total_burned.checked_add(notification.amount)?;
    SUPPLY.save(deps.storage, &supply)?;

    let mut res = Response::new();
    let excess = may_pay(&info, NATIVE_DENOM)?;
    if !excess.is_zero() {
        let destination = deps.api.addr_validate(&notification.response_destination)?;
        res = res.add_message(BankMsg::Send {
            to_address: destination.to_string(),
            amount: native_funds(excess),
        });
    }

    Ok(res
        .add_attribute("action", "burn_notification")
        .add_attribute("holder", holder.to_string())
        .add_attribute("amount", notification.amount.to_string())
        .add_attribute("total_burned", supply.total_burned.to_string()))
}
