use cosmwasm_std::{BankMsg, DepsMut, Env, MessageInfo, Response};
use cw_utils::may_pay;
use jetton::{native_funds, wallet_address, InternalTransfer, TransferNotification, NATIVE_DENOM};

use crate::error::ContractError;
use crate::state::{BALANCE, CONFIG};

/// Credit from the master (mint) or from the wallet of `credit.from` (transfer).
///
/// `forward_ton_amount` of the attached value goes to the owner with a
/// TransferNotification; what is left is returned to `response_destination`.
pub fn execute_internal_transfer(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    credit: InternalTransfer,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if info.sender != config.master {
        let from = deps.api.addr_validate(&credit.from)?;
        let sibling = wallet_address(config.wallet_code_id, &config.master, &from)?;
        if info.sender != sibling {
            return Err(ContractError::Unauthorized);
        }
    }

    let value = may_pay(&info, NATIVE_DENOM)?;
    if value < credit.forward_ton_amount {
        return Err(ContractError::InsufficientValue {
            need: credit.forward_ton_amount.to_string(),
            have: value.to_string(),
        });
    }

    let balance = BALANCE.load(deps.storage)?.checked_add(credit.amount)?;
    BALANCE.save(deps.storage, &balance)?;

    let mut res = Response::new();
    if !credit.forward_ton_amount.is_zero() {
        let notification = TransferNotification {
            query_id: credit.query_id,
            amount: credit.amount,
            from: credit.from.clone(),
            forward_payload: credit.forward_payload.clone(),
        };
        res = res.add_message(
            notification.into_cosmos_msg(config.owner.as_str(), native_funds(credit.forward_ton_amount))?,
        );
    }

    let excess = value.checked_sub(credit.forward_ton_amount)?;
    if !excess.is_zero() {
        let destination = deps.api.addr_validate(&credit.response_destination)?;
        res = res.add_message(BankMsg::Send {
            to_address: destination.to_string(),
            amount: native_funds(excess),
        });
    }

    Ok(res
        .add_attribute("action", "internal_transfer")
        .add_attribute("from", credit.from)
        .add_attribute("amount", credit.amount.to_string())
        .add_attribute("balance", balance.to_string())
        .add_attribute("excess", excess.to_string()))
}
