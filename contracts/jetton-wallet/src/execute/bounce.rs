use cosmwasm_std::{from_json, DepsMut, Env, Response, Uint128};
use jetton::{Bounced, MasterHookMsg, WalletHookMsg};

use crate::error::ContractError;
use crate::state::BALANCE;

/// Re-credit tokens whose outgoing credit or burn notification failed.
pub fn execute_bounce(deps: DepsMut, _env: Env, msg: Bounced) -> Result<Response, ContractError> {
    let refund = if let Ok(WalletHookMsg::InternalTransfer(credit)) = from_json(&msg.body) {
        credit.amount
    } else if let Ok(MasterHookMsg::BurnNotification(burn)) = from_json(&msg.body) {
        burn.amount
    } else {
        Uint128::zero()
    };

    let res = Response::new()
        .add_attribute("action", "bounce")
        .add_attribute("from", msg.to.to_string())
        .add_attribute("value", msg.value.to_string());
    if refund.is_zero() {
        return Ok(res);
    }

    let balance = BALANCE.load(deps.storage)?.checked_add(refund)?;
    BALANCE.save(deps.storage, &balance)?;

    Ok(res
        .add_attribute("refund", refund.to_string())
        .add_attribute("balance", balance.to_string()))
}
