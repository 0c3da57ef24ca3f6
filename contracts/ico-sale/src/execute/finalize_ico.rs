use cosmwasm_std::{BankMsg, DepsMut, Env, MessageInfo, Response, Uint128};
use jetton::native_funds;

use crate::error::ContractError;
use crate::state::{CONFIG, ICO};

/// Owner: close the sale and pay the raised funds to the owner.
///
/// Without `emergency` the sale must have run out its window or sold out.
/// Finalizing a closed sale is a no-op.
pub fn execute_finalize_ico(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    emergency: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let mut ico = ICO.load(deps.storage)?;
    if !ico.active {
        return Ok(Response::new()
            .add_attribute("action", "finalize_ico")
            .add_attribute("already_finalized", "true"));
    }

    let now = env.block.time.seconds();
    let ended = now >= ico.end_time || ico.tokens_sold >= ico.hard_cap;
    if !emergency && !ended {
        return Err(ContractError::SaleNotEnded {
            end_time: ico.end_time,
        });
    }

    let payout = ico.funds_raised;
    ico.active = false;
    ico.funds_raised = Uint128::zero();
    ICO.save(deps.storage, &ico)?;

    let mut res = Response::new();
    if !payout.is_zero() {
        res = res.add_message(BankMsg::Send {
            to_address: config.owner.to_string(),
            amount: native_funds(payout),
        });
    }

    Ok(res
        .add_attribute("action", "finalize_ico")
        .add_attribute("emergency", emergency.to_string())
        .add_attribute("tokens_sold", ico.tokens_sold.to_string())
        .add_attribute("payout", payout.to_string()))
}
