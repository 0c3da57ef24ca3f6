use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::state::{CONFIG, ICO};

pub fn execute_setup_ico(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    price: Uint128,
    start_time: u64,
    end_time: u64,
    hard_cap: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    if price.is_zero() {
        return Err(ContractError::InvalidConfiguration {
            reason: "price must be greater than zero".to_string(),
        });
    }
    if hard_cap.is_zero() {
        return Err(ContractError::InvalidConfiguration {
            reason: "hard_cap must be greater than zero".to_string(),
        });
    }
    if start_time >= end_time {
        return Err(ContractError::InvalidConfiguration {
            reason: format!("start_time {} must be before end_time {}", start_time, end_time),
        });
    }

    // Counters (tokens_sold, funds_raised) carry over a re-setup.
    let mut ico = ICO.load(deps.storage)?;
    if hard_cap < ico.tokens_sold {
        return Err(ContractError::InvalidConfiguration {
            reason: format!("hard_cap {} is below tokens already sold {}", hard_cap, ico.tokens_sold),
        });
    }
    ico.active = true;
    ico.price = price;
    ico.start_time = start_time;
    ico.end_time = end_time;
    ico.hard_cap = hard_cap;
    ICO.save(deps.storage, &ico)?;

    Ok(Response::new()
        .add_attribute("action", "setup_ico")
        .add_attribute("price", price.to_string())
        .add_attribute("start_time", start_time.to_string())
        .add_attribute("end_time", end_time.to_string())
        .add_attribute("hard_cap", hard_cap.to_string()))
}
