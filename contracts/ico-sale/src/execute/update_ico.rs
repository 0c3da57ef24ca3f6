use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::state::{CONFIG, ICO};

/// Owner: reprice and move the end of an active sale.
/// start_time and hard_cap stay as configured.
pub fn execute_update_ico(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    new_price: Uint128,
    new_end_time: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let mut ico = ICO.load(deps.storage)?;
    if !ico.active {
        return Err(ContractError::SaleNotActive);
    }

    if new_price.is_zero() {
        return Err(ContractError::InvalidConfiguration {
            reason: "price must be greater than zero".to_string(),
        });
    }
    if new_end_time <= ico.start_time {
        return Err(ContractError::InvalidConfiguration {
            reason: format!(
                "end_time {} must be after start_time {}",
                new_end_time, ico.start_time
            ),
        });
    }

    ico.price = new_price;
    ico.end_time = new_end_time;
    ICO.save(deps.storage, &ico)?;

    Ok(Response::new()
        .add_attribute("action", "update_ico")
        .add_attribute("price", new_price.to_string())
        .add_attribute("end_time", new_end_time.to_string()))
}
