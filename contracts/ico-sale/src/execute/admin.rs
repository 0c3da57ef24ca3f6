use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::CONFIG;

/// Owner: no more minting, neither by Mint nor by Buy.
pub fn execute_close_mint(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    config.mintable = false;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "close_mint"))
}

pub fn execute_change_owner(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    config.owner = deps.api.addr_validate(&new_owner)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "change_owner")
        .add_attribute("previous_owner", info.sender.to_string())
        .add_attribute("new_owner", config.owner.to_string()))
}
