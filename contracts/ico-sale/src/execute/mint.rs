use cosmwasm_std::{Addr, Binary, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128};
use cw_utils::may_pay;
use jetton::{native_funds, InternalTransfer, WalletInstantiateMsg, GAS_CONSUMPTION, NATIVE_DENOM};

use crate::error::ContractError;
use crate::state::{Config, CONFIG, SUPPLY};

/// Owner: mint `amount` into `receiver`'s wallet.
/// The attached value travels with the credit and comes back to the sender as excess.
pub fn execute_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
    receiver: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let value = may_pay(&info, NATIVE_DENOM)?;
    if value < Uint128::new(GAS_CONSUMPTION) {
        return Err(ContractError::InsufficientFunds {
            need: GAS_CONSUMPTION.to_string(),
            have: value.to_string(),
        });
    }

    let receiver = deps.api.addr_validate(&receiver)?;
    let messages = mint_tokens(
        deps,
        &env,
        &config,
        &receiver,
        amount,
        value,
        &info.sender,
        Binary::default(),
    )?;

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", "mint")
        .add_attribute("receiver", receiver.to_string())
        .add_attribute("amount", amount.to_string()))
}

/// Books `amount` into total supply and builds the messages that deploy the
/// receiver's wallet (if absent) and credit it. `value` rides along with the credit.
#[allow(clippy::too_many_arguments)]
pub(crate) fn mint_tokens(
    deps: DepsMut,
    env: &Env,
    config: &Config,
    receiver: &Addr,
    amount: Uint128,
    value: Uint128,
    response_destination: &Addr,
    forward_payload: Binary,
) -> Result<Vec<CosmosMsg>, ContractError> {
    if !config.mintable {
        return Err(ContractError::MintingClosed);
    }
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let mut supply = SUPPLY.load(deps.storage)?;
    let new_supply = supply.total_supply.checked_add(amount)?;
    if new_supply > config.max_supply {
        return Err(ContractError::MaxSupplyExceeded {
            max_supply: config.max_supply.to_string(),
            supply: supply.total_supply.to_string(),
            requested: amount.to_string(),
        });
    }
    supply.total_supply = new_supply;
    SUPPLY.save(deps.storage, &supply)?;

    let init = WalletInstantiateMsg {
        owner: receiver.to_string(),
        master: env.contract.address.to_string(),
        wallet_code_id: config.wallet_code_id,
    };
    let wallet = init.address()?;

    let credit = InternalTransfer {
        query_id: 0,
        amount,
        from: env.contract.address.to_string(),
        response_destination: response_destination.to_string(),
        forward_ton_amount: Uint128::zero(),
        forward_payload,
    };

    Ok(vec![
        init.into_cosmos_msg()?,
        credit.into_cosmos_msg(wallet, native_funds(value))?,
    ])
}
