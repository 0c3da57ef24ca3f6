use cosmwasm_std::{Binary, DepsMut, Env, MessageInfo, Response, Uint128};
use cw_utils::may_pay;
use jetton::{native_funds, InternalTransfer, WalletInstantiateMsg, GAS_CONSUMPTION, NATIVE_DENOM};

use crate::error::ContractError;
use crate::state::{BALANCE, CONFIG};

/// Owner: debit `amount` and credit it to `destination`'s wallet, deploying it
/// if needed. The whole attached value travels with the credit.
#[allow(clippy::too_many_arguments)]
pub fn execute_transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    query_id: u64,
    amount: Uint128,
    destination: String,
    response_destination: String,
    forward_ton_amount: Uint128,
    forward_payload: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let value = may_pay(&info, NATIVE_DENOM)?;
    // one hop to the receiving wallet, one for the excess
    let need = forward_ton_amount.checked_add(Uint128::new(2 * GAS_CONSUMPTION))?;
    if value < need {
        return Err(ContractError::InsufficientValue {
            need: need.to_string(),
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

    let destination = deps.api.addr_validate(&destination)?;
    let response_destination = deps.api.addr_validate(&response_destination)?;

    let init = WalletInstantiateMsg {
        owner: destination.to_string(),
        master: config.master.to_string(),
        wallet_code_id: config.wallet_code_id,
    };
    let receiver_wallet = init.address()?;
    let credit = InternalTransfer {
        query_id,
        amount,
        from: config.owner.to_string(),
        response_destination: response_destination.to_string(),
        forward_ton_amount,
        forward_payload,
    };

    Ok(Response::new()
        .add_message(init.into_cosmos_msg()?)
        .add_message(credit.into_cosmos_msg(receiver_wallet.as_str(), native_funds(value))?)
        .add_attribute("action", "transfer")
        .add_attribute("from", config.owner.to_string())
        .add_attribute("to", destination.to_string())
        .add_attribute("amount", amount.to_string())
        .add_attribute("balance", balance.to_string())
        .add_attribute("wallet", env.contract.address.to_string()))
}
