use cosmwasm_std::{to_json_binary, DepsMut, Env, MessageInfo, Response, Uint128};
use cw_utils::may_pay;
use jetton::{GAS_CONSUMPTION, NATIVE_DENOM, ONE_TOKEN};

use crate::error::ContractError;
use crate::execute::mint::mint_tokens;
use crate::msg::PurchaseReceipt;
use crate::state::{CONFIG, ICO};

/// Anyone: swap the attached native coin for tokens at the current price.
///
/// GAS_CONSUMPTION of the value is kept to carry the credit to the buyer's
/// wallet; the rest is the payment: tokens = payment * ONE_TOKEN / price.
pub fn execute_buy(mut deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut ico = ICO.load(deps.storage)?;

    if !ico.active {
        return Err(ContractError::SaleNotActive);
    }
    if !config.mintable {
        return Err(ContractError::MintingClosed);
    }

    let now = env.block.time.seconds();
    if !ico.is_ongoing(now) {
        return Err(ContractError::SaleNotOngoing {
            now,
            start_time: ico.start_time,
            end_time: ico.end_time,
        });
    }

    let value = may_pay(&info, NATIVE_DENOM)?;
    let reserve = Uint128::new(GAS_CONSUMPTION);
    // smallest payment that buys one base unit
    let min_payment = ico
        .price
        .checked_add(Uint128::new(ONE_TOKEN - 1))?
        .checked_div(Uint128::new(ONE_TOKEN))?;
    let need = reserve.checked_add(min_payment)?;
    if value < need {
        return Err(ContractError::InsufficientFunds {
            need: need.to_string(),
            have: value.to_string(),
        });
    }

    let payment = value.checked_sub(reserve)?;
    let tokens = payment
        .checked_mul(Uint128::new(ONE_TOKEN))?
        .checked_div(ico.price)?;

    let sold = ico.tokens_sold.checked_add(tokens)?;
    if sold > ico.hard_cap {
        return Err(ContractError::CapExceeded {
            hard_cap: ico.hard_cap.to_string(),
            sold: ico.tokens_sold.to_string(),
            requested: tokens.to_string(),
        });
    }

    let messages = mint_tokens(
        deps.branch(),
        &env,
        &config,
        &info.sender,
        tokens,
        reserve,
        &info.sender,
        to_json_binary(&PurchaseReceipt { payment })?,
    )?;

    ico.tokens_sold = sold;
    ico.funds_raised = ico.funds_raised.checked_add(payment)?;
    ICO.save(deps.storage, &ico)?;

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", "buy")
        .add_attribute("buyer", info.sender.to_string())
        .add_attribute("paid", payment.to_string())
        .add_attribute("tokens", tokens.to_string())
        .add_attribute("tokens_sold", sold.to_string()))
}
