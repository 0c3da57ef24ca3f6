use cosmwasm_std::{from_json, BankMsg, DepsMut, Env, Response};
use jetton::{native_funds, Bounced, WalletHookMsg};

use crate::error::ContractError;
use crate::msg::PurchaseReceipt;
use crate::state::{ICO, SUPPLY};

/// A credit we sent to a wallet failed; those tokens were never minted.
/// For a purchase the sale counters are unwound and the buyer gets the
/// payment back along with the returned value.
/// Anything else coming back just returns its value.
pub fn execute_bounce(deps: DepsMut, env: Env, msg: Bounced) -> Result<Response, ContractError> {
    let res = Response::new()
        .add_attribute("action", "bounce")
        .add_attribute("from", msg.to.to_string())
        .add_attribute("value", msg.value.to_string());

    let Ok(WalletHookMsg::InternalTransfer(credit)) = from_json::<WalletHookMsg>(&msg.body) else {
        return Ok(res);
    };
    if credit.from != env.contract.address.as_str() {
        return Ok(res);
    }

    let mut supply = SUPPLY.load(deps.storage)?;
    supply.total_supply = supply.total_supply.checked_sub(credit.amount)?;
    SUPPLY.save(deps.storage, &supply)?;

    let res = res
        .add_attribute("reverted_mint", credit.amount.to_string())
        .add_attribute("total_supply", supply.total_supply.to_string());

    // admin mints carry an empty payload
    let Ok(receipt) = from_json::<PurchaseReceipt>(&credit.forward_payload) else {
        return Ok(res);
    };

    let mut ico = ICO.load(deps.storage)?;
    ico.tokens_sold = ico.tokens_sold.checked_sub(credit.amount)?;
    // raised funds may already have been paid out by finalize
    let payment = receipt.payment.min(ico.funds_raised);
    ico.funds_raised = ico.funds_raised.checked_sub(payment)?;
    ICO.save(deps.storage, &ico)?;

    let refund = payment.checked_add(msg.value)?;
    let buyer = deps.api.addr_validate(&credit.response_destination)?;
    let res = res
        .add_attribute("reverted_purchase", credit.amount.to_string())
        .add_attribute("refund", refund.to_string())
        .add_attribute("tokens_sold", ico.tokens_sold.to_string());
    if refund.is_zero() {
        return Ok(res);
    }

    Ok(res.add_message(BankMsg::Send {
        to_address: buyer.to_string(),
        amount: native_funds(refund),
    }))
}
