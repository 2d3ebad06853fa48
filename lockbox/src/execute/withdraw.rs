//! Withdraw handlers.
//!
//! The `withdraw` event goes out before the burn and the release. The burn is
//! dispatched ahead of the release, so a failed burn stops the payout.

use cosmwasm_std::{
    Addr, CosmosMsg, DepsMut, Event, MessageInfo, Reply, Response, SubMsgResult, Uint256,
};

use crate::custody::Lockbox;
use crate::error::ContractError;
use crate::state::CONFIG;
use crate::wrapped::{burn_from_msg, burn_msg};

use super::{nonpayable, recipient_or};

/// Burn `amount` wrapped from the sender and release custody to `to`
/// (default: sender).
pub fn execute_withdraw(
    deps: DepsMut,
    info: MessageInfo,
    to: Option<String>,
    amount: Uint256,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;

    let recipient = recipient_or(deps.api, to, &info.sender)?;
    let burn = burn_from_msg(&config.wrapped_asset, &info.sender, amount)?;

    release(
        &Lockbox::from_config(&config),
        burn,
        &info.sender,
        recipient,
        amount,
        "withdraw",
    )
}

/// Burn wrapped that arrived through a CW20 `Send` and release custody.
///
/// `info.sender` is the wrapped contract; `sender` is the account that sent.
pub fn execute_receive_withdraw(
    deps: DepsMut,
    info: MessageInfo,
    sender: Addr,
    to: Option<String>,
    amount: Uint256,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.wrapped_asset {
        return Err(ContractError::UnsupportedToken {
            token: info.sender.to_string(),
        });
    }

    let recipient = recipient_or(deps.api, to, &sender)?;
    let burn = burn_msg(&config.wrapped_asset, amount)?;

    release(
        &Lockbox::from_config(&config),
        burn,
        &sender,
        recipient,
        amount,
        "withdraw_cw20",
    )
}

/// Turn a failed native send into `WithdrawFailed`, aborting the withdrawal.
pub fn reply_native_release(msg: Reply) -> Result<Response, ContractError> {
    match msg.result {
        SubMsgResult::Err(reason) => Err(ContractError::WithdrawFailed { reason }),
        SubMsgResult::Ok(_) => Ok(Response::new()),
    }
}

fn release(
    lockbox: &Lockbox,
    burn: CosmosMsg,
    sender: &Addr,
    recipient: Addr,
    amount: Uint256,
    action: &str,
) -> Result<Response, ContractError> {
    let custody = lockbox.custody();
    let released_amount = custody.released_amount(amount)?;
    let payout = custody.release(&recipient, amount)?;

    Ok(Response::new()
        .add_event(
            Event::new("withdraw")
                .add_attribute("recipient", recipient.as_str())
                .add_attribute("amount", amount.to_string()),
        )
        .add_message(burn)
        .add_submessages(payout)
        .add_attribute("action", action)
        .add_attribute("sender", sender.as_str())
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount.to_string())
        .add_attribute("released_amount", released_amount.to_string()))
}
