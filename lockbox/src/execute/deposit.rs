//! Deposit handlers (native and token custody).
//!
//! The wrapped mint is dispatched with `reply_on_success`; the `deposit` event
//! is emitted from the reply so it lands after the mint in the event log.

use cosmwasm_std::{Addr, CosmosMsg, DepsMut, Env, Event, MessageInfo, Response, SubMsg, Uint256};

use crate::custody::{Custody, Lockbox};
use crate::error::ContractError;
use crate::state::{Config, PendingDeposit, CONFIG, DEPOSIT_REPLY_ID, PENDING_DEPOSIT};
use crate::wrapped::mint_msg;

use super::{nonpayable, recipient_or};

// ============================================================================
// Native Mode
// ============================================================================

/// Lock the attached native funds and mint wrapped to `to` (default: sender).
///
/// Also serves `Fallback {}`.
pub fn execute_deposit_native(
    deps: DepsMut,
    info: MessageInfo,
    to: Option<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let lockbox = Lockbox::from_config(&config);
    let native = lockbox.native()?;

    let amount = native.attached_amount(&info.funds)?;
    let recipient = recipient_or(deps.api, to, &info.sender)?;
    let wrapped_amount = native.wrapped_amount(amount)?;

    mint_wrapped(
        deps,
        &config,
        vec![],
        &info.sender,
        recipient,
        amount,
        wrapped_amount,
        "deposit_native",
    )
}

// ============================================================================
// Token Mode
// ============================================================================

/// Pull `amount` locked tokens from the sender and mint wrapped to `to`
/// (default: sender).
pub fn execute_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    to: Option<String>,
    amount: Uint256,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let lockbox = Lockbox::from_config(&config);
    let token = lockbox.token()?;
    nonpayable(&info)?;

    let recipient = recipient_or(deps.api, to, &info.sender)?;
    let wrapped_amount = token.wrapped_amount(amount)?;
    let pull = token.pull(&info.sender, &env.contract.address, amount)?;

    mint_wrapped(
        deps,
        &config,
        vec![pull],
        &info.sender,
        recipient,
        amount,
        wrapped_amount,
        "deposit",
    )
}

/// Mint wrapped for locked tokens that arrived through a CW20 `Send`.
///
/// `info.sender` is the CW20 contract; `sender` is the account that sent.
pub fn execute_receive_deposit(
    deps: DepsMut,
    info: MessageInfo,
    sender: Addr,
    to: Option<String>,
    amount: Uint256,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let lockbox = Lockbox::from_config(&config);
    let token = lockbox.token()?;

    if info.sender != token.token {
        return Err(ContractError::UnsupportedToken {
            token: info.sender.to_string(),
        });
    }

    let recipient = recipient_or(deps.api, to, &sender)?;
    let wrapped_amount = token.wrapped_amount(amount)?;

    mint_wrapped(
        deps,
        &config,
        vec![],
        &sender,
        recipient,
        amount,
        wrapped_amount,
        "deposit_cw20",
    )
}

// ============================================================================
// Reply
// ============================================================================

/// Emit the `deposit` event once the mint has gone through.
pub fn reply_deposit(deps: DepsMut) -> Result<Response, ContractError> {
    let pending = PENDING_DEPOSIT.load(deps.storage)?;
    PENDING_DEPOSIT.remove(deps.storage);

    Ok(Response::new().add_event(
        Event::new("deposit")
            .add_attribute("recipient", pending.recipient)
            .add_attribute("amount", pending.amount.to_string()),
    ))
}

// ============================================================================
// Internal Helpers
// ============================================================================

#[allow(clippy::too_many_arguments)]
fn mint_wrapped(
    deps: DepsMut,
    config: &Config,
    pull: Vec<CosmosMsg>,
    sender: &Addr,
    recipient: Addr,
    amount: Uint256,
    wrapped_amount: Uint256,
    action: &str,
) -> Result<Response, ContractError> {
    let mint = SubMsg::reply_on_success(
        mint_msg(&config.wrapped_asset, &recipient, wrapped_amount)?,
        DEPOSIT_REPLY_ID,
    );

    PENDING_DEPOSIT.save(
        deps.storage,
        &PendingDeposit {
            recipient: recipient.clone(),
            amount,
        },
    )?;

    Ok(Response::new()
        .add_messages(pull)
        .add_submessage(mint)
        .add_attribute("action", action)
        .add_attribute("sender", sender.as_str())
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount.to_string())
        .add_attribute("wrapped_amount", wrapped_amount.to_string()))
}
