//! Messages sent to the wrapped CW20.
//!
//! The wrapped contract decides who may mint and burn and enforces any
//! per-bridge limits; the lockbox only issues the calls.

use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, Uint128, Uint256, WasmMsg};
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;

/// Mint `amount` wrapped units to `recipient`.
pub fn mint_msg(
    wrapped: &Addr,
    recipient: &Addr,
    amount: Uint256,
) -> Result<CosmosMsg, ContractError> {
    execute_msg(
        wrapped,
        &Cw20ExecuteMsg::Mint {
            recipient: recipient.to_string(),
            amount: Uint128::try_from(amount)?,
        },
    )
}

/// Burn `amount` wrapped units out of `owner`'s balance (spends the allowance
/// `owner` granted the lockbox).
pub fn burn_from_msg(
    wrapped: &Addr,
    owner: &Addr,
    amount: Uint256,
) -> Result<CosmosMsg, ContractError> {
    execute_msg(
        wrapped,
        &Cw20ExecuteMsg::BurnFrom {
            owner: owner.to_string(),
            amount: Uint128::try_from(amount)?,
        },
    )
}

/// Burn `amount` wrapped units already held by the lockbox.
pub fn burn_msg(wrapped: &Addr, amount: Uint256) -> Result<CosmosMsg, ContractError> {
    execute_msg(
        wrapped,
        &Cw20ExecuteMsg::Burn {
            amount: Uint128::try_from(amount)?,
        },
    )
}

fn execute_msg(contract: &Addr, msg: &Cw20ExecuteMsg) -> Result<CosmosMsg, ContractError> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: contract.to_string(),
        msg: to_json_binary(msg)?,
        funds: vec![],
    }))
}
