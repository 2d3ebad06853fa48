//! Query handlers for the CL8Y Lockbox contract.

use cosmwasm_std::{Deps, Env, StdError, StdResult, Uint256};

use common::Asset;

use crate::custody::Lockbox;
use crate::decimals::CANONICAL_DECIMALS;
use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, LockedBalanceResponse, SimulateDepositResponse, SimulateWithdrawResponse,
};
use crate::state::CONFIG;

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        is_native: config.is_native(),
        wrapped_asset: config.wrapped_asset,
        locked_asset: config.locked_asset,
        decimals: config.decimals,
        canonical_decimals: CANONICAL_DECIMALS,
    })
}

/// Query the locked-asset balance held by the lockbox.
pub fn query_locked_balance(deps: Deps, env: Env) -> StdResult<LockedBalanceResponse> {
    let config = CONFIG.load(deps.storage)?;
    let amount = config
        .locked_asset
        .query_balance(&deps.querier, &env.contract.address)?;

    Ok(LockedBalanceResponse {
        locked: Asset {
            info: config.locked_asset,
            amount,
        },
    })
}

/// Simulate the mint of a deposit. Fails the same way the deposit would.
pub fn query_simulate_deposit(deps: Deps, amount: Uint256) -> StdResult<SimulateDepositResponse> {
    let config = CONFIG.load(deps.storage)?;
    let lockbox = Lockbox::from_config(&config);
    let wrapped_amount = lockbox
        .custody()
        .wrapped_amount(amount)
        .map_err(into_std)?;

    Ok(SimulateDepositResponse {
        amount,
        wrapped_amount,
    })
}

/// Simulate the payout of a withdrawal.
pub fn query_simulate_withdraw(deps: Deps, amount: Uint256) -> StdResult<SimulateWithdrawResponse> {
    let config = CONFIG.load(deps.storage)?;
    let lockbox = Lockbox::from_config(&config);
    let released_amount = lockbox
        .custody()
        .released_amount(amount)
        .map_err(into_std)?;

    Ok(SimulateWithdrawResponse {
        amount,
        released_amount,
    })
}

fn into_std(err: ContractError) -> StdError {
    match err {
        ContractError::Std(err) => err,
        other => StdError::generic_err(other.to_string()),
    }
}
