//! CL8Y Lockbox Contract - Entry Points
//!
//! Handlers live in:
//! - `execute/` - deposit, withdraw and CW20 receive handlers
//! - `query` - query handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult,
};
use cw2::set_contract_version;

use common::AssetInfo;

use crate::decimals::discover_decimals;
use crate::error::ContractError;
use crate::execute::{
    execute_deposit, execute_deposit_native, execute_receive, execute_withdraw, reply_deposit,
    reply_native_release,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_locked_balance, query_simulate_deposit, query_simulate_withdraw,
};
use crate::state::{
    Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, DEPOSIT_REPLY_ID, NATIVE_RELEASE_REPLY_ID,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let wrapped_asset = deps.api.addr_validate(&msg.wrapped_asset)?;
    let locked_asset = msg.locked_asset.validate(deps.api)?;

    // Native currency is treated as canonical and has nothing to query
    let decimals = match &locked_asset {
        AssetInfo::Native { .. } => 0,
        // Address was validated above
        AssetInfo::Token { contract_addr } => {
            discover_decimals(&deps.querier, &Addr::unchecked(contract_addr))?
        }
    };

    let config = Config {
        wrapped_asset,
        locked_asset,
        decimals,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("wrapped_asset", config.wrapped_asset.as_str())
        .add_attribute("locked_asset", config.locked_asset.to_string())
        .add_attribute("is_native", config.is_native().to_string())
        .add_attribute("decimals", config.decimals.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Native mode
        ExecuteMsg::DepositNative {} | ExecuteMsg::Fallback {} => {
            execute_deposit_native(deps, info, None)
        }
        ExecuteMsg::DepositNativeTo { to } => execute_deposit_native(deps, info, Some(to)),

        // Token mode
        ExecuteMsg::Deposit { amount } => execute_deposit(deps, env, info, None, amount),
        ExecuteMsg::DepositTo { to, amount } => execute_deposit(deps, env, info, Some(to), amount),

        // Both modes
        ExecuteMsg::Withdraw { amount } => execute_withdraw(deps, info, None, amount),
        ExecuteMsg::WithdrawTo { to, amount } => execute_withdraw(deps, info, Some(to), amount),
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, info, cw20_msg),
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        DEPOSIT_REPLY_ID => reply_deposit(deps),
        NATIVE_RELEASE_REPLY_ID => reply_native_release(msg),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::LockedBalance {} => to_json_binary(&query_locked_balance(deps, env)?),
        QueryMsg::SimulateDeposit { amount } => {
            to_json_binary(&query_simulate_deposit(deps, amount)?)
        }
        QueryMsg::SimulateWithdraw { amount } => {
            to_json_binary(&query_simulate_withdraw(deps, amount)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
