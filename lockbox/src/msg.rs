//! Message types for the CL8Y Lockbox contract
//!
//! Amounts on the lockbox's own interface are `Uint256`. Deposit amounts are in
//! locked-asset precision; withdraw amounts are in wrapped (18 decimal)
//! precision.

use common::{Asset, AssetInfo};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint256};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Wrapped CW20 the lockbox mints and burns (lockbox must be its minter)
    pub wrapped_asset: String,
    /// Asset to hold in custody. `Native` selects native mode.
    pub locked_asset: AssetInfo,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Native Mode
    // ========================================================================
    /// Lock the attached native funds and mint wrapped to the sender
    DepositNative {},

    /// Lock the attached native funds and mint wrapped to `to`
    DepositNativeTo { to: String },

    /// Bare native transfer; same as `DepositNative {}`
    Fallback {},

    // ========================================================================
    // Token Mode
    // ========================================================================
    /// Pull `amount` locked tokens from the sender (needs allowance) and mint
    /// wrapped to the sender
    Deposit { amount: Uint256 },

    /// Pull `amount` locked tokens from the sender and mint wrapped to `to`
    DepositTo { to: String, amount: Uint256 },

    // ========================================================================
    // Both Modes
    // ========================================================================
    /// Burn `amount` wrapped from the sender (needs allowance) and release the
    /// locked asset to the sender
    Withdraw { amount: Uint256 },

    /// Burn `amount` wrapped from the sender and release the locked asset to `to`
    WithdrawTo { to: String, amount: Uint256 },

    /// CW20 receive hook for the locked token (deposit) and the wrapped token
    /// (withdraw)
    Receive(cw20::Cw20ReceiveMsg),
}

/// Payload of a CW20 `Send` to the lockbox
#[cw_serde]
pub enum ReceiveMsg {
    /// Sent by the locked token: mint wrapped to `to` (default: the sender)
    Deposit { to: Option<String> },
    /// Sent by the wrapped token: burn it and release to `to` (default: the sender)
    Withdraw { to: Option<String> },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns the immutable configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Returns the locked-asset balance held in custody
    #[returns(LockedBalanceResponse)]
    LockedBalance {},

    /// Returns the wrapped amount a deposit of `amount` would mint
    #[returns(SimulateDepositResponse)]
    SimulateDeposit { amount: Uint256 },

    /// Returns the locked amount a withdrawal of `amount` would release
    #[returns(SimulateWithdrawResponse)]
    SimulateWithdraw { amount: Uint256 },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub wrapped_asset: Addr,
    pub locked_asset: AssetInfo,
    pub is_native: bool,
    pub decimals: u8,
    pub canonical_decimals: u8,
}

#[cw_serde]
pub struct LockedBalanceResponse {
    pub locked: Asset,
}

#[cw_serde]
pub struct SimulateDepositResponse {
    /// Amount deposited, in locked-asset precision
    pub amount: Uint256,
    /// Wrapped amount minted
    pub wrapped_amount: Uint256,
}

#[cw_serde]
pub struct SimulateWithdrawResponse {
    /// Wrapped amount burned
    pub amount: Uint256,
    /// Locked amount released (may be zero after truncation)
    pub released_amount: Uint256,
}
