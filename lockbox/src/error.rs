//! Error types for the CL8Y Lockbox contract
//!
//! Failures from the wrapped or locked asset contracts are not represented
//! here: they abort the transaction with the collaborator's own error.

use cosmwasm_std::{ConversionOverflowError, OverflowError, StdError, Uint256};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    ConversionOverflow(#[from] ConversionOverflowError),

    // ========================================================================
    // Construction Errors
    // ========================================================================

    #[error("Locked asset reports {decimals} decimals, max is {max}")]
    MaxDecimalsExceeded { decimals: u8, max: u8 },

    // ========================================================================
    // Mode Errors
    // ========================================================================

    #[error("Wrong mode: lockbox holds native currency, use the native entry points")]
    WrongModeNative,

    #[error("Wrong mode: lockbox holds a token, use the token entry points")]
    WrongModeToken,

    // ========================================================================
    // Amount & Funds Errors
    // ========================================================================

    #[error("Amount too large: {amount} exceeds upscale limit {max}")]
    AmountTooLarge { amount: Uint256, max: Uint256 },

    #[error("No funds sent")]
    NoFundsSent,

    #[error("Invalid funds: {reason}")]
    InvalidFunds { reason: String },

    #[error("Unsupported token: {token}")]
    UnsupportedToken { token: String },

    // ========================================================================
    // Withdraw Errors
    // ========================================================================

    #[error("Withdraw failed: {reason}")]
    WithdrawFailed { reason: String },

    // ========================================================================
    // Reply Errors
    // ========================================================================

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },
}
