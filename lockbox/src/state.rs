//! State definitions for the CL8Y Lockbox contract
//!
//! Configuration is written once at instantiation and never mutated. The only
//! other storage slot is the in-flight deposit record, which lives for the
//! duration of a single deposit (execute -> mint -> reply).

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint256};
use cw_storage_plus::Item;

use common::AssetInfo;

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration (immutable)
#[cw_serde]
pub struct Config {
    /// Wrapped CW20 the lockbox mints and burns
    pub wrapped_asset: Addr,
    /// Asset held in custody (bank denom in native mode, CW20 otherwise)
    pub locked_asset: AssetInfo,
    /// Precision of the locked asset (always 0 in native mode)
    pub decimals: u8,
}

impl Config {
    pub fn is_native(&self) -> bool {
        self.locked_asset.is_native()
    }
}

/// Deposit waiting for its mint to succeed before the event is emitted
#[cw_serde]
pub struct PendingDeposit {
    /// Account credited with the wrapped asset
    pub recipient: Addr,
    /// Deposited amount in locked-asset precision
    pub amount: Uint256,
}

pub const CONFIG: Item<Config> = Item::new("config");

pub const PENDING_DEPOSIT: Item<PendingDeposit> = Item::new("pending_deposit");

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:cl8y-lockbox";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reply id for the wrapped-asset mint of a deposit
pub const DEPOSIT_REPLY_ID: u64 = 1;

/// Reply id for the bank send of a native withdrawal
pub const NATIVE_RELEASE_REPLY_ID: u64 = 2;
