//! CL8Y Lockbox Contract - Wrapped Asset Custody for TerraClassic
//!
//! A lockbox holds one asset in custody and mints an equal value of a wrapped
//! CW20 in exchange. The locked asset is either the chain's native currency
//! (a bank denom) or a CW20 token, chosen at instantiation.
//!
//! # Deposit
//! 1. User attaches native funds, or the lockbox pulls CW20 tokens via
//!    `TransferFrom` (or receives them through a CW20 `Send`)
//! 2. Amount is rescaled from the asset's decimals to 18
//! 3. Lockbox mints the wrapped CW20 to the recipient
//! 4. `deposit` event is emitted after the mint
//!
//! # Withdraw
//! 1. `withdraw` event is emitted
//! 2. Lockbox burns the wrapped CW20 from the caller
//! 3. Amount is rescaled from 18 to the asset's decimals (truncating)
//! 4. Locked asset is released to the recipient
//!
//! Every execution is atomic: a failure anywhere reverts the whole transaction.

pub mod contract;
pub mod custody;
pub mod decimals;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;
pub mod wrapped;

pub use crate::custody::{Custody, Lockbox};
pub use crate::decimals::{
    normalize_decimals, CANONICAL_DECIMALS, MAX_DECIMALS, MAX_UPSCALE_AMOUNT,
};
pub use crate::error::ContractError;
