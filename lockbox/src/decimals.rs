//! Decimal precision handling for the lockbox.
//!
//! The wrapped asset always uses [`CANONICAL_DECIMALS`]. Locked assets may use
//! anything up to [`MAX_DECIMALS`]; amounts are rescaled with
//! [`normalize_decimals`] on the way in (asset -> canonical) and on the way out
//! (canonical -> asset).

use cosmwasm_std::{Addr, QuerierWrapper, Uint256};
use cw20::{Cw20QueryMsg, TokenInfoResponse};

use crate::error::ContractError;

// ============================================================================
// Constants
// ============================================================================

/// Precision of the wrapped asset
pub const CANONICAL_DECIMALS: u8 = 18;

/// Largest precision a locked asset may report
pub const MAX_DECIMALS: u8 = 36;

/// Largest deposit accepted when the locked asset is upscaled (2^192 - 1).
///
/// Keeps the largest deposit upscale (`* 10^18`, from 0 decimals) within 256
/// bits. CW20 and bank amounts are `Uint128`, so the effective ceiling for a
/// deposit that actually moves tokens is `Uint128::MAX`; anything wider fails
/// with `ConversionOverflow` when the transfer is built.
pub const MAX_UPSCALE_AMOUNT: Uint256 = Uint256::from_be_bytes([
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, //
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, //
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
]);

// ============================================================================
// Normalization
// ============================================================================

/// Rescale `amount` from `from_decimals` to `to_decimals`.
///
/// Upscaling multiplies by `10^(to - from)` and fails on overflow.
/// Downscaling divides by `10^(from - to)` and truncates towards zero.
pub fn normalize_decimals(
    amount: Uint256,
    from_decimals: u8,
    to_decimals: u8,
) -> Result<Uint256, ContractError> {
    if from_decimals == to_decimals {
        return Ok(amount);
    }
    if from_decimals > to_decimals {
        let exp = (from_decimals - to_decimals) as u32;
        // A divisor wider than 256 bits always floors to zero
        match Uint256::from(10u8).checked_pow(exp) {
            Ok(divisor) => Ok(amount / divisor),
            Err(_) => Ok(Uint256::zero()),
        }
    } else {
        let exp = (to_decimals - from_decimals) as u32;
        let multiplier = Uint256::from(10u8).checked_pow(exp)?;
        Ok(amount.checked_mul(multiplier)?)
    }
}

/// Reject deposits whose upscale could overflow.
///
/// Only applies when the asset sits below canonical precision; downscaling and
/// equal precisions never grow the amount.
pub fn check_upscale_bound(amount: Uint256, asset_decimals: u8) -> Result<(), ContractError> {
    if asset_decimals < CANONICAL_DECIMALS && amount > MAX_UPSCALE_AMOUNT {
        return Err(ContractError::AmountTooLarge {
            amount,
            max: MAX_UPSCALE_AMOUNT,
        });
    }
    Ok(())
}

// ============================================================================
// Discovery
// ============================================================================

/// Resolve the precision of a CW20 locked asset.
///
/// The token's `TokenInfo` query is optional: a contract that does not answer
/// it, or answers with something that does not parse, is treated as having
/// 0 decimals. A successful answer above [`MAX_DECIMALS`] is an error.
pub fn discover_decimals(querier: &QuerierWrapper, token: &Addr) -> Result<u8, ContractError> {
    let reported = querier
        .query_wasm_smart::<TokenInfoResponse>(token, &Cw20QueryMsg::TokenInfo {})
        .map(|info| info.decimals);

    match reported {
        Ok(decimals) if decimals > MAX_DECIMALS => Err(ContractError::MaxDecimalsExceeded {
            decimals,
            max: MAX_DECIMALS,
        }),
        Ok(decimals) => Ok(decimals),
        Err(_) => Ok(0),
    }
}
