//! Asset identifiers shared by the bridge contracts.
//!
//! An asset is either a bank denom native to the chain or a CW20 contract.

use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Api, QuerierWrapper, StdError, StdResult, Uint128};

/// Identifies a native denom or a CW20 token contract
#[cw_serde]
pub enum AssetInfo {
    /// Bank denom (e.g. "uluna")
    Native { denom: String },
    /// CW20 contract address
    Token { contract_addr: String },
}

impl AssetInfo {
    pub fn native(denom: impl Into<String>) -> Self {
        AssetInfo::Native {
            denom: denom.into(),
        }
    }

    pub fn token(contract_addr: impl Into<String>) -> Self {
        AssetInfo::Token {
            contract_addr: contract_addr.into(),
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, AssetInfo::Native { .. })
    }

    /// Validate the identifier and return it in canonical form.
    ///
    /// CW20 addresses are run through `addr_validate`; denoms must be non-empty.
    pub fn validate(&self, api: &dyn Api) -> StdResult<AssetInfo> {
        match self {
            AssetInfo::Native { denom } => {
                if denom.trim().is_empty() {
                    return Err(StdError::generic_err("Native denom must not be empty"));
                }
                Ok(AssetInfo::native(denom.clone()))
            }
            AssetInfo::Token { contract_addr } => {
                let addr = api.addr_validate(contract_addr)?;
                Ok(AssetInfo::token(addr))
            }
        }
    }

    /// Query how much of this asset `holder` owns.
    pub fn query_balance(&self, querier: &QuerierWrapper, holder: &Addr) -> StdResult<Uint128> {
        match self {
            AssetInfo::Native { denom } => Ok(querier.query_balance(holder, denom)?.amount),
            AssetInfo::Token { contract_addr } => {
                let response: cw20::BalanceResponse = querier.query_wasm_smart(
                    contract_addr,
                    &cw20::Cw20QueryMsg::Balance {
                        address: holder.to_string(),
                    },
                )?;
                Ok(response.balance)
            }
        }
    }
}

impl fmt::Display for AssetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetInfo::Native { denom } => write!(f, "{}", denom),
            AssetInfo::Token { contract_addr } => write!(f, "{}", contract_addr),
        }
    }
}

/// An amount of a specific asset
#[cw_serde]
pub struct Asset {
    pub info: AssetInfo,
    pub amount: Uint128,
}
