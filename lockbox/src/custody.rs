//! Custody variants.
//!
//! A lockbox either holds the chain's native currency or a CW20 token, fixed at
//! instantiation. [`Lockbox`] picks the variant once from the stored config;
//! entry points then ask for the variant they need and get a mode error if the
//! instance holds the other kind.

use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Coin, CosmosMsg, SubMsg, Uint128, Uint256, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use common::AssetInfo;

use crate::decimals::{check_upscale_bound, normalize_decimals, CANONICAL_DECIMALS};
use crate::error::ContractError;
use crate::state::{Config, NATIVE_RELEASE_REPLY_ID};

/// Operations both custody variants support.
pub trait Custody {
    /// Wrapped amount minted for a deposit of `amount` locked units.
    fn wrapped_amount(&self, amount: Uint256) -> Result<Uint256, ContractError>;

    /// Locked units released for a withdrawal of `amount` wrapped units.
    fn released_amount(&self, amount: Uint256) -> Result<Uint256, ContractError>;

    /// Messages paying out a withdrawal of `amount` wrapped units to `recipient`.
    ///
    /// Empty when the payout truncates to zero.
    fn release(&self, recipient: &Addr, amount: Uint256) -> Result<Vec<SubMsg>, ContractError>;
}

// ============================================================================
// Native
// ============================================================================

/// Custody of a bank denom. Native currency is already at canonical precision.
#[derive(Clone, Debug, PartialEq)]
pub struct NativeCustody {
    pub denom: String,
}

impl NativeCustody {
    /// Amount of the custody denom attached to the call.
    ///
    /// Exactly one coin of the custody denom is accepted.
    pub fn attached_amount(&self, funds: &[Coin]) -> Result<Uint256, ContractError> {
        if funds.is_empty() {
            return Err(ContractError::NoFundsSent);
        }
        if funds.len() > 1 {
            return Err(ContractError::InvalidFunds {
                reason: "Only one coin type allowed per deposit".to_string(),
            });
        }

        let coin = &funds[0];
        if coin.denom != self.denom {
            return Err(ContractError::InvalidFunds {
                reason: format!("Expected {}, got {}", self.denom, coin.denom),
            });
        }
        if coin.amount.is_zero() {
            return Err(ContractError::NoFundsSent);
        }

        Ok(Uint256::from(coin.amount))
    }
}

impl Custody for NativeCustody {
    fn wrapped_amount(&self, amount: Uint256) -> Result<Uint256, ContractError> {
        Ok(amount)
    }

    fn released_amount(&self, amount: Uint256) -> Result<Uint256, ContractError> {
        Ok(amount)
    }

    fn release(&self, recipient: &Addr, amount: Uint256) -> Result<Vec<SubMsg>, ContractError> {
        if amount.is_zero() {
            return Ok(vec![]);
        }

        // A failed send is turned into `WithdrawFailed` by the reply handler
        let send = BankMsg::Send {
            to_address: recipient.to_string(),
            amount: vec![Coin {
                denom: self.denom.clone(),
                amount: Uint128::try_from(amount)?,
            }],
        };
        Ok(vec![SubMsg::reply_on_error(send, NATIVE_RELEASE_REPLY_ID)])
    }
}

// ============================================================================
// Token
// ============================================================================

/// Custody of a CW20 token with `decimals` precision.
#[derive(Clone, Debug, PartialEq)]
pub struct TokenCustody {
    pub token: Addr,
    pub decimals: u8,
}

impl TokenCustody {
    /// Pull `amount` from `owner` into `lockbox` (spends `owner`'s allowance).
    pub fn pull(
        &self,
        owner: &Addr,
        lockbox: &Addr,
        amount: Uint256,
    ) -> Result<CosmosMsg, ContractError> {
        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: self.token.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                owner: owner.to_string(),
                recipient: lockbox.to_string(),
                amount: Uint128::try_from(amount)?,
            })?,
            funds: vec![],
        }))
    }
}

impl Custody for TokenCustody {
    fn wrapped_amount(&self, amount: Uint256) -> Result<Uint256, ContractError> {
        check_upscale_bound(amount, self.decimals)?;
        normalize_decimals(amount, self.decimals, CANONICAL_DECIMALS)
    }

    fn released_amount(&self, amount: Uint256) -> Result<Uint256, ContractError> {
        normalize_decimals(amount, CANONICAL_DECIMALS, self.decimals)
    }

    fn release(&self, recipient: &Addr, amount: Uint256) -> Result<Vec<SubMsg>, ContractError> {
        let payout = self.released_amount(amount)?;
        if payout.is_zero() {
            return Ok(vec![]);
        }

        Ok(vec![SubMsg::new(WasmMsg::Execute {
            contract_addr: self.token.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                recipient: recipient.to_string(),
                amount: Uint128::try_from(payout)?,
            })?,
            funds: vec![],
        })])
    }
}

// ============================================================================
// Selection
// ============================================================================

/// The custody variant of an instance
#[derive(Clone, Debug, PartialEq)]
pub enum Lockbox {
    Native(NativeCustody),
    Token(TokenCustody),
}

impl Lockbox {
    pub fn from_config(config: &Config) -> Self {
        match &config.locked_asset {
            AssetInfo::Native { denom } => Lockbox::Native(NativeCustody {
                denom: denom.clone(),
            }),
            // Address was validated at instantiation
            AssetInfo::Token { contract_addr } => Lockbox::Token(TokenCustody {
                token: Addr::unchecked(contract_addr),
                decimals: config.decimals,
            }),
        }
    }

    /// Native custody, or `WrongModeToken` on a token instance.
    pub fn native(&self) -> Result<&NativeCustody, ContractError> {
        match self {
            Lockbox::Native(native) => Ok(native),
            Lockbox::Token(_) => Err(ContractError::WrongModeToken),
        }
    }

    /// Token custody, or `WrongModeNative` on a native instance.
    pub fn token(&self) -> Result<&TokenCustody, ContractError> {
        match self {
            Lockbox::Token(token) => Ok(token),
            Lockbox::Native(_) => Err(ContractError::WrongModeNative),
        }
    }

    pub fn custody(&self) -> &dyn Custody {
        match self {
            Lockbox::Native(native) => native as &dyn Custody,
            Lockbox::Token(token) => token as &dyn Custody,
        }
    }
}
