//! Execute handlers for the CL8Y Lockbox contract.
//!
//! - `deposit` - native and token deposits, plus the deposit reply
//! - `withdraw` - burns wrapped and releases custody, plus the release reply
//! - `receive` - CW20 receive hook routing into the two above

mod deposit;
mod receive;
mod withdraw;

pub use deposit::*;
pub use receive::*;
pub use withdraw::*;

use cosmwasm_std::{Addr, Api, MessageInfo, StdResult};

use crate::error::ContractError;

/// Resolve an optional recipient, defaulting to `fallback`.
fn recipient_or(api: &dyn Api, to: Option<String>, fallback: &Addr) -> StdResult<Addr> {
    match to {
        Some(to) => api.addr_validate(&to),
        None => Ok(fallback.clone()),
    }
}

/// Reject attached funds on entry points that do not take native currency.
fn nonpayable(info: &MessageInfo) -> Result<(), ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::InvalidFunds {
            reason: "This message does not accept funds".to_string(),
        });
    }
    Ok(())
}
