//! CW20 receive hook.

use cosmwasm_std::{from_json, DepsMut, MessageInfo, Response, Uint256};
use cw20::Cw20ReceiveMsg;

use crate::error::ContractError;
use crate::msg::ReceiveMsg;

use super::{execute_receive_deposit, execute_receive_withdraw};

/// Route a CW20 `Send` to the deposit or withdraw path.
///
/// Which token may send which payload is checked by the target handler.
pub fn execute_receive(
    deps: DepsMut,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let sender = deps.api.addr_validate(&cw20_msg.sender)?;
    let amount = Uint256::from(cw20_msg.amount);

    match from_json::<ReceiveMsg>(&cw20_msg.msg)? {
        ReceiveMsg::Deposit { to } => execute_receive_deposit(deps, info, sender, to, amount),
        ReceiveMsg::Withdraw { to } => execute_receive_withdraw(deps, info, sender, to, amount),
    }
}
