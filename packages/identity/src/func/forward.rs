use cosmwasm_std::{
    to_json_binary, Addr, Binary, Coin, Response, StdError, StdResult, SubMsgResponse, WasmMsg,
};
use cw_utils::parse_execute_response_data;

use crate::msgs::identity::IdentityExecuteMsg;

/// The message an identity dispatches to reach the ultimate target
pub fn target_call(target: &Addr, value: Vec<Coin>, data: Binary) -> WasmMsg {
    WasmMsg::Execute {
        contract_addr: target.to_string(),
        msg: data,
        funds: value,
    }
}

/// The message a manager sends to have its identity forward a call.
/// No funds are attached, `value` is paid from the identity's balance.
pub fn identity_execute(
    identity: &Addr,
    target: &Addr,
    value: Vec<Coin>,
    data: Binary,
) -> StdResult<WasmMsg> {
    Ok(WasmMsg::Execute {
        contract_addr: identity.to_string(),
        msg: to_json_binary(&IdentityExecuteMsg::Execute {
            target: target.to_string(),
            value,
            data,
        })?,
        funds: vec![],
    })
}

/// Propagates the forwarded call's own response data, if any.
/// Execute responses come back wrapped in `MsgExecuteContractResponse`.
pub fn forwarded_response(response: SubMsgResponse) -> StdResult<Response> {
    let data = match response.data {
        Some(data) => parse_execute_response_data(&data)
            .map_err(|e| StdError::generic_err(e.to_string()))?
            .data,
        None => None,
    };
    Ok(match data {
        Some(data) => Response::new().set_data(data),
        None => Response::new(),
    })
}
