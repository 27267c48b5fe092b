#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Coin, Deps, DepsMut, Env, Event, MessageInfo, Reply, Response,
    StdResult, SubMsg, SubMsgResult, WasmMsg,
};
use cw2::{get_contract_version, set_contract_version};

use delegated_identity::{
    func::forward::{forwarded_response, target_call},
    msgs::registry::OwnershipRegistryExecuteMsg,
    types::identity::IdentityInfo,
};

use crate::error::ContractError;
use crate::helpers::ensure_is_owner;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{OWNER, REGISTRY};
use crate::FORWARD_REPLY_ID;

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:delegated-identity";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    let registry = deps.api.addr_validate(&msg.registry)?;
    OWNER.save(deps.storage, &owner)?;
    REGISTRY.save(deps.storage, &registry)?;

    // The identity is its own owner in the registry,
    // independent of whoever owns it here
    let register_msg = WasmMsg::Execute {
        contract_addr: registry.to_string(),
        msg: to_json_binary(&OwnershipRegistryExecuteMsg::SetOwner {
            identity: env.contract.address.to_string(),
            owner: env.contract.address.to_string(),
        })?,
        funds: vec![],
    };

    let event = Event::new("delegated_identity.identity.v1.MsgInstantiate").add_attributes(vec![
        ("owner", owner.to_string()),
        ("registry", registry.to_string()),
    ]);

    Ok(Response::new().add_message(register_msg).add_event(event))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Execute {
            target,
            value,
            data,
        } => execute_execute(deps, info, target, value, data),
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, info, new_owner)
        }
    }
}

/// Forwards the call to `target`, the outcome is handled in `reply`
pub fn execute_execute(
    deps: DepsMut,
    info: MessageInfo,
    target: String,
    value: Vec<Coin>,
    data: Binary,
) -> Result<Response, ContractError> {
    ensure_is_owner(deps.as_ref(), &info.sender)?;
    let target = deps.api.addr_validate(&target)?;

    let event = Event::new("delegated_identity.identity.v1.MsgExecute")
        .add_attribute("sender", info.sender)
        .add_attribute("target", target.as_str());

    Ok(Response::new()
        .add_submessage(SubMsg::reply_always(
            target_call(&target, value, data),
            FORWARD_REPLY_ID,
        ))
        .add_event(event))
}

pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let previous_owner = ensure_is_owner(deps.as_ref(), &info.sender)?;
    let new_owner = deps.api.addr_validate(&new_owner)?;
    OWNER.save(deps.storage, &new_owner)?;

    let event = Event::new("delegated_identity.identity.v1.MsgTransferOwnership")
        .add_attributes(vec![
            ("previous_owner", previous_owner.to_string()),
            ("new_owner", new_owner.to_string()),
        ]);
    Ok(Response::new().add_event(event))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(_deps: DepsMut, _env: Env, reply: Reply) -> Result<Response, ContractError> {
    if reply.id != FORWARD_REPLY_ID {
        return Err(ContractError::InvalidReplyId {});
    }
    match reply.result {
        SubMsgResult::Ok(response) => Ok(forwarded_response(response)?),
        SubMsgResult::Err(reason) => Err(ContractError::ForwardFailed { reason }),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Info {} => to_json_binary(&query_info(deps)?),
        QueryMsg::Owner {} => to_json_binary(&query_owner(deps)?),
    }
}

pub fn query_info(deps: Deps) -> StdResult<IdentityInfo> {
    Ok(IdentityInfo {
        owner: OWNER.load(deps.storage)?,
        registry: REGISTRY.load(deps.storage)?,
        version: get_contract_version(deps.storage)?,
    })
}

pub fn query_owner(deps: Deps) -> StdResult<Addr> {
    OWNER.load(deps.storage)
}
