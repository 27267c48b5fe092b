#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Coin, Deps, DepsMut, Env, Event, MessageInfo, Order, Reply,
    Response, StdError, StdResult, SubMsg, SubMsgResult,
};
use cw2::{get_contract_version, set_contract_version};
use cw_storage_plus::Bound;
use cw_utils::nonpayable;

use delegated_identity::{
    func::{
        encoding::{authorization_digest, fingerprint},
        forward::{forwarded_response, identity_execute},
        signature::recover_signer,
    },
    types::{
        manager::{ManagerInfo, Nonce, PrincipalRole, RolesResponse},
        role::Role,
    },
    DEFAULT_LIMIT, MAX_LIMIT,
};

use crate::error::ContractError;
use crate::helpers::{ensure_has_role, has_role, load_nonce, load_role};
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{ADDR_PREFIX, IDENTITY, NONCES, ROLES};
use crate::{FORWARD_REPLY_ID, SIGNED_FORWARD_REPLY_ID};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:delegated-identity-manager";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let identity = deps.api.addr_validate(&msg.identity)?;
    let owner = deps.api.addr_validate(&msg.owner)?;
    if msg.addr_prefix.is_empty() {
        return Err(StdError::generic_err("addr_prefix cannot be empty").into());
    }

    IDENTITY.save(deps.storage, &identity)?;
    ADDR_PREFIX.save(deps.storage, &msg.addr_prefix)?;
    ROLES.save(deps.storage, &owner, &Role::Owner)?;

    let event = Event::new("delegated_identity.identity_manager.v1.MsgInstantiate")
        .add_attributes(vec![
            ("identity", identity.to_string()),
            ("owner", owner.to_string()),
            ("addr_prefix", msg.addr_prefix),
        ]);
    Ok(Response::new().add_event(event))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    // the manager has no way to spend funds, value is paid by the identity
    nonpayable(&info)?;
    match msg {
        ExecuteMsg::AddRole { principal, role } => execute_add_role(deps, info, principal, role),
        ExecuteMsg::RemoveRole { principal } => {
            execute_add_role(deps, info, principal, Role::None)
        }
        ExecuteMsg::Execute {
            target,
            value,
            data,
        } => execute_execute(deps, info, target, value, data),
        ExecuteMsg::ExecuteSigned {
            target,
            value,
            data,
            signature,
        } => execute_execute_signed(deps, env, info, target, value, data, signature),
    }
}

/// Sets the role of `principal`, `Role::None` removes it from the table
pub fn execute_add_role(
    deps: DepsMut,
    info: MessageInfo,
    principal: String,
    role: Role,
) -> Result<Response, ContractError> {
    ensure_has_role(deps.as_ref(), &info.sender, Role::Owner)?;
    let principal = deps.api.addr_validate(&principal)?;

    let event = if role.is_none() {
        ROLES.remove(deps.storage, &principal);
        Event::new("delegated_identity.identity_manager.v1.MsgRemoveRole")
    } else {
        ROLES.save(deps.storage, &principal, &role)?;
        Event::new("delegated_identity.identity_manager.v1.MsgAddRole")
    };

    Ok(Response::new().add_event(event.add_attributes(vec![
        ("sender", info.sender.to_string()),
        ("principal", principal.to_string()),
        ("role", role.to_string()),
    ])))
}

/// Forwards through the identity on behalf of an `Action` sender
pub fn execute_execute(
    deps: DepsMut,
    info: MessageInfo,
    target: String,
    value: Vec<Coin>,
    data: Binary,
) -> Result<Response, ContractError> {
    ensure_has_role(deps.as_ref(), &info.sender, Role::Action)?;
    let target = deps.api.addr_validate(&target)?;
    let identity = IDENTITY.load(deps.storage)?;

    let event = Event::new("delegated_identity.identity_manager.v1.MsgExecute")
        .add_attribute("sender", info.sender)
        .add_attribute("target", target.as_str());

    Ok(Response::new()
        .add_submessage(SubMsg::reply_always(
            identity_execute(&identity, &target, value, data)?,
            FORWARD_REPLY_ID,
        ))
        .add_event(event))
}

/// Forwards through the identity on behalf of the `Action` principal
/// that signed `(manager, target, value, data, nonce)`.
///
/// The nonce is consumed before the forward is dispatched and stays consumed
/// if the forward fails, see `reply`.
pub fn execute_execute_signed(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    target: String,
    value: Vec<Coin>,
    data: Binary,
    signature: Binary,
) -> Result<Response, ContractError> {
    let target = deps.api.addr_validate(&target)?;
    let (key, nonce) = load_nonce(deps.as_ref(), &target, &value, &data)?;

    let digest = authorization_digest(
        env.contract.address.as_str(),
        target.as_str(),
        &value,
        &data,
        nonce,
    );
    let addr_prefix = ADDR_PREFIX.load(deps.storage)?;
    let signer = recover_signer(deps.api, &addr_prefix, &digest, &signature)?;

    // the relayer's own role is irrelevant
    ensure_has_role(deps.as_ref(), &signer, Role::Action)?;

    let next_nonce = nonce
        .checked_add(1)
        .ok_or_else(|| StdError::generic_err("nonce overflow"))?;
    NONCES.save(deps.storage, key.as_slice(), &next_nonce)?;

    let identity = IDENTITY.load(deps.storage)?;
    let event = Event::new("delegated_identity.identity_manager.v1.MsgExecuteSigned")
        .add_attributes(vec![
            ("relayer", info.sender.to_string()),
            ("signer", signer.to_string()),
            ("target", target.to_string()),
            ("nonce", nonce.to_string()),
        ]);

    Ok(Response::new()
        .add_submessage(SubMsg::reply_always(
            identity_execute(&identity, &target, value, data)?,
            SIGNED_FORWARD_REPLY_ID,
        ))
        .add_event(event))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(_deps: DepsMut, _env: Env, reply: Reply) -> Result<Response, ContractError> {
    match (reply.id, reply.result) {
        (FORWARD_REPLY_ID, SubMsgResult::Ok(response)) => Ok(forwarded_response(response)?),
        (FORWARD_REPLY_ID, SubMsgResult::Err(reason)) => {
            Err(ContractError::ForwardFailed { reason })
        }
        (SIGNED_FORWARD_REPLY_ID, SubMsgResult::Ok(response)) => {
            Ok(forwarded_response(response)?.add_event(
                Event::new("delegated_identity.identity_manager.v1.MsgForwardResult")
                    .add_attribute("forward", "ok"),
            ))
        }
        // Returning an error here would revert the nonce increment,
        // a failed forward is reported to the relayer instead
        (SIGNED_FORWARD_REPLY_ID, SubMsgResult::Err(reason)) => {
            let error = ContractError::ForwardFailed { reason };
            Ok(Response::new().add_event(
                Event::new("delegated_identity.identity_manager.v1.MsgForwardResult")
                    .add_attribute("forward", "failed")
                    .add_attribute("error", error.to_string()),
            ))
        }
        _ => Err(ContractError::InvalidReplyId {}),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::HasRole { principal, role } => {
            to_json_binary(&query_has_role(deps, principal, role)?)
        }
        QueryMsg::Role { principal } => to_json_binary(&query_role(deps, principal)?),
        QueryMsg::Roles { start_after, limit } => {
            to_json_binary(&query_roles(deps, start_after, limit)?)
        }
        QueryMsg::Nonce {
            target,
            value,
            data,
        } => to_json_binary(&query_nonce(deps, target, value, data)?),
        QueryMsg::Fingerprint {
            target,
            value,
            data,
        } => to_json_binary(&query_fingerprint(deps, target, value, data)?),
        QueryMsg::Info {} => to_json_binary(&query_info(deps)?),
    }
}

pub fn query_has_role(deps: Deps, principal: String, role: Role) -> StdResult<bool> {
    has_role(deps, &deps.api.addr_validate(&principal)?, role)
}

pub fn query_role(deps: Deps, principal: String) -> StdResult<Role> {
    load_role(deps, &deps.api.addr_validate(&principal)?)
}

pub fn query_roles(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<RolesResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_after = start_after
        .map(|s| deps.api.addr_validate(&s))
        .transpose()?;
    let start = start_after.as_ref().map(Bound::exclusive);

    let roles = ROLES
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(principal, role)| PrincipalRole { principal, role }))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(RolesResponse { roles })
}

/// `getNonce`: 0 for calls never executed by signature
pub fn query_nonce(
    deps: Deps,
    target: String,
    value: Vec<Coin>,
    data: Binary,
) -> StdResult<Nonce> {
    let target = deps.api.addr_validate(&target)?;
    Ok(load_nonce(deps, &target, &value, &data)?.1)
}

pub fn query_fingerprint(
    deps: Deps,
    target: String,
    value: Vec<Coin>,
    data: Binary,
) -> StdResult<Binary> {
    let target: Addr = deps.api.addr_validate(&target)?;
    Ok(Binary::from(fingerprint(target.as_str(), &value, &data).to_vec()))
}

pub fn query_info(deps: Deps) -> StdResult<ManagerInfo> {
    Ok(ManagerInfo {
        identity: IDENTITY.load(deps.storage)?,
        addr_prefix: ADDR_PREFIX.load(deps.storage)?,
        version: get_contract_version(deps.storage)?,
    })
}
