#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, Event, MessageInfo, Reply, Response,
    StdResult, SubMsg, WasmMsg,
};
use cw2::set_contract_version;
use cw_utils::parse_reply_instantiate_data;

use delegated_identity::{
    msgs::{
        identity::{IdentityExecuteMsg, IdentityInstantiateMsg},
        manager::ManagerInstantiateMsg,
    },
    types::factory::FactoryConfig,
};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{PendingCreation, CONFIG, MANAGERS, PENDING, TOTAL_CREATED};
use crate::{IDENTITY_INSTANTIATE_ID, MANAGER_INSTANTIATE_ID};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:delegated-identity-factory";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    let config = FactoryConfig {
        identity_code_id: msg.identity_code_id,
        manager_code_id: msg.manager_code_id,
        registry: deps.api.addr_validate(&msg.registry)?,
        addr_prefix: msg.addr_prefix,
    };
    CONFIG.save(deps.storage, &config)?;
    TOTAL_CREATED.save(deps.storage, &0)?;

    let event = Event::new("delegated_identity.factory.v1.MsgInstantiate").add_attributes(vec![
        ("identity_code_id", config.identity_code_id.to_string()),
        ("manager_code_id", config.manager_code_id.to_string()),
        ("registry", config.registry.to_string()),
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
    match msg {
        ExecuteMsg::CreateIdentityWithManager {} => {
            execute_create_identity_with_manager(deps, env, info)
        }
    }
}

/// Instantiates the identity owned by the factory for now,
/// the manager is created in the identity reply
pub fn execute_create_identity_with_manager(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    PENDING.save(
        deps.storage,
        &PendingCreation {
            creator: info.sender,
            identity: None,
        },
    )?;

    let instantiate_msg = WasmMsg::Instantiate {
        admin: None,
        code_id: config.identity_code_id,
        msg: to_json_binary(&IdentityInstantiateMsg {
            owner: env.contract.address.to_string(),
            registry: config.registry.to_string(),
        })?,
        funds: vec![],
        label: "Identity".into(),
    };

    Ok(Response::new().add_submessage(SubMsg::reply_on_success(
        instantiate_msg,
        IDENTITY_INSTANTIATE_ID,
    )))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, reply: Reply) -> Result<Response, ContractError> {
    match reply.id {
        IDENTITY_INSTANTIATE_ID => reply_identity_instantiated(deps, reply),
        MANAGER_INSTANTIATE_ID => reply_manager_instantiated(deps, reply),
        _ => Err(ContractError::InvalidReplyId {}),
    }
}

fn reply_identity_instantiated(deps: DepsMut, reply: Reply) -> Result<Response, ContractError> {
    let identity = deps
        .api
        .addr_validate(&parse_reply_instantiate_data(reply)?.contract_address)?;
    let mut pending = PENDING
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingCreation {})?;
    let config = CONFIG.load(deps.storage)?;

    let instantiate_msg = WasmMsg::Instantiate {
        admin: None,
        code_id: config.manager_code_id,
        msg: to_json_binary(&ManagerInstantiateMsg {
            identity: identity.to_string(),
            owner: pending.creator.to_string(),
            addr_prefix: config.addr_prefix,
        })?,
        funds: vec![],
        label: "Identity Manager".into(),
    };

    pending.identity = Some(identity);
    PENDING.save(deps.storage, &pending)?;

    Ok(Response::new().add_submessage(SubMsg::reply_on_success(
        instantiate_msg,
        MANAGER_INSTANTIATE_ID,
    )))
}

/// Hands the identity over to its manager
fn reply_manager_instantiated(deps: DepsMut, reply: Reply) -> Result<Response, ContractError> {
    let manager = deps
        .api
        .addr_validate(&parse_reply_instantiate_data(reply)?.contract_address)?;
    let pending = PENDING
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingCreation {})?;
    let identity = pending.identity.ok_or(ContractError::NoPendingCreation {})?;
    PENDING.remove(deps.storage);

    MANAGERS.save(deps.storage, &identity, &manager)?;
    TOTAL_CREATED.update(deps.storage, |total| -> StdResult<_> { Ok(total + 1) })?;

    let transfer_msg = WasmMsg::Execute {
        contract_addr: identity.to_string(),
        msg: to_json_binary(&IdentityExecuteMsg::TransferOwnership {
            new_owner: manager.to_string(),
        })?,
        funds: vec![],
    };

    let event = Event::new("delegated_identity.factory.v1.MsgCreateIdentityWithManager")
        .add_attributes(vec![
            ("creator", pending.creator.to_string()),
            ("identity", identity.to_string()),
            ("manager", manager.to_string()),
        ]);

    Ok(Response::new().add_message(transfer_msg).add_event(event))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&CONFIG.load(deps.storage)?),
        QueryMsg::TotalCreated {} => to_json_binary(&TOTAL_CREATED.load(deps.storage)?),
        QueryMsg::ManagerOf { identity } => to_json_binary(&query_manager_of(deps, identity)?),
    }
}

pub fn query_manager_of(deps: Deps, identity: String) -> StdResult<Option<Addr>> {
    MANAGERS.may_load(deps.storage, &deps.api.addr_validate(&identity)?)
}
