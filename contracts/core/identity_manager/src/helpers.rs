use cosmwasm_std::{Addr, Binary, Coin, Deps, StdResult};
use delegated_identity::{
    func::encoding::{fingerprint, Fingerprint},
    types::{manager::Nonce, role::Role},
};

use crate::error::ContractError;
use crate::state::{NONCES, ROLES};

/// Role of `principal`, `Role::None` if never granted
pub fn load_role(deps: Deps, principal: &Addr) -> StdResult<Role> {
    Ok(ROLES.may_load(deps.storage, principal)?.unwrap_or_default())
}

/// Exact role match
pub fn has_role(deps: Deps, principal: &Addr, role: Role) -> StdResult<bool> {
    Ok(load_role(deps, principal)? == role)
}

/// Ensures `principal` holds exactly `role`
pub fn ensure_has_role(deps: Deps, principal: &Addr, role: Role) -> Result<(), ContractError> {
    if has_role(deps, principal, role)? {
        Ok(())
    } else {
        Err(ContractError::Unauthorized {})
    }
}

/// Fingerprint of the call and its current nonce
pub fn load_nonce(
    deps: Deps,
    target: &Addr,
    value: &[Coin],
    data: &Binary,
) -> StdResult<(Fingerprint, Nonce)> {
    let key = fingerprint(target.as_str(), value, data);
    let nonce = NONCES.may_load(deps.storage, key.as_slice())?.unwrap_or_default();
    Ok((key, nonce))
}
