use cosmwasm_std::{Addr, Deps};

use crate::error::ContractError;
use crate::state::OWNER;

/// Ensures sender is the current owner
pub fn ensure_is_owner(deps: Deps, sender: &Addr) -> Result<Addr, ContractError> {
    let owner = OWNER.load(deps.storage)?;
    if &owner == sender {
        Ok(owner)
    } else {
        Err(ContractError::Unauthorized {})
    }
}
