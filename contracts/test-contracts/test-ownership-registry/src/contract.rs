use cosmwasm_std::{Addr, Event, Response, StdError};
use cw2::set_contract_version;
use cw_storage_plus::Map;
use sylvia::{
    contract, schemars,
    types::{ExecCtx, InstantiateCtx, QueryCtx},
};

#[cfg(not(feature = "library"))]
use sylvia::entry_points;

const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Every identity owns itself until its owner changes it
pub struct OwnershipRegistry {
    owners: Map<'static, &'static Addr, Addr>,
}

#[cfg_attr(not(feature = "library"), entry_points)]
#[contract]
#[error(StdError)]
impl OwnershipRegistry {
    pub const fn new() -> Self {
        Self {
            owners: Map::new("owners"),
        }
    }

    #[msg(instantiate)]
    fn instantiate(&self, ctx: InstantiateCtx) -> Result<Response, StdError> {
        set_contract_version(ctx.deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
        let event = self.get_event("instantiate");
        Ok(Response::new().add_event(event))
    }

    #[msg(exec)]
    fn set_owner(
        &self,
        ctx: ExecCtx,
        identity: String,
        owner: String,
    ) -> Result<Response, StdError> {
        let identity = ctx.deps.api.addr_validate(&identity)?;
        let owner = ctx.deps.api.addr_validate(&owner)?;
        let current = self
            .owners
            .may_load(ctx.deps.storage, &identity)?
            .unwrap_or_else(|| identity.clone());
        if ctx.info.sender != current {
            return Err(StdError::generic_err("Unauthorized"));
        }
        self.owners.save(ctx.deps.storage, &identity, &owner)?;

        let event = self
            .get_event("set_owner")
            .add_attribute("identity", identity)
            .add_attribute("owner", owner);
        Ok(Response::new().add_event(event))
    }

    pub(crate) fn get_event(&self, action: impl Into<String>) -> Event {
        Event::new("delegated_identity.registry-test.v1").add_attribute("action", action)
    }

    #[msg(query)]
    fn owner_of(&self, ctx: QueryCtx, identity: String) -> Result<Addr, StdError> {
        let identity = ctx.deps.api.addr_validate(&identity)?;
        Ok(self
            .owners
            .may_load(ctx.deps.storage, &identity)?
            .unwrap_or(identity))
    }
}
