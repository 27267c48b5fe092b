use cosmwasm_std::{to_json_binary, Event, Response, StdError, StdResult};
use cw2::set_contract_version;
use cw_storage_plus::Item;
use sylvia::{
    contract, schemars,
    types::{ExecCtx, InstantiateCtx, QueryCtx},
};

#[cfg(not(feature = "library"))]
use sylvia::entry_points;

const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Counter<'a> {
    count: Item<'a, u64>,
}

#[cfg_attr(not(feature = "library"), entry_points)]
#[contract]
#[error(StdError)]
impl Counter<'_> {
    pub const fn new() -> Self {
        Self {
            count: Item::new("count"),
        }
    }

    #[msg(instantiate)]
    fn instantiate(&self, ctx: InstantiateCtx) -> Result<Response, StdError> {
        set_contract_version(ctx.deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
        self.count.save(ctx.deps.storage, &0)?;
        let event = self.get_event("instantiate");
        Ok(Response::new().add_event(event))
    }

    /// Returns the new count as response data
    #[msg(exec)]
    fn increment(&self, ctx: ExecCtx) -> Result<Response, StdError> {
        let count = self.count.update(ctx.deps.storage, |c| -> StdResult<_> {
            c.checked_add(1)
                .ok_or_else(|| StdError::generic_err("overflow"))
        })?;

        let event = self
            .get_event("increment")
            .add_attribute("sender", ctx.info.sender);
        Ok(Response::new()
            .add_event(event)
            .set_data(to_json_binary(&count)?))
    }

    /// Always fails, to exercise failed forwards
    #[msg(exec)]
    fn fail(&self, _ctx: ExecCtx) -> Result<Response, StdError> {
        Err(StdError::generic_err("counter failure"))
    }

    pub(crate) fn get_event(&self, action: impl Into<String>) -> Event {
        Event::new("delegated_identity.counter-test.v1").add_attribute("action", action)
    }

    #[msg(query)]
    fn count(&self, ctx: QueryCtx) -> Result<u64, StdError> {
        self.count.load(ctx.deps.storage)
    }
}
