use cosmwasm_std::{Addr, Binary, Event, Response, StdError};
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

/// Claims made by an issuer about a subject
pub struct ClaimRegistry {
    // (issuer, subject, key)
    claims: Map<'static, (&'static Addr, &'static Addr, &'static str), Binary>,
}

#[cfg_attr(not(feature = "library"), entry_points)]
#[contract]
#[error(StdError)]
impl ClaimRegistry {
    pub const fn new() -> Self {
        Self {
            claims: Map::new("claims"),
        }
    }

    #[msg(instantiate)]
    fn instantiate(&self, ctx: InstantiateCtx) -> Result<Response, StdError> {
        set_contract_version(ctx.deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
        let event = self.get_event("instantiate");
        Ok(Response::new().add_event(event))
    }

    /// The sender is the issuer
    #[msg(exec)]
    fn set_claim(
        &self,
        ctx: ExecCtx,
        subject: String,
        key: String,
        value: Binary,
    ) -> Result<Response, StdError> {
        let subject = ctx.deps.api.addr_validate(&subject)?;
        self.claims.save(
            ctx.deps.storage,
            (&ctx.info.sender, &subject, key.as_str()),
            &value,
        )?;

        let event = self
            .get_event("set_claim")
            .add_attribute("issuer", ctx.info.sender.as_str())
            .add_attribute("subject", subject)
            .add_attribute("key", key);
        Ok(Response::new().add_event(event))
    }

    pub(crate) fn get_event(&self, action: impl Into<String>) -> Event {
        Event::new("delegated_identity.claims-test.v1").add_attribute("action", action)
    }

    #[msg(query)]
    fn get_claim(
        &self,
        ctx: QueryCtx,
        issuer: String,
        subject: String,
        key: String,
    ) -> Result<Option<Binary>, StdError> {
        let issuer = ctx.deps.api.addr_validate(&issuer)?;
        let subject = ctx.deps.api.addr_validate(&subject)?;
        self.claims
            .may_load(ctx.deps.storage, (&issuer, &subject, key.as_str()))
    }
}
