//! Interface of the external ownership registry.
//! Only the messages are defined here, storage lives in the registry contract.
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

#[cw_serde]
pub enum OwnershipRegistryExecuteMsg {
    /// Callable by the current registered owner of `identity`,
    /// which is the identity itself until first changed
    SetOwner { identity: String, owner: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum OwnershipRegistryQueryMsg {
    #[returns(Addr)]
    OwnerOf { identity: String },
}
