use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

use crate::types::factory::FactoryConfig;

#[cw_serde]
pub struct FactoryInstantiateMsg {
    pub identity_code_id: u64,
    pub manager_code_id: u64,
    pub registry: String,
    pub addr_prefix: String,
}

#[cw_serde]
pub enum FactoryExecuteMsg {
    /// Creates an identity and a manager owning it,
    /// the sender becomes the manager's `Owner`
    CreateIdentityWithManager {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum FactoryQueryMsg {
    #[returns(FactoryConfig)]
    Config {},
    #[returns(u64)]
    TotalCreated {},
    #[returns(Option<Addr>)]
    ManagerOf { identity: String },
}
