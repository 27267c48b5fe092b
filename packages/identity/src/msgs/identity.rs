use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Coin};

use crate::types::identity::IdentityInfo;

#[cw_serde]
pub struct IdentityInstantiateMsg {
    /// Initial owner of the identity
    pub owner: String,
    /// Ownership registry the identity registers itself in as its own owner
    pub registry: String,
}

#[cw_serde]
pub enum IdentityExecuteMsg {
    /// Forwards `data` to `target` carrying `value` from the identity's balance.
    /// Priviledge: Owner
    Execute {
        target: String,
        value: Vec<Coin>,
        data: Binary,
    },
    /// Hands the identity over to `new_owner`, no reachability checks are done.
    /// Priviledge: Owner
    TransferOwnership { new_owner: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum IdentityQueryMsg {
    #[returns(IdentityInfo)]
    Info {},
    #[returns(Addr)]
    Owner {},
}
