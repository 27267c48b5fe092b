use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Coin};

use crate::types::{
    manager::{ManagerInfo, Nonce, RolesResponse},
    role::Role,
};

#[cw_serde]
pub struct ManagerInstantiateMsg {
    /// The identity this manager forwards to,
    /// ownership of it is transferred to the manager separately
    pub identity: String,
    /// The sole initial `Owner` principal
    pub owner: String,
    /// Bech32 prefix of the chain, used to derive signer addresses
    pub addr_prefix: String,
}

#[cw_serde]
pub enum ManagerExecuteMsg {
    /// Sets the role of `principal`, `Role::None` clears it.
    /// Priviledge: Owner
    AddRole { principal: String, role: Role },
    /// Same as `AddRole` with `Role::None`.
    /// Priviledge: Owner
    RemoveRole { principal: String },
    /// Forwards the call through the identity.
    /// Priviledge: Action
    Execute {
        target: String,
        value: Vec<Coin>,
        data: Binary,
    },
    /// Forwards the call through the identity on behalf of the signer,
    /// the sender only relays.
    /// `signature` is a 65 bytes recoverable secp256k1 signature over the
    /// authorization digest of `(manager, target, value, data, nonce)`.
    /// Priviledge: any relayer, signer must be Action
    ExecuteSigned {
        target: String,
        value: Vec<Coin>,
        data: Binary,
        signature: Binary,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum ManagerQueryMsg {
    /// Exact role match, not "at least"
    #[returns(bool)]
    HasRole { principal: String, role: Role },
    #[returns(Role)]
    Role { principal: String },
    /// Principals with a role other than `None`
    #[returns(RolesResponse)]
    Roles {
        // Address string to start after
        start_after: Option<String>,
        // Max is 30 and default is 10
        limit: Option<u32>,
    },
    /// The nonce the next signed execution of this call must be signed with
    #[returns(Nonce)]
    Nonce {
        target: String,
        value: Vec<Coin>,
        data: Binary,
    },
    #[returns(Binary)]
    Fingerprint {
        target: String,
        value: Vec<Coin>,
        data: Binary,
    },
    #[returns(ManagerInfo)]
    Info {},
}
