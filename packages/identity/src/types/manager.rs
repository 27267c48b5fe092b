use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;

use crate::types::role::Role;

/// Per call-fingerprint sequence number for signed executions
pub type Nonce = u64;

#[cw_serde]
pub struct ManagerInfo {
    /// The identity this manager forwards to
    pub identity: Addr,
    /// Bech32 prefix used to derive signer addresses from recovered public keys
    pub addr_prefix: String,
    pub version: cw2::ContractVersion,
}

#[cw_serde]
pub struct PrincipalRole {
    pub principal: Addr,
    pub role: Role,
}

#[cw_serde]
pub struct RolesResponse {
    pub roles: Vec<PrincipalRole>,
}
