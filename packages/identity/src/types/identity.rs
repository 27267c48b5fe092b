use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;

#[cw_serde]
pub struct IdentityInfo {
    /// The principal currently allowed to `execute` and `transfer_ownership`
    pub owner: Addr,
    /// Ownership registry the identity registered itself in at instantiation
    pub registry: Addr,
    pub version: cw2::ContractVersion,
}
