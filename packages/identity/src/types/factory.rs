use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;

#[cw_serde]
pub struct FactoryConfig {
    /// Code id used to instantiate identities
    pub identity_code_id: u64,
    /// Code id used to instantiate identity managers
    pub manager_code_id: u64,
    /// Ownership registry every new identity registers itself in
    pub registry: Addr,
    /// Bech32 prefix handed to new managers for signer address derivation
    pub addr_prefix: String,
}
