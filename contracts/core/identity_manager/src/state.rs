use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};
use delegated_identity::types::{manager::Nonce, role::Role};

/// The identity calls are forwarded through
pub const IDENTITY: Item<Addr> = Item::new("identity");
/// Chain address prefix, for signer address derivation
pub const ADDR_PREFIX: Item<String> = Item::new("addr_prefix");
/// One role per principal, absence means `Role::None`
pub const ROLES: Map<&Addr, Role> = Map::new("roles");
/// Call fingerprint to the nonce of its next signed execution
pub const NONCES: Map<&[u8], Nonce> = Map::new("nonces");
