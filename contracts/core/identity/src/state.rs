use cosmwasm_std::Addr;
use cw_storage_plus::Item;

/// The only principal allowed to execute through and hand over the identity
pub const OWNER: Item<Addr> = Item::new("owner");
/// Ownership registry the identity registered itself in
pub const REGISTRY: Item<Addr> = Item::new("registry");
