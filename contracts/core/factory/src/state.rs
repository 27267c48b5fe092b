use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};
use delegated_identity::types::factory::FactoryConfig;

pub const CONFIG: Item<FactoryConfig> = Item::new("config");
/// The total number of identities successfully created by the factory
/// i.e. if creation fail, this is not incremented
pub const TOTAL_CREATED: Item<u64> = Item::new("total_created");
/// Identity to the manager created along with it
pub const MANAGERS: Map<&Addr, Addr> = Map::new("managers");

// Tmp storage
#[cw_serde]
pub struct PendingCreation {
    pub creator: Addr,
    pub identity: Option<Addr>,
}

pub const PENDING: Item<PendingCreation> = Item::new("pending");
