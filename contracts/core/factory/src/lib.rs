pub mod contract;
mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;


/// Used to spot the identity instantiate reply
pub(crate) const IDENTITY_INSTANTIATE_ID: u64 = u64::MAX;
/// Used to spot the manager instantiate reply
pub(crate) const MANAGER_INSTANTIATE_ID: u64 = u64::MAX - 1u64;
