pub mod contract;
mod error;
pub mod helpers;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;


// set resasonobly high value to not interfere with forwarded replies
/// Used to spot the reply of the forwarded call
pub(crate) const FORWARD_REPLY_ID: u64 = u64::MAX;
