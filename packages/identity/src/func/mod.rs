pub mod encoding;
pub mod forward;
pub mod pubkey;
pub mod signature;
