pub mod error;
pub mod factory;
pub mod identity;
pub mod manager;
pub mod role;
