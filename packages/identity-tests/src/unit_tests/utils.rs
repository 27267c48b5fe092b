mod helpers;
mod suite;

pub use helpers::*;
pub use suite::*;
pub use vars::*;
