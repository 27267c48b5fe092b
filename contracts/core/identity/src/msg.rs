pub use delegated_identity::msgs::identity::{
    IdentityExecuteMsg as ExecuteMsg, IdentityInstantiateMsg as InstantiateMsg,
    IdentityQueryMsg as QueryMsg,
};
