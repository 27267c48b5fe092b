pub use delegated_identity::msgs::manager::{
    ManagerExecuteMsg as ExecuteMsg, ManagerInstantiateMsg as InstantiateMsg,
    ManagerQueryMsg as QueryMsg,
};
