pub use delegated_identity::msgs::factory::{
    FactoryExecuteMsg as ExecuteMsg, FactoryInstantiateMsg as InstantiateMsg,
    FactoryQueryMsg as QueryMsg,
};
