use crate::unit_tests::utils::*;

const CREATED: &str = "wasm-delegated_identity.factory.v1.MsgCreateIdentityWithManager";

fn instantiate_factory(suite: &IdentityTestSuite) -> Addr {
    let factory_code_id = suite.app.app_mut().store_code(contract_factory());
    suite
        .app
        .app_mut()
        .instantiate_contract(
            factory_code_id,
            Addr::unchecked(DEPLOYER),
            &FactoryInstantiateMsg {
                identity_code_id: suite.identity_code_id,
                manager_code_id: suite.manager_code_id,
                registry: suite.registry.to_string(),
                addr_prefix: ADDR_PREFIX.into(),
            },
            &[],
            "Identity Factory",
            None,
        )
        .unwrap()
}

fn create(suite: &IdentityTestSuite, factory: &Addr, creator: &str) -> (Addr, Addr) {
    let res = suite
        .app
        .app_mut()
        .execute_contract(
            Addr::unchecked(creator),
            factory.clone(),
            &FactoryExecuteMsg::CreateIdentityWithManager {},
            &[],
        )
        .unwrap();
    let identity = event_attr(&res, CREATED, "identity").unwrap();
    let manager = event_attr(&res, CREATED, "manager").unwrap();
    (Addr::unchecked(identity), Addr::unchecked(manager))
}

#[test]
fn factory_instantiates_with_config() {
    let suite = IdentityTestSuite::new();
    let factory = instantiate_factory(&suite);
    let app = suite.app.app();
    let querier = app.wrap();

    let config: FactoryConfig = querier
        .query_wasm_smart(&factory, &FactoryQueryMsg::Config {})
        .unwrap();
    assert_eq!(config.identity_code_id, suite.identity_code_id);
    assert_eq!(config.manager_code_id, suite.manager_code_id);
    assert_eq!(config.registry, suite.registry);

    let total: u64 = querier
        .query_wasm_smart(&factory, &FactoryQueryMsg::TotalCreated {})
        .unwrap();
    assert_eq!(total, 0);
}

#[test]
fn creates_identity_owned_by_its_manager() {
    let suite = IdentityTestSuite::new();
    let factory = instantiate_factory(&suite);

    let (identity, manager) = create(&suite, &factory, CREATOR);
    let app = suite.app.app();
    let querier = app.wrap();

    let owner: Addr = querier
        .query_wasm_smart(&identity, &IdentityQueryMsg::Owner {})
        .unwrap();
    assert_eq!(owner, manager);

    let info: ManagerInfo = querier
        .query_wasm_smart(&manager, &ManagerQueryMsg::Info {})
        .unwrap();
    assert_eq!(info.identity, identity);

    let role: Role = querier
        .query_wasm_smart(
            &manager,
            &ManagerQueryMsg::Role {
                principal: CREATOR.into(),
            },
        )
        .unwrap();
    assert_eq!(role, Role::Owner);

    // the factory keeps no role and no ownership
    let role: Role = querier
        .query_wasm_smart(
            &manager,
            &ManagerQueryMsg::Role {
                principal: factory.to_string(),
            },
        )
        .unwrap();
    assert_eq!(role, Role::None);

    let manager_of: Option<Addr> = querier
        .query_wasm_smart(
            &factory,
            &FactoryQueryMsg::ManagerOf {
                identity: identity.to_string(),
            },
        )
        .unwrap();
    assert_eq!(manager_of, Some(manager));

    let total: u64 = querier
        .query_wasm_smart(&factory, &FactoryQueryMsg::TotalCreated {})
        .unwrap();
    assert_eq!(total, 1);

    let registered = OwnershipRegistryProxy::new(suite.registry.clone(), &suite.app)
        .owner_of(identity.to_string())
        .unwrap();
    assert_eq!(registered, identity);
}

#[test]
fn created_identity_is_usable_by_its_creator() {
    let suite = IdentityTestSuite::new();
    let factory = instantiate_factory(&suite);
    let (_, manager) = create(&suite, &factory, CREATOR);

    suite
        .manager_execute(
            &manager,
            CREATOR,
            ManagerExecuteMsg::AddRole {
                principal: ACTOR.into(),
                role: Role::Action,
            },
        )
        .unwrap();
    suite
        .manager_execute(
            &manager,
            ACTOR,
            ManagerExecuteMsg::Execute {
                target: suite.counter.to_string(),
                value: vec![],
                data: increment_msg(),
            },
        )
        .unwrap();

    assert_eq!(suite.count(), 1);
}

#[test]
fn each_creation_is_independent() {
    let suite = IdentityTestSuite::new();
    let factory = instantiate_factory(&suite);

    let (first_identity, first_manager) = create(&suite, &factory, CREATOR);
    let (second_identity, second_manager) = create(&suite, &factory, STRANGER);

    assert_ne!(first_identity, second_identity);
    assert_ne!(first_manager, second_manager);

    let total: u64 = suite
        .app
        .app()
        .wrap()
        .query_wasm_smart(&factory, &FactoryQueryMsg::TotalCreated {})
        .unwrap();
    assert_eq!(total, 2);

    // the creator of one has no say over the other
    suite
        .manager_execute(
            &second_manager,
            CREATOR,
            ManagerExecuteMsg::AddRole {
                principal: ACTOR.into(),
                role: Role::Action,
            },
        )
        .unwrap_err();
}
