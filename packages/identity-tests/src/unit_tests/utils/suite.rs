use super::*;

pub struct IdentityTestSuite {
    pub app: App<BasicApp>,
    pub identity_code_id: u64,
    pub manager_code_id: u64,
    pub registry: Addr,
    pub counter: Addr,
    pub claims: Addr,
    // owned by `OWNER`
    pub identity: Addr,
}

impl IdentityTestSuite {
    pub fn new() -> Self {
        let app = App::default();

        let registry = OwnershipRegistryCodeId::store_code(&app)
            .instantiate()
            .with_label("Ownership Registry")
            .call(DEPLOYER)
            .unwrap()
            .contract_addr;
        let counter = CounterCodeId::store_code(&app)
            .instantiate()
            .with_label("Counter")
            .call(DEPLOYER)
            .unwrap()
            .contract_addr;
        let claims = ClaimRegistryCodeId::store_code(&app)
            .instantiate()
            .with_label("Claims")
            .call(DEPLOYER)
            .unwrap()
            .contract_addr;

        let identity_code_id = app.app_mut().store_code(contract_identity());
        let manager_code_id = app.app_mut().store_code(contract_manager());

        let identity = app
            .app_mut()
            .instantiate_contract(
                identity_code_id,
                Addr::unchecked(DEPLOYER),
                &IdentityInstantiateMsg {
                    owner: OWNER.into(),
                    registry: registry.to_string(),
                },
                &[],
                "Identity",
                None,
            )
            .unwrap();

        Self {
            app,
            identity_code_id,
            manager_code_id,
            registry,
            counter,
            claims,
            identity,
        }
    }

    /// Instantiates a manager with `OWNER` as its owner, without handing it the identity
    pub fn instantiate_manager(&self) -> Addr {
        self.app
            .app_mut()
            .instantiate_contract(
                self.manager_code_id,
                Addr::unchecked(DEPLOYER),
                &ManagerInstantiateMsg {
                    identity: self.identity.to_string(),
                    owner: OWNER.into(),
                    addr_prefix: ADDR_PREFIX.into(),
                },
                &[],
                "Identity Manager",
                None,
            )
            .unwrap()
    }

    /// Manager owning the identity, `OWNER` is its `Owner`
    pub fn with_manager(&self) -> Addr {
        let manager = self.instantiate_manager();
        self.identity_execute(
            OWNER,
            IdentityExecuteMsg::TransferOwnership {
                new_owner: manager.to_string(),
            },
        )
        .unwrap();
        manager
    }

    pub fn identity_execute(
        &self,
        sender: &str,
        msg: IdentityExecuteMsg,
    ) -> anyhow::Result<AppResponse> {
        self.app.app_mut().execute_contract(
            Addr::unchecked(sender),
            self.identity.clone(),
            &msg,
            &[],
        )
    }

    pub fn manager_execute(
        &self,
        manager: &Addr,
        sender: &str,
        msg: ManagerExecuteMsg,
    ) -> anyhow::Result<AppResponse> {
        self.app
            .app_mut()
            .execute_contract(Addr::unchecked(sender), manager.clone(), &msg, &[])
    }

    pub fn add_role(&self, manager: &Addr, principal: &str, role: Role) {
        self.manager_execute(
            manager,
            OWNER,
            ManagerExecuteMsg::AddRole {
                principal: principal.into(),
                role,
            },
        )
        .unwrap();
    }

    pub fn identity_owner(&self) -> Addr {
        self.app
            .app()
            .wrap()
            .query_wasm_smart(&self.identity, &IdentityQueryMsg::Owner {})
            .unwrap()
    }

    pub fn nonce(&self, manager: &Addr, data: &Binary) -> Nonce {
        self.app
            .app()
            .wrap()
            .query_wasm_smart(
                manager,
                &ManagerQueryMsg::Nonce {
                    target: self.counter.to_string(),
                    value: vec![],
                    data: data.clone(),
                },
            )
            .unwrap()
    }

    pub fn count(&self) -> u64 {
        CounterProxy::new(self.counter.clone(), &self.app)
            .count()
            .unwrap()
    }

    pub fn fund(&self, addr: &Addr, amount: u128) {
        self.app
            .app_mut()
            .init_modules(|router, _, storage| {
                router
                    .bank
                    .init_balance(storage, addr, coins(amount, DENOM))
            })
            .unwrap();
    }

    pub fn balance(&self, addr: &Addr) -> Uint128 {
        self.app
            .app()
            .wrap()
            .query_balance(addr, DENOM)
            .unwrap()
            .amount
    }
}
