use secp256k1::{Message, PublicKey, Secp256k1, SecretKey};

use crate::unit_tests::utils::*;

pub fn contract_identity() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        delegated_identity_contract::contract::execute,
        delegated_identity_contract::contract::instantiate,
        delegated_identity_contract::contract::query,
    )
    .with_reply(delegated_identity_contract::contract::reply);
    Box::new(contract)
}

pub fn contract_manager() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        delegated_identity_manager::contract::execute,
        delegated_identity_manager::contract::instantiate,
        delegated_identity_manager::contract::query,
    )
    .with_reply(delegated_identity_manager::contract::reply);
    Box::new(contract)
}

pub fn contract_factory() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        delegated_identity_factory::contract::execute,
        delegated_identity_factory::contract::instantiate,
        delegated_identity_factory::contract::query,
    )
    .with_reply(delegated_identity_factory::contract::reply);
    Box::new(contract)
}

pub fn increment_msg() -> Binary {
    to_json_binary(&CounterExecMsg::Increment {}).unwrap()
}

pub fn fail_msg() -> Binary {
    to_json_binary(&CounterExecMsg::Fail {}).unwrap()
}

/// Value of `key` in the first event of type `ty`
pub fn event_attr(res: &AppResponse, ty: &str, key: &str) -> Option<String> {
    res.events
        .iter()
        .filter(|e| e.ty == ty)
        .flat_map(|e| e.attributes.iter())
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}

/// An off-chain key holder authorizing executions by signature
pub struct Signer {
    key: SecretKey,
    pub addr: Addr,
}

impl Signer {
    pub fn new(secret: &[u8; 32]) -> Self {
        let secp = Secp256k1::new();
        let key = SecretKey::from_slice(secret).unwrap();
        let public_key = PublicKey::from_secret_key(&secp, &key);
        let addr =
            pub_key_to_address(&MockApi::default(), ADDR_PREFIX, &public_key.serialize()).unwrap();
        Self { key, addr }
    }

    pub fn sign(
        &self,
        manager: &Addr,
        target: &Addr,
        value: &[Coin],
        data: &Binary,
        nonce: Nonce,
    ) -> Binary {
        let digest = authorization_digest(manager.as_str(), target.as_str(), value, data, nonce);
        let (recovery_id, rs) = Secp256k1::new()
            .sign_ecdsa_recoverable(&Message::from_slice(&digest).unwrap(), &self.key)
            .serialize_compact();
        let mut signature = rs.to_vec();
        signature.push(recovery_id.to_i32() as u8);
        Binary(signature)
    }
}
