use bech32::{ToBase32, Variant};
use cosmwasm_std::{Addr, Api};
use ripemd160::{Digest as Ripemd160Digest, Ripemd160};
use sha2::{Digest, Sha256};

use crate::types::error::SignatureError;

/// Converts a secp256k1 pubkey into the Cosmos SDK account address,
/// `bech32(prefix, ripemd160(sha256(compressed_pubkey)))`
pub fn pub_key_to_address(
    api: &dyn Api,
    addr_prefix: &str,
    pub_key: &[u8],
) -> Result<Addr, SignatureError> {
    let compressed_pub_key = to_compressed_pub_key(pub_key)?;
    let mut ripemd160_hasher = Ripemd160::new();
    ripemd160_hasher.update(Sha256::digest(&compressed_pub_key));
    let addr_bytes = ripemd160_hasher.finalize().to_vec();
    let addr_str = bech32::encode(addr_prefix, addr_bytes.to_base32(), Variant::Bech32)
        .map_err(|e| SignatureError::AddressEncoding(e.to_string()))?;
    Ok(api.addr_validate(&addr_str)?)
}

/// Converts uncompressed pub key into compressed one
pub fn to_compressed_pub_key(pub_key: &[u8]) -> Result<Vec<u8>, SignatureError> {
    match pub_key.len() {
        // compressed
        33 => Ok(pub_key.to_vec()),
        // uncompressed: 0x04 || x || y
        65 => {
            let prefix = if pub_key[64] & 1 == 0 { 0x02 } else { 0x03 };
            let mut pub_key_compressed = Vec::with_capacity(33);
            pub_key_compressed.push(prefix);
            pub_key_compressed.extend_from_slice(&pub_key[1..33]);
            Ok(pub_key_compressed)
        }
        _ => Err(SignatureError::PubKeyLengthIsNotValid {}),
    }
}
