use cosmwasm_std::{Addr, Api};

use crate::func::pubkey::pub_key_to_address;
use crate::types::error::SignatureError;

/// `r || s || v`
pub const SIGNATURE_LENGTH: usize = 65;

/// Recovers the address that produced `signature` over `digest`.
///
/// The recovery id may be given as `0`/`1` or Ethereum style `27`/`28`.
pub fn recover_signer(
    api: &dyn Api,
    addr_prefix: &str,
    digest: &[u8],
    signature: &[u8],
) -> Result<Addr, SignatureError> {
    if signature.len() != SIGNATURE_LENGTH {
        return Err(SignatureError::InvalidLength(signature.len()));
    }
    let (rs, v) = signature.split_at(SIGNATURE_LENGTH - 1);
    let recovery_param = match v[0] {
        0 | 1 => v[0],
        27 | 28 => v[0] - 27,
        other => return Err(SignatureError::InvalidRecoveryId(other)),
    };

    let pub_key = api
        .secp256k1_recover_pubkey(digest, rs, recovery_param)
        .map_err(|e| SignatureError::Recover(e.to_string()))?;

    pub_key_to_address(api, addr_prefix, &pub_key)
}
