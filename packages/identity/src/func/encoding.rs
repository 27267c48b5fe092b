//! Canonical, injective encodings of forwarded calls.
//!
//! Every variable length field is length-prefixed so that no two distinct
//! tuples share an encoding, e.g. `("ab", "c")` and `("a", "bc")`.
use cosmwasm_std::Coin;
use sha2::{Digest, Sha256};

use crate::types::manager::Nonce;

/// Digest identifying *what* is called, never *who* calls it
pub type Fingerprint = [u8; 32];

#[derive(Default)]
pub struct CallEncoder {
    buf: Vec<u8>,
}

impl CallEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a big-endian `u32` length followed by the bytes
    pub fn bytes(mut self, bytes: &[u8]) -> Self {
        self.buf
            .extend_from_slice(&(bytes.len() as u32).to_be_bytes());
        self.buf.extend_from_slice(bytes);
        self
    }

    /// Writes the coin count, then denom and 16 bytes amount per coin, in the given order
    pub fn coins(mut self, coins: &[Coin]) -> Self {
        self.buf
            .extend_from_slice(&(coins.len() as u32).to_be_bytes());
        for coin in coins {
            self = self.bytes(coin.denom.as_bytes());
            self.buf.extend_from_slice(&coin.amount.u128().to_be_bytes());
        }
        self
    }

    pub fn nonce(mut self, nonce: Nonce) -> Self {
        self.buf.extend_from_slice(&nonce.to_be_bytes());
        self
    }

    pub fn finish(self) -> Vec<u8> {
        self.buf
    }

    pub fn sha256(self) -> [u8; 32] {
        Sha256::digest(self.finish()).into()
    }
}

/// Key of the nonce table: `sha256(target, value, data)`
pub fn fingerprint(target: &str, value: &[Coin], data: &[u8]) -> Fingerprint {
    CallEncoder::new()
        .bytes(target.as_bytes())
        .coins(value)
        .bytes(data)
        .sha256()
}

/// The digest an `Action` principal signs to authorize one execution:
/// `sha256(manager, target, value, data, nonce)`
pub fn authorization_digest(
    manager: &str,
    target: &str,
    value: &[Coin],
    data: &[u8],
    nonce: Nonce,
) -> [u8; 32] {
    CallEncoder::new()
        .bytes(manager.as_bytes())
        .bytes(target.as_bytes())
        .coins(value)
        .bytes(data)
        .nonce(nonce)
        .sha256()
}
