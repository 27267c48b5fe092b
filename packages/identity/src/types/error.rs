use cosmwasm_std::StdError;
use thiserror::Error;

/// Signature decoding and signer recovery errors
#[derive(Error, Debug, PartialEq)]
pub enum SignatureError {
    #[error("{0}")]
    Std(#[from] StdError),
    #[error("SignatureLengthIsNotValid: expected 65 bytes, got {0}")]
    InvalidLength(usize),
    #[error("RecoveryIdIsNotValid: {0}")]
    InvalidRecoveryId(u8),
    #[error("PubKeyRecoveryError: {0}")]
    Recover(String),
    #[error("PubKeyLengthIsNotValid")]
    PubKeyLengthIsNotValid {},
    #[error("AddressEncodingError: {0}")]
    AddressEncoding(String),
}
