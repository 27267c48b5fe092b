use cosmwasm_std::StdError;
use cw_utils::PaymentError;
use delegated_identity::types::error::SignatureError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),
    #[error("{0}")]
    Payment(#[from] PaymentError),
    #[error("Unauthorized")]
    Unauthorized {},
    #[error("InvalidSignature: {0}")]
    InvalidSignature(#[from] SignatureError),
    #[error("ForwardFailed: {reason}")]
    ForwardFailed { reason: String },
    #[error("InvalidReplyId")]
    InvalidReplyId {},
}
