use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),
    #[error("Unauthorized")]
    Unauthorized {},
    #[error("ForwardFailed: {reason}")]
    ForwardFailed { reason: String },
    #[error("InvalidReplyId")]
    InvalidReplyId {},
}
