use cosmwasm_std::StdError;
use cw_utils::ParseReplyError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),
    #[error("{0}")]
    ParseReply(#[from] ParseReplyError),
    #[error("InvalidReplyId")]
    InvalidReplyId {},
    #[error("NoPendingCreation")]
    NoPendingCreation {},
}
