use cosmwasm_std::{OverflowError, StdError};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Insufficient balance: have {balance}, requested {amount}")]
    InsufficientBalance { balance: String, amount: String },

    #[error("Insufficient attached value: need {need}, got {have}")]
    InsufficientValue { need: String, have: String },
}
