use cosmwasm_std::{DivideByZeroError, OverflowError, StdError};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    DivideByZero(#[from] DivideByZeroError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid ICO configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("ICO is not active")]
    SaleNotActive,

    #[error("ICO window is closed: now {now}, window [{start_time}, {end_time})")]
    SaleNotOngoing {
        now: u64,
        start_time: u64,
        end_time: u64,
    },

    #[error("ICO cannot be finalized before {end_time} unless the hard cap is reached")]
    SaleNotEnded { end_time: u64 },

    #[error("Minting is closed")]
    MintingClosed,

    #[error("Mint amount must be greater than zero")]
    ZeroAmount,

    #[error("Insufficient funds: need {need}, got {have}")]
    InsufficientFunds { need: String, have: String },

    #[error("Purchase exceeds hard cap of {hard_cap}: sold {sold}, requested {requested}")]
    CapExceeded {
        hard_cap: String,
        sold: String,
        requested: String,
    },

    #[error("Max supply of {max_supply} exceeded: supply {supply}, requested {requested}")]
    MaxSupplyExceeded {
        max_supply: String,
        supply: String,
        requested: String,
    },
}
