//! A small chain simulator for contracts that talk through asynchronous messages.
//!
//! Every delivered message is one [`Transaction`]. Messages a handler emits are
//! queued and delivered in later transactions, breadth-first. A failed
//! bounceable message is returned to its sender as a bounce carrying the
//! original body and whatever value was left after the compute fee.

mod contracts;
mod sandbox;
mod transactions;

pub use crate::contracts::{AnyResult, Contract, ContractWrapper};
pub use crate::sandbox::{Sandbox, SandboxConfig};
pub use crate::transactions::{SendResult, Transaction, TxFilter};
