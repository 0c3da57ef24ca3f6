use std::fmt;

use cosmwasm_std::{Addr, Attribute, Event, Uint128};

/// One delivered message.
#[derive(Clone, Debug, PartialEq)]
pub struct Transaction {
    /// Logical time; strictly increasing across the sandbox.
    pub lt: u64,
    pub from: Addr,
    pub to: Addr,
    /// Value attached to the message, before any fee.
    pub value: Uint128,
    /// The message created the contract at `to`.
    pub deploy: bool,
    pub success: bool,
    /// The message is a bounce of an earlier failed one.
    pub bounced: bool,
    pub error: Option<String>,
    pub attributes: Vec<Attribute>,
    pub events: Vec<Event>,
}

impl Transaction {
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} -> {} value={} deploy={} success={} bounced={}",
            self.lt, self.from, self.to, self.value, self.deploy, self.success, self.bounced
        )?;
        if let Some(err) = &self.error {
            write!(f, " error=\"{}\"", err)?;
        }
        for attr in &self.attributes {
            write!(f, " {}={}", attr.key, attr.value)?;
        }
        Ok(())
    }
}

/// Everything a single external send caused, in delivery order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SendResult {
    pub transactions: Vec<Transaction>,
}

impl SendResult {
    pub fn has_transaction(&self, filter: &TxFilter) -> bool {
        self.find(filter).is_some()
    }

    pub fn find(&self, filter: &TxFilter) -> Option<&Transaction> {
        self.transactions.iter().find(|tx| filter.matches(tx))
    }

    pub fn count(&self, filter: &TxFilter) -> usize {
        self.transactions.iter().filter(|tx| filter.matches(tx)).count()
    }
}

impl fmt::Display for SendResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tx in &self.transactions {
            writeln!(f, "{}", tx)?;
        }
        Ok(())
    }
}

/// Partial match on a transaction; unset fields match anything.
#[derive(Clone, Debug, Default)]
pub struct TxFilter {
    from: Option<Addr>,
    to: Option<Addr>,
    deploy: Option<bool>,
    success: Option<bool>,
    bounced: Option<bool>,
}

impl TxFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from(mut self, addr: &Addr) -> Self {
        self.from = Some(addr.clone());
        self
    }

    pub fn to(mut self, addr: &Addr) -> Self {
        self.to = Some(addr.clone());
        self
    }

    pub fn deploy(mut self, deploy: bool) -> Self {
        self.deploy = Some(deploy);
        self
    }

    pub fn success(mut self, success: bool) -> Self {
        self.success = Some(success);
        self
    }

    pub fn bounced(mut self, bounced: bool) -> Self {
        self.bounced = Some(bounced);
        self
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        self.from.as_ref().map_or(true, |a| *a == tx.from)
            && self.to.as_ref().map_or(true, |a| *a == tx.to)
            && self.deploy.map_or(true, |d| d == tx.deploy)
            && self.success.map_or(true, |s| s == tx.success)
            && self.bounced.map_or(true, |b| b == tx.bounced)
    }
}
