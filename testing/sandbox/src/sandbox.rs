use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;

use anyhow::{anyhow, bail};
use cosmwasm_std::testing::{MockApi, MockQuerier};
use cosmwasm_std::{
    from_json, to_json_binary, Addr, BankMsg, Binary, BlockInfo, Coin, ContractInfo, CosmosMsg,
    Deps, DepsMut, Empty, Env, MemoryStorage, MessageInfo, Order, QuerierWrapper, Response,
    StdError, StdResult, Storage, Timestamp, Uint128, WasmMsg,
};
use jetton::{contract_address, native_funds, Bounced, CONTRACT_ADDR_PREFIX, NATIVE_DENOM, ONE_TOKEN};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::contracts::{AnyResult, Contract};
use crate::transactions::{SendResult, Transaction};

#[derive(Clone, Debug)]
pub struct SandboxConfig {
    /// Charged on every execute or bare-value delivery to a contract, from
    /// the value first, then the contract balance. Unpaid fee fails the delivery.
    pub compute_fee: Uint128,
    pub block_time: Timestamp,
    pub chain_id: String,
    /// Starting balance of every account created by `treasury`.
    pub treasury_balance: Uint128,
    /// Upper bound on deliveries caused by a single external send.
    pub max_messages: usize,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            compute_fee: Uint128::new(10_000_000),
            block_time: Timestamp::from_seconds(1_700_000_000),
            chain_id: "sandbox-1".to_string(),
            treasury_balance: Uint128::new(1_000_000 * ONE_TOKEN),
            max_messages: 1_000,
        }
    }
}

enum Payload {
    Deploy { code_id: u64, msg: Binary },
    Execute(Binary),
    Transfer,
    Bounced(Binary),
}

impl Payload {
    fn body(&self) -> Binary {
        match self {
            Payload::Deploy { msg, .. } => msg.clone(),
            Payload::Execute(body) | Payload::Bounced(body) => body.clone(),
            Payload::Transfer => Binary::default(),
        }
    }

    fn pays_fee(&self) -> bool {
        matches!(self, Payload::Execute(_) | Payload::Transfer)
    }
}

struct Envelope {
    from: Addr,
    to: Addr,
    value: Uint128,
    payload: Payload,
    bounceable: bool,
}

struct Instance {
    code_id: u64,
    storage: MemoryStorage,
}

pub struct Sandbox {
    config: SandboxConfig,
    codes: Vec<Rc<dyn Contract>>,
    contracts: BTreeMap<Addr, Instance>,
    balances: BTreeMap<Addr, Uint128>,
    api: MockApi,
    querier: MockQuerier<Empty>,
    block_time: Timestamp,
    block_height: u64,
    lt: u64,
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new(SandboxConfig::default())
    }
}

impl Sandbox {
    pub fn new(config: SandboxConfig) -> Self {
        Self {
            block_time: config.block_time,
            config,
            codes: vec![],
            contracts: BTreeMap::new(),
            balances: BTreeMap::new(),
            api: MockApi::default(),
            querier: MockQuerier::new(&[]),
            block_height: 1,
            lt: 0,
        }
    }

    pub fn config(&self) -> &SandboxConfig {
        &self.config
    }

    /// Registers contract code. Code ids start at 1.
    pub fn store_code(&mut self, code: Box<dyn Contract>) -> u64 {
        self.codes.push(Rc::from(code));
        self.codes.len() as u64
    }

    /// Plain account funded with `treasury_balance` on first use.
    pub fn treasury(&mut self, name: &str) -> Addr {
        let addr = Addr::unchecked(name);
        self.balances
            .entry(addr.clone())
            .or_insert(self.config.treasury_balance);
        addr
    }

    /// Deploys `code_id` with `init` at the address derived from both.
    pub fn deploy<T: Serialize>(
        &mut self,
        sender: &Addr,
        code_id: u64,
        init: &T,
        value: Uint128,
    ) -> AnyResult<(Addr, SendResult)> {
        if self.code(code_id).is_none() {
            bail!("unknown code id {}", code_id);
        }
        let msg = to_json_binary(init)?;
        let addr = contract_address(code_id, msg.as_slice());
        let result = self.send_envelope(Envelope {
            from: sender.clone(),
            to: addr.clone(),
            value,
            payload: Payload::Deploy { code_id, msg },
            bounceable: true,
        })?;
        Ok((addr, result))
    }

    /// External bounceable message with a JSON body.
    pub fn send<T: Serialize>(
        &mut self,
        sender: &Addr,
        to: &Addr,
        value: Uint128,
        body: &T,
    ) -> AnyResult<SendResult> {
        self.send_envelope(Envelope {
            from: sender.clone(),
            to: to.clone(),
            value,
            payload: Payload::Execute(to_json_binary(body)?),
            bounceable: true,
        })
    }

    /// External bounceable transfer with no body.
    pub fn send_value(&mut self, sender: &Addr, to: &Addr, value: Uint128) -> AnyResult<SendResult> {
        self.send_envelope(Envelope {
            from: sender.clone(),
            to: to.clone(),
            value,
            payload: Payload::Transfer,
            bounceable: true,
        })
    }

    pub fn query<T: DeserializeOwned, Q: Serialize>(&self, contract: &Addr, msg: &Q) -> StdResult<T> {
        let instance = self
            .contracts
            .get(contract)
            .ok_or_else(|| StdError::generic_err(format!("no contract at {}", contract)))?;
        let code = self
            .code(instance.code_id)
            .ok_or_else(|| StdError::generic_err(format!("unknown code id {}", instance.code_id)))?;
        let deps = Deps {
            storage: &instance.storage,
            api: &self.api,
            querier: QuerierWrapper::new(&self.querier),
        };
        let res = code
            .query(deps, self.env(contract), to_json_binary(msg)?.as_slice())
            .map_err(|err| StdError::generic_err(err.to_string()))?;
        from_json(res)
    }

    pub fn balance(&self, addr: &Addr) -> Uint128 {
        self.balances.get(addr).copied().unwrap_or_default()
    }

    pub fn is_deployed(&self, addr: &Addr) -> bool {
        self.contracts.contains_key(addr)
    }

    pub fn block_time(&self) -> Timestamp {
        self.block_time
    }

    pub fn set_block_time(&mut self, time: Timestamp) {
        self.block_time = time;
        self.block_height += 1;
    }

    pub fn advance_time(&mut self, seconds: u64) {
        self.set_block_time(self.block_time.plus_seconds(seconds));
    }

    fn code(&self, code_id: u64) -> Option<Rc<dyn Contract>> {
        let index = usize::try_from(code_id).ok()?.checked_sub(1)?;
        self.codes.get(index).cloned()
    }

    fn env(&self, contract: &Addr) -> Env {
        Env {
            block: BlockInfo {
                height: self.block_height,
                time: self.block_time,
                chain_id: self.config.chain_id.clone(),
            },
            transaction: None,
            contract: ContractInfo {
                address: contract.clone(),
            },
        }
    }

    fn credit(&mut self, addr: &Addr, amount: Uint128) {
        let balance = self.balances.entry(addr.clone()).or_default();
        *balance = balance.saturating_add(amount);
    }

    fn debit(&mut self, addr: &Addr, amount: Uint128) {
        let balance = self.balances.entry(addr.clone()).or_default();
        *balance = balance.saturating_sub(amount);
    }

    fn send_envelope(&mut self, envelope: Envelope) -> AnyResult<SendResult> {
        let available = self.balance(&envelope.from);
        if available < envelope.value {
            bail!(
                "{} cannot send {}: balance is {}",
                envelope.from,
                envelope.value,
                available
            );
        }
        self.debit(&envelope.from, envelope.value);
        self.run(envelope)
    }

    /// Drains the queue breadth-first.
    fn run(&mut self, first: Envelope) -> AnyResult<SendResult> {
        let mut queue = VecDeque::from([first]);
        let mut result = SendResult::default();

        while let Some(envelope) = queue.pop_front() {
            if result.transactions.len() >= self.config.max_messages {
                bail!(
                    "message cascade exceeded {} deliveries:\n{}",
                    self.config.max_messages,
                    result
                );
            }
            let (tx, outgoing) = self.deliver(envelope);
            result.transactions.push(tx);
            queue.extend(outgoing);
        }

        Ok(result)
    }

    fn deliver(&mut self, envelope: Envelope) -> (Transaction, Vec<Envelope>) {
        self.lt += 1;
        let mut tx = Transaction {
            lt: self.lt,
            from: envelope.from.clone(),
            to: envelope.to.clone(),
            value: envelope.value,
            deploy: false,
            success: false,
            bounced: matches!(envelope.payload, Payload::Bounced(_)),
            error: None,
            attributes: vec![],
            events: vec![],
        };

        let existing = self.contracts.get(&envelope.to).map(|instance| instance.code_id);
        let code_id = match (&envelope.payload, existing) {
            (Payload::Deploy { .. }, Some(_)) => {
                self.credit(&envelope.to, envelope.value);
                tx.success = true;
                return (tx, vec![]);
            }
            (Payload::Deploy { code_id, .. }, None) => {
                tx.deploy = true;
                *code_id
            }
            (_, Some(code_id)) => code_id,
            (Payload::Execute(_), None) if is_contract_address(&envelope.to) => {
                tx.error = Some(format!("no contract at {}", envelope.to));
                let bounce = bounce_of(&envelope, envelope.value);
                return (tx, bounce.into_iter().collect());
            }
            // plain account, or value parked at a future contract address
            (_, None) => {
                self.credit(&envelope.to, envelope.value);
                tx.success = true;
                return (tx, vec![]);
            }
        };

        let fee = if envelope.payload.pays_fee() {
            self.config.compute_fee
        } else {
            Uint128::zero()
        };
        let fee_from_value = fee.min(envelope.value);
        let fee_from_balance = fee - fee_from_value;
        let available = self.balance(&envelope.to);
        if available < fee_from_balance {
            tx.error = Some(format!(
                "{} cannot pay compute fee {}: value {}, balance {}",
                envelope.to, fee, envelope.value, available
            ));
            let bounce = bounce_of(&envelope, Uint128::zero());
            return (tx, bounce.into_iter().collect());
        }
        let value = envelope.value - fee_from_value;
        self.credit(&envelope.to, value);
        self.debit(&envelope.to, fee_from_balance);

        match self.execute_handler(&envelope, code_id, value) {
            Ok((storage, res, outgoing, spent)) => {
                self.debit(&envelope.to, spent);
                self.contracts
                    .insert(envelope.to.clone(), Instance { code_id, storage });
                tx.success = true;
                tx.attributes = res.attributes;
                tx.events = res.events;
                (tx, outgoing)
            }
            Err(err) => {
                tx.deploy = false;
                tx.error = Some(err.to_string());
                let bounce = bounce_of(&envelope, value);
                if bounce.is_some() {
                    self.debit(&envelope.to, value);
                }
                (tx, bounce.into_iter().collect())
            }
        }
    }

    /// Runs the handler against a copy of the contract storage. Nothing is
    /// committed here; the caller keeps the copy only on success.
    fn execute_handler(
        &self,
        envelope: &Envelope,
        code_id: u64,
        value: Uint128,
    ) -> AnyResult<(MemoryStorage, Response, Vec<Envelope>, Uint128)> {
        let code = self
            .code(code_id)
            .ok_or_else(|| anyhow!("unknown code id {}", code_id))?;
        let mut storage = match self.contracts.get(&envelope.to) {
            Some(instance) => fork(&instance.storage),
            None => MemoryStorage::new(),
        };

        let env = self.env(&envelope.to);
        let info = MessageInfo {
            sender: envelope.from.clone(),
            funds: native_funds(value),
        };
        let deps = DepsMut {
            storage: &mut storage,
            api: &self.api,
            querier: QuerierWrapper::new(&self.querier),
        };
        let res = match &envelope.payload {
            Payload::Deploy { msg, .. } => code.instantiate(deps, env, info, msg.as_slice())?,
            Payload::Execute(body) => code.execute(deps, env, info, body.as_slice())?,
            Payload::Transfer => code.receive(deps, env, info)?,
            Payload::Bounced(body) => code.bounce(
                deps,
                env,
                Bounced {
                    to: envelope.from.clone(),
                    body: body.clone(),
                    value,
                },
            )?,
        };

        let outgoing = res
            .messages
            .iter()
            .map(|sub| translate(&envelope.to, &sub.msg))
            .collect::<AnyResult<Vec<_>>>()?;
        let spent = outgoing
            .iter()
            .try_fold(Uint128::zero(), |acc, out| acc.checked_add(out.value))?;
        let balance = self.balance(&envelope.to);
        if spent > balance {
            bail!("outgoing value {} exceeds balance {}", spent, balance);
        }

        Ok((storage, res, outgoing, spent))
    }
}

/// Bounce of a failed delivery, if the message asked for one.
fn bounce_of(envelope: &Envelope, value: Uint128) -> Option<Envelope> {
    envelope.bounceable.then(|| Envelope {
        from: envelope.to.clone(),
        to: envelope.from.clone(),
        value,
        payload: Payload::Bounced(envelope.payload.body()),
        bounceable: false,
    })
}

fn translate(sender: &Addr, msg: &CosmosMsg) -> AnyResult<Envelope> {
    let envelope = match msg {
        CosmosMsg::Bank(BankMsg::Send { to_address, amount }) => Envelope {
            from: sender.clone(),
            to: Addr::unchecked(to_address),
            value: native_amount(amount)?,
            payload: Payload::Transfer,
            bounceable: false,
        },
        CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr,
            msg,
            funds,
        }) => Envelope {
            from: sender.clone(),
            to: Addr::unchecked(contract_addr),
            value: native_amount(funds)?,
            payload: Payload::Execute(msg.clone()),
            bounceable: true,
        },
        CosmosMsg::Wasm(WasmMsg::Instantiate {
            code_id, msg, funds, ..
        }) => Envelope {
            from: sender.clone(),
            to: contract_address(*code_id, msg.as_slice()),
            value: native_amount(funds)?,
            payload: Payload::Deploy {
                code_id: *code_id,
                msg: msg.clone(),
            },
            bounceable: true,
        },
        other => bail!("unsupported message: {:?}", other),
    };
    Ok(envelope)
}

fn native_amount(funds: &[Coin]) -> AnyResult<Uint128> {
    funds.iter().try_fold(Uint128::zero(), |acc, coin| {
        if coin.denom != NATIVE_DENOM {
            bail!("unsupported denom {}", coin.denom);
        }
        Ok(acc.checked_add(coin.amount)?)
    })
}

fn is_contract_address(addr: &Addr) -> bool {
    addr.as_str()
        .strip_prefix(CONTRACT_ADDR_PREFIX)
        .map_or(false, |rest| {
            rest.len() == 40 && rest.bytes().all(|b| b.is_ascii_hexdigit())
        })
}

fn fork(storage: &MemoryStorage) -> MemoryStorage {
    let mut copy = MemoryStorage::new();
    for (key, value) in storage.range(None, None, Order::Ascending) {
        copy.set(&key, &value);
    }
    copy
}
