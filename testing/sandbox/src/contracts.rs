use std::error::Error as StdErrorTrait;

use anyhow::bail;
use cosmwasm_std::{from_json, Binary, Deps, DepsMut, Env, MessageInfo, Response};
use jetton::Bounced;
use serde::de::DeserializeOwned;

pub type AnyResult<T = ()> = anyhow::Result<T>;

/// Contract code as the sandbox sees it: raw message bytes in, a Response out.
pub trait Contract {
    fn instantiate(&self, deps: DepsMut, env: Env, info: MessageInfo, msg: &[u8]) -> AnyResult<Response>;

    fn execute(&self, deps: DepsMut, env: Env, info: MessageInfo, msg: &[u8]) -> AnyResult<Response>;

    /// Bare value transfer with no body.
    fn receive(&self, deps: DepsMut, env: Env, info: MessageInfo) -> AnyResult<Response>;

    /// A bounceable message this contract sent has failed.
    fn bounce(&self, deps: DepsMut, env: Env, msg: Bounced) -> AnyResult<Response>;

    fn query(&self, deps: Deps, env: Env, msg: &[u8]) -> AnyResult<Binary>;
}

type ContractFn<T, E> = fn(DepsMut, Env, MessageInfo, T) -> Result<Response, E>;
type QueryFn<T, E> = fn(Deps, Env, T) -> Result<Binary, E>;
type ReceiveFn<E> = fn(DepsMut, Env, MessageInfo) -> Result<Response, E>;
type BounceFn<E> = fn(DepsMut, Env, Bounced) -> Result<Response, E>;

/// Adapts typed entry points (`contract::execute`, `contract::instantiate`, ...)
/// to [`Contract`].
pub struct ContractWrapper<T1, T2, T3, E1, E2, E3> {
    execute_fn: ContractFn<T1, E1>,
    instantiate_fn: ContractFn<T2, E2>,
    query_fn: QueryFn<T3, E3>,
    receive_fn: Option<ReceiveFn<E1>>,
    bounce_fn: Option<BounceFn<E1>>,
}

impl<T1, T2, T3, E1, E2, E3> ContractWrapper<T1, T2, T3, E1, E2, E3>
where
    T1: DeserializeOwned,
    T2: DeserializeOwned,
    T3: DeserializeOwned,
    E1: StdErrorTrait + Send + Sync + 'static,
    E2: StdErrorTrait + Send + Sync + 'static,
    E3: StdErrorTrait + Send + Sync + 'static,
{
    pub fn new(
        execute_fn: ContractFn<T1, E1>,
        instantiate_fn: ContractFn<T2, E2>,
        query_fn: QueryFn<T3, E3>,
    ) -> Self {
        Self {
            execute_fn,
            instantiate_fn,
            query_fn,
            receive_fn: None,
            bounce_fn: None,
        }
    }

    /// Without it, bare value transfers to the contract fail.
    pub fn with_receive(mut self, receive_fn: ReceiveFn<E1>) -> Self {
        self.receive_fn = Some(receive_fn);
        self
    }

    /// Without it, bounces are accepted and ignored.
    pub fn with_bounce(mut self, bounce_fn: BounceFn<E1>) -> Self {
        self.bounce_fn = Some(bounce_fn);
        self
    }
}

impl<T1, T2, T3, E1, E2, E3> Contract for ContractWrapper<T1, T2, T3, E1, E2, E3>
where
    T1: DeserializeOwned,
    T2: DeserializeOwned,
    T3: DeserializeOwned,
    E1: StdErrorTrait + Send + Sync + 'static,
    E2: StdErrorTrait + Send + Sync + 'static,
    E3: StdErrorTrait + Send + Sync + 'static,
{
    fn instantiate(&self, deps: DepsMut, env: Env, info: MessageInfo, msg: &[u8]) -> AnyResult<Response> {
        let msg: T2 = from_json(msg)?;
        Ok((self.instantiate_fn)(deps, env, info, msg)?)
    }

    fn execute(&self, deps: DepsMut, env: Env, info: MessageInfo, msg: &[u8]) -> AnyResult<Response> {
        let msg: T1 = from_json(msg)?;
        Ok((self.execute_fn)(deps, env, info, msg)?)
    }

    fn receive(&self, deps: DepsMut, env: Env, info: MessageInfo) -> AnyResult<Response> {
        match self.receive_fn {
            Some(receive_fn) => Ok(receive_fn(deps, env, info)?),
            None => bail!("contract does not accept bare value transfers"),
        }
    }

    fn bounce(&self, deps: DepsMut, env: Env, msg: Bounced) -> AnyResult<Response> {
        match self.bounce_fn {
            Some(bounce_fn) => Ok(bounce_fn(deps, env, msg)?),
            None => Ok(Response::new()),
        }
    }

    fn query(&self, deps: Deps, env: Env, msg: &[u8]) -> AnyResult<Binary> {
        let msg: T3 = from_json(msg)?;
        Ok((self.query_fn)(deps, env, msg)?)
    }
}
