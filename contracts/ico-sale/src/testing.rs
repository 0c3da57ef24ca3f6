#[cfg(test)]
pub mod helpers {
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info, MockApi, MockQuerier, MockStorage};
    use cosmwasm_std::{coins, from_json, Env, OwnedDeps, Response, Timestamp, Uint128};
    use jetton::NATIVE_DENOM;

    use crate::contract::{execute, instantiate, query, receive};
    use crate::error::ContractError;
    use crate::msg::*;

    pub const OWNER: &str = "deployer";
    pub const BUYER: &str = "investor";
    pub const HOLDER: &str = "holder";
    pub const RANDOM_USER: &str = "random_user";
    pub const WALLET_CODE_ID: u64 = 2;

    pub const TON: u128 = 1_000_000_000;
    pub const MAX_SUPPLY: u128 = 1_234_567_898_765 * TON;
    pub const THREE_DAYS: u64 = 3 * 24 * 60 * 60;

    pub type MockDeps = OwnedDeps<MockStorage, MockApi, MockQuerier>;

    pub fn setup_contract() -> (MockDeps, Env) {
        let mut deps = mock_dependencies();
        let env = mock_env();
        let msg = InstantiateMsg {
            owner: OWNER.to_string(),
            max_supply: Uint128::new(MAX_SUPPLY),
            wallet_code_id: WALLET_CODE_ID,
        };
        instantiate(deps.as_mut(), env.clone(), mock_info(OWNER, &[]), msg).unwrap();
        (deps, env)
    }

    /// Sale open from now for three days at `price` nano per token.
    pub fn setup_open_sale(price: u128, hard_cap: u128) -> (MockDeps, Env) {
        let (mut deps, env) = setup_contract();
        let now = env.block.time.seconds();
        setup_ico(&mut deps, &env, OWNER, price, now, now + THREE_DAYS, hard_cap).unwrap();
        (deps, env)
    }

    pub fn setup_ico(
        deps: &mut MockDeps,
        env: &Env,
        sender: &str,
        price: u128,
        start_time: u64,
        end_time: u64,
        hard_cap: u128,
    ) -> Result<Response, ContractError> {
        execute(
            deps.as_mut(),
            env.clone(),
            mock_info(sender, &[]),
            ExecuteMsg::SetupIco {
                price: Uint128::new(price),
                start_time,
                end_time,
                hard_cap: Uint128::new(hard_cap),
            },
        )
    }

    pub fn finalize(
        deps: &mut MockDeps,
        env: &Env,
        sender: &str,
        emergency: bool,
    ) -> Result<Response, ContractError> {
        execute(
            deps.as_mut(),
            env.clone(),
            mock_info(sender, &[]),
            ExecuteMsg::FinalizeIco { emergency },
        )
    }

    pub fn buy(deps: &mut MockDeps, env: &Env, buyer: &str, value: u128) -> Result<Response, ContractError> {
        let funds = if value == 0 { vec![] } else { coins(value, NATIVE_DENOM) };
        receive(deps.as_mut(), env.clone(), mock_info(buyer, &funds))
    }

    pub fn mint(
        deps: &mut MockDeps,
        env: &Env,
        sender: &str,
        amount: u128,
        receiver: &str,
        value: u128,
    ) -> Result<Response, ContractError> {
        let funds = if value == 0 { vec![] } else { coins(value, NATIVE_DENOM) };
        execute(
            deps.as_mut(),
            env.clone(),
            mock_info(sender, &funds),
            ExecuteMsg::Mint {
                amount: Uint128::new(amount),
                receiver: receiver.to_string(),
            },
        )
    }

    pub fn query_ico_info(deps: &MockDeps, env: &Env) -> IcoInfoResponse {
        let res = query(deps.as_ref(), env.clone(), QueryMsg::IcoInfo {}).unwrap();
        from_json(&res).unwrap()
    }

    pub fn query_jetton_data(deps: &MockDeps, env: &Env) -> JettonDataResponse {
        let res = query(deps.as_ref(), env.clone(), QueryMsg::JettonData {}).unwrap();
        from_json(&res).unwrap()
    }

    pub fn query_wallet_address(deps: &MockDeps, env: &Env, owner: &str) -> WalletAddressResponse {
        let res = query(
            deps.as_ref(),
            env.clone(),
            QueryMsg::WalletAddress { owner: owner.to_string() },
        )
        .unwrap();
        from_json(&res).unwrap()
    }

    /// Create an env with a specific block time
    pub fn env_at_time(secs: u64) -> Env {
        let mut env = mock_env();
        env.block.time = Timestamp::from_seconds(secs);
        env
    }
}
