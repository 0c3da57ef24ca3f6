#[cfg(test)]
pub mod helpers {
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info, MockApi, MockQuerier, MockStorage};
    use cosmwasm_std::{coins, from_json, Addr, Binary, Env, OwnedDeps, Response, Uint128};
    use jetton::{wallet_address, InternalTransfer, NATIVE_DENOM};

    use crate::contract::{execute, instantiate, query};
    use crate::error::ContractError;
    use crate::msg::*;

    pub const OWNER: &str = "holder";
    pub const MASTER: &str = "sale_contract";
    pub const OTHER: &str = "friend";
    pub const RANDOM_USER: &str = "random_user";
    pub const WALLET_CODE_ID: u64 = 2;

    pub const TON: u128 = 1_000_000_000;

    pub type MockDeps = OwnedDeps<MockStorage, MockApi, MockQuerier>;

    /// Wallet of OWNER under MASTER, with an empty balance.
    pub fn setup_wallet() -> (MockDeps, Env) {
        let mut deps = mock_dependencies();
        let mut env = mock_env();
        env.contract.address = own_address();

        let msg = InstantiateMsg {
            owner: OWNER.to_string(),
            master: MASTER.to_string(),
            wallet_code_id: WALLET_CODE_ID,
        };
        let res = instantiate(deps.as_mut(), env.clone(), mock_info(MASTER, &[]), msg).unwrap();
        assert_eq!(res.attributes.len(), 3);
        (deps, env)
    }

    /// Wallet already credited with `amount` by the master.
    pub fn setup_funded_wallet(amount: u128) -> (MockDeps, Env) {
        let (mut deps, env) = setup_wallet();
        credit(&mut deps, &env, MASTER, amount, MASTER, 0, 0).unwrap();
        (deps, env)
    }

    pub fn own_address() -> Addr {
        sibling_address(OWNER)
    }

    pub fn sibling_address(owner: &str) -> Addr {
        wallet_address(WALLET_CODE_ID, &Addr::unchecked(MASTER), &Addr::unchecked(owner)).unwrap()
    }

    pub fn internal_transfer(amount: u128, from: &str, forward_ton_amount: u128) -> InternalTransfer {
        InternalTransfer {
            query_id: 0,
            amount: Uint128::new(amount),
            from: from.to_string(),
            response_destination: from.to_string(),
            forward_ton_amount: Uint128::new(forward_ton_amount),
            forward_payload: Binary::default(),
        }
    }

    /// Deliver an InternalTransfer from `sender` carrying `value`.
    pub fn credit(
        deps: &mut MockDeps,
        env: &Env,
        sender: &str,
        amount: u128,
        from: &str,
        forward_ton_amount: u128,
        value: u128,
    ) -> Result<Response, ContractError> {
        let funds = if value == 0 { vec![] } else { coins(value, NATIVE_DENOM) };
        execute(
            deps.as_mut(),
            env.clone(),
            mock_info(sender, &funds),
            ExecuteMsg::InternalTransfer(internal_transfer(amount, from, forward_ton_amount)),
        )
    }

    pub fn transfer(
        deps: &mut MockDeps,
        env: &Env,
        sender: &str,
        amount: u128,
        destination: &str,
        forward_ton_amount: u128,
        value: u128,
    ) -> Result<Response, ContractError> {
        let funds = if value == 0 { vec![] } else { coins(value, NATIVE_DENOM) };
        execute(
            deps.as_mut(),
            env.clone(),
            mock_info(sender, &funds),
            ExecuteMsg::Transfer {
                query_id: 0,
                amount: Uint128::new(amount),
                destination: destination.to_string(),
                response_destination: sender.to_string(),
                custom_payload: None,
                forward_ton_amount: Uint128::new(forward_ton_amount),
                forward_payload: Binary::default(),
            },
        )
    }

    pub fn burn(
        deps: &mut MockDeps,
        env: &Env,
        sender: &str,
        amount: u128,
        value: u128,
    ) -> Result<Response, ContractError> {
        let funds = if value == 0 { vec![] } else { coins(value, NATIVE_DENOM) };
        execute(
            deps.as_mut(),
            env.clone(),
            mock_info(sender, &funds),
            ExecuteMsg::Burn {
                query_id: 0,
                amount: Uint128::new(amount),
                response_destination: sender.to_string(),
                custom_payload: None,
            },
        )
    }

    pub fn query_wallet_data(deps: &MockDeps, env: &Env) -> WalletDataResponse {
        let res = query(deps.as_ref(), env.clone(), QueryMsg::WalletData {}).unwrap();
        from_json(&res).unwrap()
    }

    pub fn balance_of(deps: &MockDeps, env: &Env) -> Uint128 {
        query_wallet_data(deps, env).balance
    }
}
