#![allow(dead_code)]

use cosmwasm_std::{Addr, Binary, Timestamp, Uint128};
use ico_sale::msg::{
    ExecuteMsg as SaleExecuteMsg, IcoInfoResponse, InstantiateMsg as SaleInstantiateMsg,
    JettonDataResponse, QueryMsg as SaleQueryMsg, WalletAddressResponse,
};
use ico_sandbox::{Contract, ContractWrapper, Sandbox, SandboxConfig, SendResult, TxFilter};
use jetton::ONE_TOKEN;
use jetton_wallet::msg::{ExecuteMsg as WalletExecuteMsg, QueryMsg as WalletQueryMsg, WalletDataResponse};

pub const THREE_DAYS: u64 = 3 * 24 * 60 * 60;
pub const MAX_SUPPLY: u128 = 1_234_567_898_765 * ONE_TOKEN;

/// Whole tokens (or whole native coins) in base units.
pub fn ton(amount: u128) -> Uint128 {
    Uint128::new(amount * ONE_TOKEN)
}

/// Fractional amounts, e.g. `nano("0.25")`.
pub fn nano(amount: &str) -> Uint128 {
    let (whole, frac) = amount.split_once('.').unwrap_or((amount, ""));
    let whole: u128 = whole.parse().unwrap();
    let frac_digits = format!("{:0<9}", frac);
    let frac: u128 = frac_digits[..9].parse().unwrap();
    Uint128::new(whole * ONE_TOKEN + frac)
}

pub fn sale_contract() -> Box<dyn Contract> {
    Box::new(
        ContractWrapper::new(
            ico_sale::contract::execute,
            ico_sale::contract::instantiate,
            ico_sale::contract::query,
        )
        .with_receive(ico_sale::contract::receive)
        .with_bounce(ico_sale::contract::bounce),
    )
}

pub fn wallet_contract() -> Box<dyn Contract> {
    Box::new(
        ContractWrapper::new(
            jetton_wallet::contract::execute,
            jetton_wallet::contract::instantiate,
            jetton_wallet::contract::query,
        )
        .with_bounce(jetton_wallet::contract::bounce),
    )
}

/// Sale contract deployed by `deployer`, with the wallet code stored.
pub struct Suite {
    pub sandbox: Sandbox,
    pub deployer: Addr,
    pub sale: Addr,
    pub wallet_code_id: u64,
}

impl Suite {
    pub fn new() -> Self {
        // an hour into a window that starts at 0
        Self::with_config(SandboxConfig {
            block_time: Timestamp::from_seconds(3600),
            ..SandboxConfig::default()
        })
    }

    pub fn with_config(config: SandboxConfig) -> Self {
        let mut sandbox = Sandbox::new(config);
        let wallet_code_id = sandbox.store_code(wallet_contract());
        let sale_code_id = sandbox.store_code(sale_contract());
        let deployer = sandbox.treasury("deployer");

        let init = SaleInstantiateMsg {
            owner: deployer.to_string(),
            max_supply: Uint128::new(MAX_SUPPLY),
            wallet_code_id,
        };
        let (sale, result) = sandbox
            .deploy(&deployer, sale_code_id, &init, ton(1))
            .unwrap();
        assert!(
            result.has_transaction(
                &TxFilter::new()
                    .from(&deployer)
                    .to(&sale)
                    .deploy(true)
                    .success(true)
            ),
            "{}",
            result
        );

        Self {
            sandbox,
            deployer,
            sale,
            wallet_code_id,
        }
    }

    pub fn treasury(&mut self, name: &str) -> Addr {
        self.sandbox.treasury(name)
    }

    // ---- sale contract ----

    pub fn send_sale(&mut self, sender: &Addr, value: Uint128, msg: &SaleExecuteMsg) -> SendResult {
        let sale = self.sale.clone();
        self.sandbox.send(sender, &sale, value, msg).unwrap()
    }

    pub fn setup_ico(&mut self, price: Uint128, start_time: u64, end_time: u64, hard_cap: Uint128) -> SendResult {
        let deployer = self.deployer.clone();
        self.send_sale(
            &deployer,
            ton(10),
            &SaleExecuteMsg::SetupIco {
                price,
                start_time,
                end_time,
                hard_cap,
            },
        )
    }

    pub fn mint(&mut self, sender: &Addr, amount: Uint128, receiver: &Addr, value: Uint128) -> SendResult {
        self.send_sale(
            sender,
            value,
            &SaleExecuteMsg::Mint {
                amount,
                receiver: receiver.to_string(),
            },
        )
    }

    pub fn buy(&mut self, buyer: &Addr, value: Uint128) -> SendResult {
        let sale = self.sale.clone();
        self.sandbox.send_value(buyer, &sale, value).unwrap()
    }

    pub fn ico_info(&self) -> IcoInfoResponse {
        self.sandbox.query(&self.sale, &SaleQueryMsg::IcoInfo {}).unwrap()
    }

    pub fn jetton_data(&self) -> JettonDataResponse {
        self.sandbox.query(&self.sale, &SaleQueryMsg::JettonData {}).unwrap()
    }

    pub fn wallet_of(&self, owner: &Addr) -> Addr {
        let res: WalletAddressResponse = self
            .sandbox
            .query(
                &self.sale,
                &SaleQueryMsg::WalletAddress {
                    owner: owner.to_string(),
                },
            )
            .unwrap();
        res.wallet_address
    }

    // ---- wallets ----

    pub fn wallet_data(&self, owner: &Addr) -> WalletDataResponse {
        let wallet = self.wallet_of(owner);
        self.sandbox.query(&wallet, &WalletQueryMsg::WalletData {}).unwrap()
    }

    /// Zero for a holder whose wallet was never deployed.
    pub fn token_balance(&self, owner: &Addr) -> Uint128 {
        let wallet = self.wallet_of(owner);
        if !self.sandbox.is_deployed(&wallet) {
            return Uint128::zero();
        }
        self.wallet_data(owner).balance
    }

    pub fn transfer(
        &mut self,
        owner: &Addr,
        amount: Uint128,
        destination: &Addr,
        forward_ton_amount: Uint128,
        value: Uint128,
    ) -> SendResult {
        let wallet = self.wallet_of(owner);
        let msg = WalletExecuteMsg::Transfer {
            query_id: 0,
            amount,
            destination: destination.to_string(),
            response_destination: owner.to_string(),
            custom_payload: None,
            forward_ton_amount,
            forward_payload: Binary::default(),
        };
        self.sandbox.send(owner, &wallet, value, &msg).unwrap()
    }

    pub fn burn(&mut self, owner: &Addr, amount: Uint128, value: Uint128) -> SendResult {
        let wallet = self.wallet_of(owner);
        let msg = WalletExecuteMsg::Burn {
            query_id: 0,
            amount,
            response_destination: owner.to_string(),
            custom_payload: Some(Binary::default()),
        };
        self.sandbox.send(owner, &wallet, value, &msg).unwrap()
    }
}
