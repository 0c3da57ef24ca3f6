use cosmwasm_std::{to_json_vec, Addr, StdResult};
use sha2::{Digest, Sha256};

use crate::msg::WalletInstantiateMsg;

pub const CONTRACT_ADDR_PREFIX: &str = "contract";

/// Address of a contract instance built from `code_id` and `init_msg`.
///
/// The address depends only on the code and the exact init message bytes, so
/// it can be computed before the instance exists and every party that builds
/// the same init message lands on the same account.
/// Hash: SHA256("jetton_addr_v1" || code_id (big endian) || init_msg), first 20 bytes.
pub fn contract_address(code_id: u64, init_msg: &[u8]) -> Addr {
    let mut hasher = Sha256::new();
    hasher.update(b"jetton_addr_v1");
    hasher.update(code_id.to_be_bytes());
    hasher.update(init_msg);
    let hash = hasher.finalize();

    Addr::unchecked(format!("{}{}", CONTRACT_ADDR_PREFIX, hex::encode(&hash[..20])))
}

/// Address of `owner`'s wallet under the sale contract `master`.
pub fn wallet_address(wallet_code_id: u64, master: &Addr, owner: &Addr) -> StdResult<Addr> {
    let init = WalletInstantiateMsg {
        owner: owner.to_string(),
        master: master.to_string(),
        wallet_code_id,
    };
    Ok(contract_address(wallet_code_id, &to_json_vec(&init)?))
}
