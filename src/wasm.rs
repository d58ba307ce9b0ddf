use wasm_bindgen::prelude::*;

use crate::encoder::{BurnArgs, InstructionPayload};
use crate::error::Error;
use crate::fragment::TransactionFragment;
use crate::instructions::burn::{BurnAccountsJson, BurnInstructionAccounts, burn};
use crate::programs::ProgramRepository;
use crate::types::{BuildContext, SignerHandle, parse_pubkey};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = JSON)]
    fn parse(s: &str) -> JsValue;
}

fn to_js(value: &serde_json::Value) -> JsValue {
    match serde_json::to_string(value) {
        Ok(json_str) => parse(&json_str),
        Err(_) => JsValue::NULL,
    }
}

fn build(
    identity: &str,
    accounts: JsValue,
    registry_json: Option<String>,
) -> Result<TransactionFragment, Error> {
    let identity = SignerHandle::noop(parse_pubkey(identity)?);
    let programs = match registry_json.as_deref() {
        Some(json) => ProgramRepository::from_json(json)?,
        None => ProgramRepository::new(),
    };
    let accounts: BurnAccountsJson =
        serde_wasm_bindgen::from_value(accounts).map_err(|e| Error::MalformedAccounts {
            reason: e.to_string(),
        })?;
    let ctx = BuildContext {
        identity,
        programs: &programs,
    };
    burn(&ctx, BurnInstructionAccounts::try_from(accounts)?)
}

/// Build the burn instruction for `identity` and return its fragment as JSON.
///
/// `accounts` is an object like `{ assetAddress, collection?, authority?, payer?, logWrapper? }`.
/// `registry_json` optionally overrides program addresses: `{"programs": {"mplCore": "..."}}`.
#[wasm_bindgen]
pub fn build_burn(identity: &str, accounts: JsValue, registry_json: Option<String>) -> JsValue {
    match build(identity, accounts, registry_json) {
        Ok(fragment) => to_js(&fragment.to_json()),
        Err(e) => error_result(&e.to_string()),
    }
}

/// Instruction data of the burn instruction.
#[wasm_bindgen]
pub fn burn_instruction_data() -> Result<Vec<u8>, JsValue> {
    InstructionPayload::Burn(BurnArgs::default())
        .data()
        .map_err(|e| error_result(&e.to_string()))
}

fn error_result(msg: &str) -> JsValue {
    let obj = serde_json::json!({"error": msg});
    to_js(&obj)
}
