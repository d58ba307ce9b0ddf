use serde::Deserialize;
use solana_pubkey::Pubkey;

use crate::accounts::{AbsentPolicy, AccountInputs, AccountRole, DefaultRule};
use crate::encoder::{BurnArgs, InstructionPayload};
use crate::error::Error;
use crate::fragment::TransactionFragment;
use crate::instructions::{InstructionDefinition, build_fragment};
use crate::programs::KnownProgram;
use crate::types::{AccountInput, BuildContext, SignerHandle, parse_pubkey};

pub const ASSET_ADDRESS: &str = "asset_address";
pub const COLLECTION: &str = "collection";
pub const AUTHORITY: &str = "authority";
pub const PAYER: &str = "payer";
pub const LOG_WRAPPER: &str = "log_wrapper";

/// Account table of the burn instruction.
///
/// 0. asset_address (mut) - The asset to burn
/// 1. collection (mut, optional) - The collection the asset belongs to
/// 2. authority (signer, optional) - Owner or delegate; defaults to the caller identity
/// 3. payer (mut, signer, optional) - Account paying for storage fees
/// 4. log_wrapper (optional) - The SPL Noop program
pub const BURN_ACCOUNTS: &[AccountRole] = &[
    AccountRole {
        name: ASSET_ADDRESS,
        index: 0,
        is_writable: true,
        is_signer: false,
        required: true,
        default: None,
        absent: AbsentPolicy::Omit,
    },
    AccountRole {
        name: COLLECTION,
        index: 1,
        is_writable: true,
        is_signer: false,
        required: false,
        default: None,
        absent: AbsentPolicy::Omit,
    },
    AccountRole {
        name: AUTHORITY,
        index: 2,
        is_writable: false,
        is_signer: true,
        required: false,
        default: Some(DefaultRule::Identity),
        absent: AbsentPolicy::Omit,
    },
    AccountRole {
        name: PAYER,
        index: 3,
        is_writable: true,
        is_signer: true,
        required: false,
        default: None,
        absent: AbsentPolicy::Omit,
    },
    AccountRole {
        name: LOG_WRAPPER,
        index: 4,
        is_writable: false,
        is_signer: false,
        required: false,
        default: None,
        absent: AbsentPolicy::Omit,
    },
];

/// Burning frees the asset account, it never allocates.
pub const BURN_BYTES_CREATED_ON_CHAIN: u64 = 0;

pub const BURN: InstructionDefinition = InstructionDefinition {
    name: "burn",
    program: KnownProgram::MplCore,
    accounts: BURN_ACCOUNTS,
    bytes_created_on_chain: BURN_BYTES_CREATED_ON_CHAIN,
};

#[derive(Debug, Clone, Default)]
pub struct BurnInstructionAccounts {
    pub asset_address: Option<Pubkey>,
    pub collection: Option<Pubkey>,
    pub authority: Option<SignerHandle>,
    pub payer: Option<SignerHandle>,
    pub log_wrapper: Option<Pubkey>,
}

impl BurnInstructionAccounts {
    pub fn new(asset_address: Pubkey) -> Self {
        Self {
            asset_address: Some(asset_address),
            ..Self::default()
        }
    }

    pub fn into_inputs(self) -> AccountInputs {
        let mut inputs = AccountInputs::new();
        if let Some(asset) = self.asset_address {
            inputs.insert(ASSET_ADDRESS, AccountInput::Address(asset));
        }
        if let Some(collection) = self.collection {
            inputs.insert(COLLECTION, AccountInput::Address(collection));
        }
        if let Some(authority) = self.authority {
            inputs.insert(AUTHORITY, AccountInput::Signer(authority));
        }
        if let Some(payer) = self.payer {
            inputs.insert(PAYER, AccountInput::Signer(payer));
        }
        if let Some(log_wrapper) = self.log_wrapper {
            inputs.insert(LOG_WRAPPER, AccountInput::Address(log_wrapper));
        }
        inputs
    }
}

/// Burn accounts as base58 strings, the shape a JSON or JS caller sends.
///
/// Signer roles given here become no-op signers; the real signature is
/// attached by whoever submits the transaction.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BurnAccountsJson {
    pub asset_address: Option<String>,
    pub collection: Option<String>,
    pub authority: Option<String>,
    pub payer: Option<String>,
    pub log_wrapper: Option<String>,
}

impl TryFrom<BurnAccountsJson> for BurnInstructionAccounts {
    type Error = Error;

    fn try_from(json: BurnAccountsJson) -> Result<Self, Self::Error> {
        let address = |v: Option<String>| v.as_deref().map(parse_pubkey).transpose();
        let signer = |v: Option<String>| {
            v.as_deref()
                .map(|s| parse_pubkey(s).map(SignerHandle::noop))
                .transpose()
        };
        Ok(Self {
            asset_address: address(json.asset_address)?,
            collection: address(json.collection)?,
            authority: signer(json.authority)?,
            payer: signer(json.payer)?,
            log_wrapper: address(json.log_wrapper)?,
        })
    }
}

impl BurnAccountsJson {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Build the burn instruction as a single-item [`TransactionFragment`].
pub fn burn(
    ctx: &BuildContext<'_>,
    accounts: BurnInstructionAccounts,
) -> Result<TransactionFragment, Error> {
    build_fragment(
        ctx,
        &BURN,
        &accounts.into_inputs(),
        &InstructionPayload::Burn(BurnArgs::default()),
    )
}
