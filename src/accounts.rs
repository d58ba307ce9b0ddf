use std::collections::BTreeMap;

use solana_instruction::AccountMeta;
use solana_pubkey::Pubkey;

use crate::error::Error;
use crate::types::{AccountInput, SignerHandle};

/// Value applied to a role the caller left unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultRule {
    /// The invoking principal.
    Identity,
}

/// How an optional role that is still unset after defaulting reaches the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbsentPolicy {
    /// Dropped; later accounts shift down.
    Omit,
    /// Replaced by a read-only meta for the target program, keeping positions fixed.
    ProgramId,
}

/// One fixed slot of an instruction's account table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountRole {
    pub name: &'static str,
    pub index: u8,
    pub is_writable: bool,
    /// The role expects a signer handle rather than a bare address.
    pub is_signer: bool,
    pub required: bool,
    pub default: Option<DefaultRule>,
    pub absent: AbsentPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAccount {
    pub index: u8,
    pub name: &'static str,
    pub is_writable: bool,
    pub value: Option<AccountInput>,
    pub absent: AbsentPolicy,
}

/// Caller inputs keyed by role name.
pub type AccountInputs = BTreeMap<&'static str, AccountInput>;

/// Reject inputs whose name or shape does not fit `schema`.
///
/// Runs before any binding so malformed input never reaches resolution.
pub fn validate_inputs(schema: &[AccountRole], inputs: &AccountInputs) -> Result<(), Error> {
    for (name, value) in inputs {
        let role = schema
            .iter()
            .find(|r| r.name == *name)
            .ok_or_else(|| Error::UnknownAccountRole {
                role: (*name).to_string(),
            })?;
        if role.is_signer && value.as_signer().is_none() {
            return Err(Error::InvalidAccountInput {
                role: role.name,
                reason: "expected a signer, got a bare address".into(),
            });
        }
    }
    Ok(())
}

fn bind(role: &AccountRole, inputs: &AccountInputs) -> ResolvedAccount {
    let value = inputs.get(role.name).cloned();
    tracing::trace!(
        role = role.name,
        index = role.index,
        bound = value.is_some(),
        "binding account role"
    );
    ResolvedAccount {
        index: role.index,
        name: role.name,
        is_writable: role.is_writable,
        value,
        absent: role.absent,
    }
}

fn apply_default(role: &AccountRole, account: &mut ResolvedAccount, identity: &SignerHandle) {
    if account.value.is_some() {
        return;
    }
    if let Some(DefaultRule::Identity) = role.default {
        tracing::debug!(role = role.name, "defaulting account to caller identity");
        account.value = Some(AccountInput::Signer(identity.clone()));
    }
}

/// Bind caller inputs to `schema`, apply default rules, and order the result by index.
///
/// Optional roles that remain unset stay in the list with `value: None`;
/// their [`AbsentPolicy`] decides what [`to_account_metas_and_signers`] emits.
pub fn resolve_accounts(
    schema: &[AccountRole],
    inputs: &AccountInputs,
    identity: &SignerHandle,
) -> Result<Vec<ResolvedAccount>, Error> {
    validate_inputs(schema, inputs)?;

    let mut resolved = Vec::with_capacity(schema.len());
    for role in schema {
        let mut account = bind(role, inputs);
        apply_default(role, &mut account, identity);
        resolved.push(account);
    }

    resolved.sort_by_key(|a| a.index);

    for role in schema.iter().filter(|r| r.required) {
        let bound = resolved
            .iter()
            .any(|a| a.name == role.name && a.value.is_some());
        if !bound {
            return Err(Error::MissingRequiredAccount { role: role.name });
        }
    }

    Ok(resolved)
}

/// Convert ordered resolved accounts into wire-level metas and the signers they need.
///
/// `is_signer` is set exactly when the bound value is a signer handle.
/// Signers are deduplicated by public key in first-seen order.
pub fn to_account_metas_and_signers(
    accounts: &[ResolvedAccount],
    program_id: Pubkey,
) -> (Vec<AccountMeta>, Vec<SignerHandle>) {
    let mut metas = Vec::with_capacity(accounts.len());
    let mut signers: Vec<SignerHandle> = Vec::new();

    for account in accounts {
        let Some(value) = &account.value else {
            if account.absent == AbsentPolicy::ProgramId {
                metas.push(AccountMeta::new_readonly(program_id, false));
            }
            continue;
        };

        let is_signer = value.as_signer().is_some();
        let pubkey = value.pubkey();
        metas.push(if account.is_writable {
            AccountMeta::new(pubkey, is_signer)
        } else {
            AccountMeta::new_readonly(pubkey, is_signer)
        });

        if let Some(signer) = value.as_signer()
            && !signers.contains(signer)
        {
            signers.push(signer.clone());
        }
    }

    (metas, signers)
}
