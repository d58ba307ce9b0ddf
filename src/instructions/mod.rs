pub mod burn;

use solana_instruction::Instruction;

use crate::accounts::{AccountInputs, AccountRole, resolve_accounts, to_account_metas_and_signers};
use crate::encoder::InstructionPayload;
use crate::error::Error;
use crate::fragment::TransactionFragment;
use crate::programs::KnownProgram;
use crate::types::BuildContext;

/// Static description of one instruction: target program, account table, storage delta.
#[derive(Debug, Clone, Copy)]
pub struct InstructionDefinition {
    pub name: &'static str,
    pub program: KnownProgram,
    pub accounts: &'static [AccountRole],
    pub bytes_created_on_chain: u64,
}

/// Resolve accounts, encode `payload` and package both into a fragment.
///
/// Account resolution runs first, so a missing account surfaces before any encoding.
pub fn build_fragment(
    ctx: &BuildContext<'_>,
    definition: &InstructionDefinition,
    inputs: &AccountInputs,
    payload: &InstructionPayload,
) -> Result<TransactionFragment, Error> {
    let resolved = resolve_accounts(definition.accounts, inputs, &ctx.identity)?;
    let program_id = definition.program.resolve(ctx.programs)?;
    let (accounts, signers) = to_account_metas_and_signers(&resolved, program_id);
    let data = payload.data()?;

    tracing::debug!(
        instruction = definition.name,
        discriminator = payload.discriminator(),
        accounts = accounts.len(),
        signers = signers.len(),
        "built instruction"
    );

    Ok(TransactionFragment::from_instruction(
        Instruction {
            program_id,
            accounts,
            data,
        },
        signers,
        definition.bytes_created_on_chain,
    ))
}
