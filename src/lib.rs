#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod accounts;
pub mod encoder;
pub mod error;
pub mod fragment;
pub mod instructions;
pub mod programs;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use accounts::{
    AbsentPolicy, AccountInputs, AccountRole, DefaultRule, ResolvedAccount, resolve_accounts,
    to_account_metas_and_signers,
};
pub use encoder::{BURN_DISCRIMINATOR, BurnArgs, InstructionPayload, encode_instruction_data};
pub use error::Error;
pub use fragment::{FragmentItem, TransactionFragment};
pub use instructions::burn::{BurnAccountsJson, BurnInstructionAccounts, burn};
pub use instructions::{InstructionDefinition, build_fragment};
pub use programs::{KnownProgram, ProgramRegistry, ProgramRepository, RegistryConfig};
pub use types::{AccountInput, BuildContext, NoopSigner, Signer, SignerHandle};
