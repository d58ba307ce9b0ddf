use solana_instruction::Instruction;

use crate::types::{SignerHandle, pubkey_to_string};

/// One instruction with the signers it needs and the on-chain storage it allocates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentItem {
    pub instruction: Instruction,
    pub signers: Vec<SignerHandle>,
    pub bytes_created_on_chain: u64,
}

/// An ordered, self-contained run of instructions that can be merged with
/// other fragments before submission.
///
/// Every item carries its own complete account list and signer set, so
/// merging never depends on positional state from another fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFragment {
    items: Vec<FragmentItem>,
}

impl TransactionFragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_instruction(
        instruction: Instruction,
        signers: Vec<SignerHandle>,
        bytes_created_on_chain: u64,
    ) -> Self {
        tracing::debug!(
            program_id = ?instruction.program_id,
            accounts = instruction.accounts.len(),
            data_len = instruction.data.len(),
            bytes_created_on_chain,
            "assembled transaction fragment"
        );
        Self {
            items: vec![FragmentItem {
                instruction,
                signers,
                bytes_created_on_chain,
            }],
        }
    }

    /// Append `other`'s items after this fragment's.
    #[must_use]
    #[expect(
        clippy::should_implement_trait,
        reason = "fragments compose by value through a named builder method"
    )]
    pub fn add(mut self, other: TransactionFragment) -> Self {
        self.items.extend(other.items);
        self
    }

    /// Insert `other`'s items before this fragment's.
    #[must_use]
    pub fn prepend(self, other: TransactionFragment) -> Self {
        other.add(self)
    }

    pub fn items(&self) -> &[FragmentItem] {
        &self.items
    }

    pub fn instructions(&self) -> Vec<&Instruction> {
        self.items.iter().map(|item| &item.instruction).collect()
    }

    /// All signers across items, deduplicated by public key in first-seen order.
    pub fn signers(&self) -> Vec<SignerHandle> {
        let mut signers: Vec<SignerHandle> = Vec::new();
        for signer in self.items.iter().flat_map(|item| &item.signers) {
            if !signers.contains(signer) {
                signers.push(signer.clone());
            }
        }
        signers
    }

    pub fn bytes_created_on_chain(&self) -> u64 {
        self.items
            .iter()
            .map(|item| item.bytes_created_on_chain)
            .fold(0, u64::saturating_add)
    }

    /// JSON view with base58 addresses, as handed to JS callers.
    pub fn to_json(&self) -> serde_json::Value {
        let instructions: Vec<serde_json::Value> = self
            .items
            .iter()
            .map(|item| {
                let accounts: Vec<serde_json::Value> = item
                    .instruction
                    .accounts
                    .iter()
                    .map(|meta| {
                        serde_json::json!({
                            "pubkey": pubkey_to_string(&meta.pubkey),
                            "isSigner": meta.is_signer,
                            "isWritable": meta.is_writable,
                        })
                    })
                    .collect();
                serde_json::json!({
                    "programId": pubkey_to_string(&item.instruction.program_id),
                    "accounts": accounts,
                    "data": item.instruction.data,
                    "bytesCreatedOnChain": item.bytes_created_on_chain,
                })
            })
            .collect();
        let signers: Vec<String> = self
            .signers()
            .iter()
            .map(|s| pubkey_to_string(&s.pubkey()))
            .collect();
        serde_json::json!({
            "instructions": instructions,
            "signers": signers,
            "bytesCreatedOnChain": self.bytes_created_on_chain(),
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
