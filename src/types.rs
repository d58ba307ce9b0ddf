use std::fmt;
use std::sync::Arc;

use solana_pubkey::Pubkey;

use crate::error::Error;
use crate::programs::ProgramRegistry;

/// A credential able to authorize an account role.
///
/// Only the public key is needed to build an instruction; producing the
/// actual signature belongs to the submission pipeline.
pub trait Signer: fmt::Debug + Send + Sync {
    fn pubkey(&self) -> Pubkey;
}

/// Signer that only knows its public key. Useful for fee payers or authorities
/// whose signature is attached later by another party.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoopSigner {
    pub pubkey: Pubkey,
}

impl Signer for NoopSigner {
    fn pubkey(&self) -> Pubkey {
        self.pubkey
    }
}

/// Cheaply clonable, shareable handle to a [`Signer`].
///
/// Two handles compare equal when they sign for the same public key.
#[derive(Debug, Clone)]
pub struct SignerHandle(Arc<dyn Signer>);

impl SignerHandle {
    pub fn new(signer: impl Signer + 'static) -> Self {
        Self(Arc::new(signer))
    }

    pub fn noop(pubkey: Pubkey) -> Self {
        Self::new(NoopSigner { pubkey })
    }

    pub fn pubkey(&self) -> Pubkey {
        self.0.pubkey()
    }
}

impl PartialEq for SignerHandle {
    fn eq(&self, other: &Self) -> bool {
        self.pubkey() == other.pubkey()
    }
}

impl Eq for SignerHandle {}

/// Caller-supplied value for an account role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountInput {
    Address(Pubkey),
    Signer(SignerHandle),
}

impl AccountInput {
    pub fn pubkey(&self) -> Pubkey {
        match self {
            Self::Address(pubkey) => *pubkey,
            Self::Signer(signer) => signer.pubkey(),
        }
    }

    pub fn as_signer(&self) -> Option<&SignerHandle> {
        match self {
            Self::Address(_) => None,
            Self::Signer(signer) => Some(signer),
        }
    }
}

impl From<Pubkey> for AccountInput {
    fn from(pubkey: Pubkey) -> Self {
        Self::Address(pubkey)
    }
}

impl From<SignerHandle> for AccountInput {
    fn from(signer: SignerHandle) -> Self {
        Self::Signer(signer)
    }
}

/// The slice of caller context an instruction builder reads.
///
/// `identity` is the invoking principal, used as the default for
/// authority-like roles. `programs` resolves program names to addresses.
pub struct BuildContext<'a> {
    pub identity: SignerHandle,
    pub programs: &'a dyn ProgramRegistry,
}

/// Decode a base58 string into a pubkey.
pub fn parse_pubkey(value: &str) -> Result<Pubkey, Error> {
    let bytes = bs58::decode(value)
        .into_vec()
        .map_err(|e| Error::InvalidAddress {
            value: value.to_string(),
            reason: e.to_string(),
        })?;
    let array: [u8; 32] = bytes.try_into().map_err(|b: Vec<u8>| Error::InvalidAddress {
        value: value.to_string(),
        reason: format!("expected 32 bytes, got {}", b.len()),
    })?;
    Ok(Pubkey::new_from_array(array))
}

/// Encode a pubkey as base58.
pub fn pubkey_to_string(pubkey: &Pubkey) -> String {
    bs58::encode(pubkey.to_bytes()).into_string()
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    clippy::panic,
    reason = "test assertions use unwrap/panic"
)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_program_address() {
        let key = parse_pubkey("CoREENxT6tW1HoK8ypY1SxRMZTcVPm7R94rH4PZNhX7d").unwrap();
        assert_eq!(
            pubkey_to_string(&key),
            "CoREENxT6tW1HoK8ypY1SxRMZTcVPm7R94rH4PZNhX7d"
        );
    }

    #[test]
    fn rejects_non_base58_and_wrong_length() {
        assert!(matches!(
            parse_pubkey("0OIl"),
            Err(Error::InvalidAddress { .. })
        ));
        let short = bs58::encode([1_u8; 8]).into_string();
        let Err(Error::InvalidAddress { reason, .. }) = parse_pubkey(&short) else {
            panic!("expected InvalidAddress");
        };
        assert_eq!(reason, "expected 32 bytes, got 8");
    }

    #[test]
    fn signer_handles_compare_by_pubkey() {
        let key = Pubkey::new_from_array([7; 32]);
        assert_eq!(SignerHandle::noop(key), SignerHandle::noop(key));
        assert_ne!(
            SignerHandle::noop(key),
            SignerHandle::noop(Pubkey::new_from_array([8; 32]))
        );
    }

    #[test]
    fn account_input_exposes_pubkey_for_both_shapes() {
        let key = Pubkey::new_from_array([3; 32]);
        assert_eq!(AccountInput::from(key).pubkey(), key);
        let signer = AccountInput::from(SignerHandle::noop(key));
        assert_eq!(signer.pubkey(), key);
        assert!(signer.as_signer().is_some());
        assert!(AccountInput::Address(key).as_signer().is_none());
    }
}
