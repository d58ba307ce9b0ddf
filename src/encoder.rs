use borsh::BorshSerialize;

use crate::error::Error;

pub const BURN_DISCRIMINATOR: u8 = 3;

/// Arguments of the burn instruction. The record carries no fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, BorshSerialize)]
pub struct BurnArgs {}

/// Instruction payloads keyed by their discriminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstructionPayload {
    Burn(BurnArgs),
}

impl InstructionPayload {
    pub fn discriminator(&self) -> u8 {
        match self {
            Self::Burn(_) => BURN_DISCRIMINATOR,
        }
    }

    /// Canonical instruction data for this payload.
    pub fn data(&self) -> Result<Vec<u8>, Error> {
        match self {
            Self::Burn(args) => encode_instruction_data(self.discriminator(), args),
        }
    }
}

/// `[discriminator, borsh(args)...]`.
///
/// Borsh writes fields in declaration order with fixed-width little-endian
/// primitives, so the layout is fully determined by the argument type.
pub fn encode_instruction_data<T: BorshSerialize>(
    discriminator: u8,
    args: &T,
) -> Result<Vec<u8>, Error> {
    let mut data = vec![discriminator];
    args.serialize(&mut data)?;
    Ok(data)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use super::*;

    #[derive(BorshSerialize)]
    struct TransferLikeArgs {
        amount: u64,
        flag: bool,
        memo: Option<u16>,
    }

    #[test]
    fn burn_payload_is_single_discriminator_byte() {
        let payload = InstructionPayload::Burn(BurnArgs::default());
        assert_eq!(payload.discriminator(), 3);
        assert_eq!(payload.data().unwrap(), vec![0x03]);
    }

    #[test]
    fn burn_encoding_is_deterministic() {
        let first = InstructionPayload::Burn(BurnArgs {}).data().unwrap();
        for _ in 0..100 {
            assert_eq!(InstructionPayload::Burn(BurnArgs {}).data().unwrap(), first);
        }
    }

    #[test]
    fn fields_follow_discriminator_little_endian() {
        let args = TransferLikeArgs {
            amount: 0x0102_0304_0506_0708,
            flag: true,
            memo: Some(0xBEEF),
        };
        let data = encode_instruction_data(9, &args).unwrap();
        assert_eq!(
            data,
            vec![9, 0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01, 1, 1, 0xEF, 0xBE]
        );
    }

    #[test]
    fn absent_optional_field_encodes_as_zero_tag() {
        let args = TransferLikeArgs {
            amount: 1,
            flag: false,
            memo: None,
        };
        let data = encode_instruction_data(BURN_DISCRIMINATOR, &args).unwrap();
        assert_eq!(data[0], BURN_DISCRIMINATOR);
        assert_eq!(data.len(), 1 + 8 + 1 + 1);
        assert_eq!(data.last(), Some(&0));
    }
}
