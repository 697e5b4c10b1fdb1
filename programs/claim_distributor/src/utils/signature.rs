use anchor_lang::prelude::*;
use anchor_lang::solana_program::ed25519_program;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::solana_program::sysvar::instructions::{
    load_current_index_checked, load_instruction_at_checked,
};

/// Size of one signature offsets record in ed25519 program instruction data
pub const ED25519_OFFSETS_LEN: usize = 14;
/// Offsets records start after the signature count and one padding byte
pub const ED25519_OFFSETS_START: usize = 2;
/// Instruction index meaning "the ed25519 instruction itself"
pub const ED25519_CURRENT_INSTRUCTION: u16 = u16::MAX;

const PUBKEY_LEN: usize = 32;
const SIGNATURE_LEN: usize = 64;
const MESSAGE_LEN: usize = 32;

/// Ed25519 group order L, little-endian
const ED25519_ORDER: [u8; 32] = [
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde, 0x14,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
];

/// Off-chain signature over a claim's typed-message hash
///
/// `r` is the encoded R point and `s` the little-endian S scalar of an
/// ed25519 signature made with the claiming account's key.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignatureAuthorization {
    pub r: [u8; 32],
    pub s: [u8; 32],
}

impl SignatureAuthorization {
    pub fn from_bytes(signature: &[u8; 64]) -> Self {
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&signature[..32]);
        s.copy_from_slice(&signature[32..]);
        Self { r, s }
    }

    pub fn to_bytes(&self) -> [u8; 64] {
        let mut signature = [0u8; 64];
        signature[..32].copy_from_slice(&self.r);
        signature[32..].copy_from_slice(&self.s);
        signature
    }

    /// True if s < L
    pub fn has_canonical_s(&self) -> bool {
        for i in (0..32).rev() {
            if self.s[i] != ED25519_ORDER[i] {
                return self.s[i] < ED25519_ORDER[i];
            }
        }
        false
    }
}

/// One signature offsets record of an ed25519 program instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ed25519SignatureOffsets {
    pub signature_offset: u16,
    pub signature_instruction_index: u16,
    pub public_key_offset: u16,
    pub public_key_instruction_index: u16,
    pub message_data_offset: u16,
    pub message_data_size: u16,
    pub message_instruction_index: u16,
}

impl Ed25519SignatureOffsets {
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != ED25519_OFFSETS_LEN {
            return None;
        }
        let word = |i: usize| u16::from_le_bytes([bytes[i], bytes[i + 1]]);
        Some(Self {
            signature_offset: word(0),
            signature_instruction_index: word(2),
            public_key_offset: word(4),
            public_key_instruction_index: word(6),
            message_data_offset: word(8),
            message_data_size: word(10),
            message_instruction_index: word(12),
        })
    }

    fn is_self_contained(&self) -> bool {
        self.signature_instruction_index == ED25519_CURRENT_INSTRUCTION
            && self.public_key_instruction_index == ED25519_CURRENT_INSTRUCTION
            && self.message_instruction_index == ED25519_CURRENT_INSTRUCTION
    }
}

fn field(data: &[u8], offset: u16, len: usize) -> Option<&[u8]> {
    let start = offset as usize;
    data.get(start..start.checked_add(len)?)
}

/// Returns the account the runtime verified as signer of `message_hash`
///
/// Looks at the instruction immediately before the current one. The runtime
/// has already verified every ed25519 program instruction of the transaction,
/// so the public key it names is the signer of the (message, signature) pair
/// it carries. Any missing or malformed piece yields `None`.
pub fn recover_signer(
    instructions_sysvar: &AccountInfo,
    message_hash: &[u8; 32],
    authorization: &SignatureAuthorization,
) -> Option<Pubkey> {
    let current_index = load_current_index_checked(instructions_sysvar).ok()?;
    let previous_index = current_index.checked_sub(1)?;
    let instruction = load_instruction_at_checked(previous_index as usize, instructions_sysvar).ok()?;
    recover_from_ed25519_instruction(&instruction, message_hash, authorization)
}

/// Extracts the signer from a single-signature ed25519 program instruction
/// if it attests exactly `authorization` over exactly `message_hash`
pub fn recover_from_ed25519_instruction(
    instruction: &Instruction,
    message_hash: &[u8; 32],
    authorization: &SignatureAuthorization,
) -> Option<Pubkey> {
    if !authorization.has_canonical_s() {
        return None;
    }
    if instruction.program_id != ed25519_program::ID {
        return None;
    }

    let data = instruction.data.as_slice();
    if *data.first()? != 1 {
        return None;
    }
    let offsets = Ed25519SignatureOffsets::parse(
        data.get(ED25519_OFFSETS_START..ED25519_OFFSETS_START + ED25519_OFFSETS_LEN)?,
    )?;
    if !offsets.is_self_contained() || offsets.message_data_size as usize != MESSAGE_LEN {
        return None;
    }

    let signature = field(data, offsets.signature_offset, SIGNATURE_LEN)?;
    let public_key = field(data, offsets.public_key_offset, PUBKEY_LEN)?;
    let message = field(data, offsets.message_data_offset, MESSAGE_LEN)?;

    if message != message_hash.as_slice() || signature != authorization.to_bytes().as_slice() {
        return None;
    }
    Pubkey::try_from(public_key).ok()
}
