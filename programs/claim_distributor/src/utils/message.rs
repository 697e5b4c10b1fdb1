use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak::{hash, hashv};

use crate::constants::*;
use crate::utils::{encode_amount, merkle_leaf};

/// The (account, amount) pair that is both the merkle leaf payload and the
/// signed message payload. Always rebuilt from instruction arguments, never
/// accepted pre-hashed.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimMessage {
    pub account: Pubkey,
    pub amount: u64,
}

impl ClaimMessage {
    pub fn new(account: Pubkey, amount: u64) -> Self {
        Self { account, amount }
    }

    /// keccak(keccak(CLAIM_TYPE) || account || uint256(amount))
    pub fn struct_hash(&self) -> [u8; 32] {
        hashv(&[
            &hash(CLAIM_TYPE.as_bytes()).to_bytes(),
            self.account.as_ref(),
            &encode_amount(self.amount),
        ])
        .to_bytes()
    }

    pub fn leaf(&self) -> [u8; 32] {
        merkle_leaf(&self.account, self.amount)
    }
}

/// Derives the signing domain of one distributor
///
/// keccak(keccak(DOMAIN_TYPE) || keccak(name) || keccak(version) || program_id || distributor)
pub fn domain_separator(program_id: &Pubkey, distributor: &Pubkey) -> [u8; 32] {
    hashv(&[
        &hash(DOMAIN_TYPE.as_bytes()).to_bytes(),
        &hash(DOMAIN_NAME.as_bytes()).to_bytes(),
        &hash(DOMAIN_VERSION.as_bytes()).to_bytes(),
        program_id.as_ref(),
        distributor.as_ref(),
    ])
    .to_bytes()
}

/// Final hash a claimant signs: keccak(0x19 || 0x01 || domain_separator || struct_hash)
pub fn message_hash(domain_separator: &[u8; 32], message: &ClaimMessage) -> [u8; 32] {
    hashv(&[
        &TYPED_MESSAGE_PREFIX,
        domain_separator,
        &message.struct_hash(),
    ])
    .to_bytes()
}
