use anchor_lang::prelude::*;

use crate::error::ClaimDistributorError;
use crate::state::TokenDistributor;
use crate::utils::{message_hash, verify, ClaimMessage};

/// Per-account claimed flags
///
/// Implementations must be write-once: after `mark_claimed(account)` returns
/// Ok, `is_claimed(account)` is true for the lifetime of the registry.
pub trait ClaimRegistry {
    fn is_claimed(&self, account: &Pubkey) -> Result<bool>;
    fn mark_claimed(&mut self, account: &Pubkey) -> Result<()>;
}

/// Capability to move distributed tokens to an account
pub trait TokenTransfer {
    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()>;
}

/// Recovers the signer of a typed-message hash, or `None` if the
/// authorization does not verify
pub type RecoverSigner<'a> = &'a dyn Fn(&[u8; 32]) -> Option<Pubkey>;

/// The immutable parameters every claim is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimCommitment {
    pub merkle_root: [u8; 32],
    pub domain_separator: [u8; 32],
}

impl From<&TokenDistributor> for ClaimCommitment {
    fn from(distributor: &TokenDistributor) -> Self {
        Self {
            merkle_root: distributor.merkle_root,
            domain_separator: distributor.domain_separator,
        }
    }
}

/**
 * Runs every claim gate without mutating anything
 *
 * Gates, in order, terminal on the first failure:
 * 1. registry flag not yet set          -> AlreadyClaimed
 * 2. signer recovers to message.account -> InvalidSignature (only with `recover_signer`)
 * 3. leaf is a member of merkle_root    -> InvalidProof
 */
pub fn verify_claim<R: ClaimRegistry>(
    commitment: &ClaimCommitment,
    registry: &R,
    message: &ClaimMessage,
    proof: &[[u8; 32]],
    recover_signer: Option<RecoverSigner>,
) -> Result<()> {
    if registry.is_claimed(&message.account)? {
        msg!("Claim rejected: {} already claimed", message.account);
        return err!(ClaimDistributorError::AlreadyClaimed);
    }

    if let Some(recover_signer) = recover_signer {
        let hash = message_hash(&commitment.domain_separator, message);
        if recover_signer(&hash) != Some(message.account) {
            msg!("Claim rejected: authorization does not recover to {}", message.account);
            return err!(ClaimDistributorError::InvalidSignature);
        }
    }

    if !verify(proof, &commitment.merkle_root, &message.leaf()) {
        msg!("Claim rejected: proof does not reach the merkle root");
        return err!(ClaimDistributorError::InvalidProof);
    }

    Ok(())
}

/**
 * Verifies a claim and settles it
 *
 * Shared by the direct and the signature-gated entry points; they differ only
 * in whether `recover_signer` is supplied.
 *
 * The registry flag is set before the transfer is issued, so a transfer that
 * re-enters the claim path already observes the account as claimed. Any
 * error, including one from the transfer, is returned to the caller and the
 * host transaction must discard the mark along with everything else.
 */
pub fn settle_claim<R: ClaimRegistry, T: TokenTransfer>(
    commitment: &ClaimCommitment,
    registry: &mut R,
    token: &mut T,
    message: &ClaimMessage,
    proof: &[[u8; 32]],
    recover_signer: Option<RecoverSigner>,
) -> Result<()> {
    verify_claim(commitment, registry, message, proof, recover_signer)?;

    registry.mark_claimed(&message.account)?;

    token.transfer(&message.account, message.amount)
}
