use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak::hashv;

/// Encodes an amount as a big-endian uint256 word
pub fn encode_amount(amount: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&amount.to_be_bytes());
    word
}

/// Computes the merkle leaf for an (account, amount) pair
///
/// leaf = keccak(keccak(account || uint256(amount)))
///
/// The second pass keeps a leaf from ever being mistaken for the 64-byte
/// preimage of an internal node.
pub fn merkle_leaf(account: &Pubkey, amount: u64) -> [u8; 32] {
    let inner = hashv(&[account.as_ref(), &encode_amount(amount)]);
    hashv(&[&inner.to_bytes()]).to_bytes()
}

/// Hashes two sibling nodes in sorted order
pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        hashv(&[a, b]).to_bytes()
    } else {
        hashv(&[b, a]).to_bytes()
    }
}

/// Returns true if `leaf` folds up to `root` along `proof`
///
/// Siblings are combined in sorted order, so the proof carries no
/// left/right flags. An empty proof only verifies a single-leaf tree.
pub fn verify(proof: &[[u8; 32]], root: &[u8; 32], leaf: &[u8; 32]) -> bool {
    let computed = proof
        .iter()
        .fold(*leaf, |node, sibling| hash_pair(&node, sibling));
    computed == *root
}
