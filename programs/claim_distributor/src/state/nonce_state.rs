use anchor_lang::prelude::*;

/**
 * Owner nonce account
 *
 * Counts the distributors an owner has created so each new distributor gets a
 * fresh PDA, letting one owner run several independent claim distributions of
 * the same token.
 *
 * Derivation: ["owner_nonce", owner]
 */
#[account]
#[derive(Default, Debug)]
pub struct NonceState {
    /// Nonce of the most recently created distributor (0 before the first one)
    pub nonce: u32,
}

impl NonceState {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<NonceState>();

    /// Advances the counter and returns the nonce of the new distributor
    pub fn next(&mut self) -> Option<u32> {
        self.nonce = self.nonce.checked_add(1)?;
        Some(self.nonce)
    }
}
