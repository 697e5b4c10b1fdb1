use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * PDA seeds and the typed-message domain used by the claim distributor.
 * Off-chain signers and tree builders must use the exact same values.
 */

/// ===== PDA SEED CONSTANTS =====

/// Seed for owner nonce PDA derivation
/// - Used in: ["owner_nonce", owner]
/// - Enables automatic nonce assignment for distributors
#[constant]
pub const OWNER_NONCE_SEED: &str = "owner_nonce";

/// Seed for distributor PDA derivation
/// - Used in: ["distributor", token_mint, owner, nonce]
#[constant]
pub const DISTRIBUTOR_SEED: &str = "distributor";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", distributor_key]
/// - The vault is controlled by the distributor PDA
#[constant]
pub const VAULT_SEED: &str = "vault";

/// Seed for claim status PDA derivation
/// - Used in: ["claim", distributor_key, account]
/// - One write-once claimed flag per (distributor, account) pair
#[constant]
pub const CLAIM_SEED: &str = "claim";

/// ===== TYPED MESSAGE CONSTANTS =====

/// Domain name bound into every claim authorization
#[constant]
pub const DOMAIN_NAME: &str = "ClaimDistributor";

/// Domain version bound into every claim authorization
#[constant]
pub const DOMAIN_VERSION: &str = "1";

/// Type string of the signing domain
/// - The domain is bound to this program id and to one distributor account,
///   so an authorization cannot be replayed against another distributor
#[constant]
pub const DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,bytes32 programId,bytes32 distributor)";

/// Type string of the signed claim message
#[constant]
pub const CLAIM_TYPE: &str = "Claim(bytes32 account,uint256 amount)";

/// Two-byte prefix of the final typed-message hash preimage
pub const TYPED_MESSAGE_PREFIX: [u8; 2] = [0x19, 0x01];
