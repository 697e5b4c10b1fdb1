use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::ed25519_program;
use anchor_lang::solana_program::instruction::Instruction;
use solana_ed25519_program::new_ed25519_instruction_with_signature;
use solana_sdk::signature::{Keypair, Signer};

use crate::utils::{
    SignatureAuthorization, ED25519_CURRENT_INSTRUCTION, ED25519_OFFSETS_LEN, ED25519_OFFSETS_START,
};

const PUBKEY_OFFSET: u16 = 16;
const SIGNATURE_OFFSET: u16 = 48;
const MESSAGE_OFFSET: u16 = 112;

/// Builds the single-signature ed25519 program instruction a relayer places
/// before a signature-gated claim
pub fn ed25519_instruction(
    signer: &Pubkey,
    authorization: &SignatureAuthorization,
    message: &[u8],
) -> Instruction {
    let mut data = vec![1u8, 0u8];
    for word in [
        SIGNATURE_OFFSET,
        ED25519_CURRENT_INSTRUCTION,
        PUBKEY_OFFSET,
        ED25519_CURRENT_INSTRUCTION,
        MESSAGE_OFFSET,
        message.len() as u16,
        ED25519_CURRENT_INSTRUCTION,
    ] {
        data.extend_from_slice(&word.to_le_bytes());
    }
    assert_eq!(data.len(), ED25519_OFFSETS_START + ED25519_OFFSETS_LEN);
    data.extend_from_slice(signer.as_ref());
    data.extend_from_slice(&authorization.to_bytes());
    data.extend_from_slice(message);

    Instruction {
        program_id: ed25519_program::ID,
        accounts: vec![],
        data,
    }
}

/// Signs `message_hash` with `keypair` and returns the authorization with the
/// ed25519 program instruction that verifies it
pub fn sign_message_hash(
    keypair: &Keypair,
    message_hash: &[u8; 32],
) -> (SignatureAuthorization, Instruction) {
    let signature = keypair.sign_message(message_hash);
    let signature_bytes = <[u8; 64]>::try_from(signature.as_ref()).unwrap();
    let instruction = new_ed25519_instruction_with_signature(
        message_hash,
        &signature_bytes,
        &keypair.pubkey().to_bytes(),
    );
    (SignatureAuthorization::from_bytes(&signature_bytes), instruction)
}

pub fn sample_authorization() -> SignatureAuthorization {
    SignatureAuthorization {
        r: [0x5a; 32],
        s: [0x07; 32],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TokenDistributor;
    use crate::utils::{domain_separator, recover_from_ed25519_instruction, Ed25519SignatureOffsets};

    const HASH: [u8; 32] = [0x42; 32];

    #[test]
    fn test_recovers_attested_signer() {
        let signer = Pubkey::new_unique();
        let authorization = sample_authorization();
        let instruction = ed25519_instruction(&signer, &authorization, &HASH);

        assert_eq!(
            recover_from_ed25519_instruction(&instruction, &HASH, &authorization),
            Some(signer)
        );
    }

    #[test]
    fn test_recovers_keypair_signature_over_message_hash() {
        let keypair = Keypair::new();
        let distributor = TokenDistributor {
            domain_separator: domain_separator(&crate::ID, &Pubkey::new_unique()),
            ..TokenDistributor::default()
        };
        let message_hash = distributor.message_hash(&keypair.pubkey(), 250);
        let (authorization, instruction) = sign_message_hash(&keypair, &message_hash);

        assert!(authorization.has_canonical_s());
        assert_eq!(
            recover_from_ed25519_instruction(&instruction, &message_hash, &authorization),
            Some(keypair.pubkey())
        );

        // Same layout as the hand-built payload used elsewhere
        assert_eq!(
            instruction.data,
            ed25519_instruction(&keypair.pubkey(), &authorization, &message_hash).data
        );

        let other_amount = distributor.message_hash(&keypair.pubkey(), 251);
        assert_eq!(
            recover_from_ed25519_instruction(&instruction, &other_amount, &authorization),
            None
        );
    }

    #[test]
    fn test_other_message_does_not_match() {
        let signer = Pubkey::new_unique();
        let authorization = sample_authorization();
        let instruction = ed25519_instruction(&signer, &authorization, &HASH);

        assert_eq!(
            recover_from_ed25519_instruction(&instruction, &[0x43; 32], &authorization),
            None
        );
    }

    #[test]
    fn test_other_signature_does_not_match() {
        let signer = Pubkey::new_unique();
        let instruction = ed25519_instruction(&signer, &sample_authorization(), &HASH);

        let mut other = sample_authorization();
        other.r[0] ^= 0xff;
        assert_eq!(recover_from_ed25519_instruction(&instruction, &HASH, &other), None);
    }

    #[test]
    fn test_rejects_non_canonical_s() {
        let signer = Pubkey::new_unique();
        let mut authorization = sample_authorization();
        authorization.s = [0xff; 32];
        let instruction = ed25519_instruction(&signer, &authorization, &HASH);

        assert!(!authorization.has_canonical_s());
        assert_eq!(
            recover_from_ed25519_instruction(&instruction, &HASH, &authorization),
            None
        );
    }

    #[test]
    fn test_canonical_s_boundary() {
        // L itself is out of range, L - 1 is the largest canonical scalar
        let mut s = [
            0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9,
            0xde, 0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x10,
        ];
        assert!(!SignatureAuthorization { r: [0; 32], s }.has_canonical_s());

        s[0] -= 1;
        assert!(SignatureAuthorization { r: [0; 32], s }.has_canonical_s());
        assert!(SignatureAuthorization { r: [0; 32], s: [0; 32] }.has_canonical_s());
    }

    #[test]
    fn test_rejects_other_program() {
        let signer = Pubkey::new_unique();
        let authorization = sample_authorization();
        let mut instruction = ed25519_instruction(&signer, &authorization, &HASH);
        instruction.program_id = Pubkey::new_unique();

        assert_eq!(
            recover_from_ed25519_instruction(&instruction, &HASH, &authorization),
            None
        );
    }

    #[test]
    fn test_rejects_multiple_signatures() {
        let signer = Pubkey::new_unique();
        let authorization = sample_authorization();
        let mut instruction = ed25519_instruction(&signer, &authorization, &HASH);
        instruction.data[0] = 2;

        assert_eq!(
            recover_from_ed25519_instruction(&instruction, &HASH, &authorization),
            None
        );
    }

    #[test]
    fn test_rejects_data_from_other_instructions() {
        let signer = Pubkey::new_unique();
        let authorization = sample_authorization();
        let mut instruction = ed25519_instruction(&signer, &authorization, &HASH);
        // public_key_instruction_index -> instruction 0
        instruction.data[ED25519_OFFSETS_START + 6] = 0;
        instruction.data[ED25519_OFFSETS_START + 7] = 0;

        assert_eq!(
            recover_from_ed25519_instruction(&instruction, &HASH, &authorization),
            None
        );
    }

    #[test]
    fn test_rejects_wrong_message_size() {
        let signer = Pubkey::new_unique();
        let authorization = sample_authorization();
        let mut message = HASH.to_vec();
        message.push(0);
        let instruction = ed25519_instruction(&signer, &authorization, &message);

        assert_eq!(
            recover_from_ed25519_instruction(&instruction, &HASH, &authorization),
            None
        );
    }

    #[test]
    fn test_rejects_truncated_data() {
        let signer = Pubkey::new_unique();
        let authorization = sample_authorization();
        let mut instruction = ed25519_instruction(&signer, &authorization, &HASH);
        instruction.data.truncate(120);

        assert_eq!(
            recover_from_ed25519_instruction(&instruction, &HASH, &authorization),
            None
        );

        instruction.data.truncate(1);
        assert_eq!(
            recover_from_ed25519_instruction(&instruction, &HASH, &authorization),
            None
        );
    }

    #[test]
    fn test_parse_offsets() {
        let instruction =
            ed25519_instruction(&Pubkey::new_unique(), &sample_authorization(), &HASH);
        let offsets = Ed25519SignatureOffsets::parse(
            &instruction.data[ED25519_OFFSETS_START..ED25519_OFFSETS_START + ED25519_OFFSETS_LEN],
        )
        .unwrap();

        assert_eq!(offsets.signature_offset, SIGNATURE_OFFSET);
        assert_eq!(offsets.public_key_offset, PUBKEY_OFFSET);
        assert_eq!(offsets.message_data_offset, MESSAGE_OFFSET);
        assert_eq!(offsets.message_data_size, 32);
        assert_eq!(offsets.message_instruction_index, ED25519_CURRENT_INSTRUCTION);

        assert!(Ed25519SignatureOffsets::parse(&instruction.data[..4]).is_none());
    }

    #[test]
    fn test_authorization_bytes() {
        let authorization = sample_authorization();
        assert_eq!(SignatureAuthorization::from_bytes(&authorization.to_bytes()), authorization);
    }
}
