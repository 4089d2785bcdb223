use anchor_lang::solana_program::system_program;
use anchor_lang::prelude::Pubkey;
use anchor_lang::{Discriminator, InstructionData, ToAccountMetas};

#[test]
fn test_initialize_data_is_discriminator_only() {
    let data = test_1::instruction::Initialize {}.data();
    assert_eq!(data, test_1::instruction::Initialize::DISCRIMINATOR);
    assert_eq!(data.len(), 8);
}

#[test]
fn test_initialize_account_metas() {
    let storage = Pubkey::new_unique();
    let user = Pubkey::new_unique();

    let metas = test_1::accounts::Initialize {
        storage,
        user,
        system_program: system_program::ID,
    }
    .to_account_metas(None);

    assert_eq!(metas.len(), 3);

    // storage: created by this instruction, so it must co-sign
    assert_eq!(metas[0].pubkey, storage);
    assert!(metas[0].is_signer);
    assert!(metas[0].is_writable);

    // user: pays for the new account
    assert_eq!(metas[1].pubkey, user);
    assert!(metas[1].is_signer);
    assert!(metas[1].is_writable);

    assert_eq!(metas[2].pubkey, system_program::ID);
    assert!(!metas[2].is_signer);
    assert!(!metas[2].is_writable);
}

#[test]
fn test_program_id_matches_declared_id() {
    assert_eq!(test_1::id(), test_1::ID);
    assert_eq!(
        test_1::ID.to_string(),
        "Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS"
    );
}
