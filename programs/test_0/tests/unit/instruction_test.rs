use anchor_lang::{Discriminator, InstructionData, ToAccountMetas};

#[test]
fn test_initialize_data_is_discriminator_only() {
    let data = test_0::instruction::Initialize {}.data();

    // No arguments, so the payload is just the sighash of "global:initialize"
    assert_eq!(data, test_0::instruction::Initialize::DISCRIMINATOR);
    assert_eq!(data, [175, 175, 109, 31, 13, 152, 155, 237]);
}

#[test]
fn test_initialize_takes_no_accounts() {
    let metas = test_0::accounts::Initialize {}.to_account_metas(None);
    assert!(metas.is_empty());
}

#[test]
fn test_program_id_matches_declared_id() {
    assert_eq!(test_0::id(), test_0::ID);
    assert_eq!(
        test_0::ID.to_string(),
        "7FNXXGrGwbSyYoncVJKmi9J3fLtzvrfgAQPUao8LbUPY"
    );
}
