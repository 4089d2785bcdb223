#![cfg(feature = "test-sbf")]

use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::solana_program::system_program;
use anchor_lang::{AccountDeserialize, InstructionData, ToAccountMetas};
use solana_program_test::{ProgramTest, ProgramTestContext};
use solana_sdk::signature::{Keypair, Signature, Signer};
use solana_sdk::transaction::Transaction;
use test_1::{Storage, INITIAL_DATA, STORAGE_SPACE};

fn initialize_ix(storage: Pubkey, user: Pubkey) -> Instruction {
    Instruction {
        program_id: test_1::ID,
        accounts: test_1::accounts::Initialize {
            storage,
            user,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: test_1::instruction::Initialize {}.data(),
    }
}

async fn start() -> ProgramTestContext {
    // Loads test_1.so from SBF_OUT_DIR
    ProgramTest::new("test_1", test_1::ID, None)
        .start_with_context()
        .await
}

#[tokio::test]
async fn test_initialize_storage_with_32() {
    let mut context = start().await;
    let storage = Keypair::new();

    let ix = initialize_ix(storage.pubkey(), context.payer.pubkey());
    let mut tx = Transaction::new_with_payer(&[ix], Some(&context.payer.pubkey()));
    tx.sign(&[&context.payer, &storage], context.last_blockhash);
    let signature = tx.signatures[0];

    context.banks_client.process_transaction(tx).await.unwrap();
    assert_ne!(signature, Signature::default());

    let account = context
        .banks_client
        .get_account(storage.pubkey())
        .await
        .unwrap()
        .expect("storage account exists after initialize");

    assert_eq!(account.owner, test_1::ID);
    assert_eq!(account.data.len(), STORAGE_SPACE);

    let decoded = Storage::try_deserialize(&mut account.data.as_slice()).unwrap();
    assert_eq!(decoded.data, INITIAL_DATA);
}

#[tokio::test]
async fn test_initialize_twice_fails() {
    let mut context = start().await;
    let storage = Keypair::new();
    let payer = context.payer.pubkey();

    let mut tx = Transaction::new_with_payer(&[initialize_ix(storage.pubkey(), payer)], Some(&payer));
    tx.sign(&[&context.payer, &storage], context.last_blockhash);
    context.banks_client.process_transaction(tx).await.unwrap();

    // Fresh blockhash so the retry is not deduplicated as the same transaction
    let blockhash = context.get_new_latest_blockhash().await.unwrap();
    let mut retry = Transaction::new_with_payer(&[initialize_ix(storage.pubkey(), payer)], Some(&payer));
    retry.sign(&[&context.payer, &storage], blockhash);

    let result = context.banks_client.process_transaction(retry).await;
    assert!(result.is_err(), "storage address is already in use");

    let account = context
        .banks_client
        .get_account(storage.pubkey())
        .await
        .unwrap()
        .unwrap();
    let decoded = Storage::try_deserialize(&mut account.data.as_slice()).unwrap();
    assert_eq!(decoded.data, INITIAL_DATA);
}

#[tokio::test]
async fn test_initialize_without_storage_signature_fails() {
    let mut context = start().await;
    let storage = Keypair::new();

    let mut ix = initialize_ix(storage.pubkey(), context.payer.pubkey());
    ix.accounts[0].is_signer = false;

    let mut tx = Transaction::new_with_payer(&[ix], Some(&context.payer.pubkey()));
    tx.sign(&[&context.payer], context.last_blockhash);

    let result = context.banks_client.process_transaction(tx).await;
    assert!(result.is_err());

    let account = context
        .banks_client
        .get_account(storage.pubkey())
        .await
        .unwrap();
    assert!(account.is_none());
}
