use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

/// Value written to `Storage::data` by `initialize`.
pub const INITIAL_DATA: u64 = 32;

/// Bytes allocated for a `Storage` account, discriminator included.
pub const STORAGE_SPACE: usize = 8 + std::mem::size_of::<Storage>();

#[program]
pub mod test_1 {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        let storage = &mut ctx.accounts.storage;
        storage.initialize();

        msg!("Storage {} initialized with {}", storage.key(), storage.data);
        Ok(())
    }
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = user,
        space = STORAGE_SPACE
    )]
    pub storage: Account<'info, Storage>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[account]
#[derive(Default, Debug, PartialEq)]
pub struct Storage {
    pub data: u64,
}

impl Storage {
    pub fn initialize(&mut self) {
        self.data = INITIAL_DATA;
    }
}
