use anchor_lang::prelude::*;

declare_id!("7FNXXGrGwbSyYoncVJKmi9J3fLtzvrfgAQPUao8LbUPY");

#[program]
pub mod test_0 {
    use super::*;

    /// Takes no accounts and no arguments. Only logs the program id.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        msg!("Greetings from: {:?}", ctx.program_id);
        Ok(())
    }
}

#[derive(Accounts)]
pub struct Initialize {}
