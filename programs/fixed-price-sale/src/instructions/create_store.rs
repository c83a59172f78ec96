use anchor_lang::prelude::*;

use crate::{StoreCreated, Store};

#[derive(Accounts)]
pub struct CreateStore<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = 8 + Store::INIT_SPACE,
    )]
    pub store: Account<'info, Store>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateStore<'info> {
    pub fn create_store(&mut self, name: String, description: String) -> Result<()> {
        self.store
            .set_inner(Store::new(self.admin.key(), name, description)?);

        emit!(StoreCreated {
            store: self.store.key(),
            admin: self.admin.key(),
        });

        Ok(())
    }
}
