use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount, Transfer};

use crate::{
    constants::VAULT_OWNER_SEED, errors::FixedPriceSaleError, SellingResource,
    SellingResourceInitialized, Store,
};

#[derive(Accounts)]
pub struct InitSellingResource<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(has_one = admin @ FixedPriceSaleError::Unauthorized)]
    pub store: Account<'info, Store>,

    #[account(
        init,
        payer = admin,
        space = 8 + SellingResource::INIT_SPACE,
    )]
    pub selling_resource: Account<'info, SellingResource>,

    pub resource_mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = resource_source.mint == resource_mint.key() @ FixedPriceSaleError::PublicKeyMismatch,
        constraint = resource_source.owner == admin.key() @ FixedPriceSaleError::Unauthorized
    )]
    pub resource_source: Account<'info, TokenAccount>,

    /// CHECK: PDA authority for vault
    #[account(
        seeds = [VAULT_OWNER_SEED, selling_resource.key().as_ref()],
        bump
    )]
    pub vault_owner: UncheckedAccount<'info>,

    #[account(
        init,
        payer = admin,
        associated_token::mint = resource_mint,
        associated_token::authority = vault_owner
    )]
    pub vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> InitSellingResource<'info> {
    pub fn init_selling_resource(
        &mut self,
        max_supply: u64,
        bumps: InitSellingResourceBumps,
    ) -> Result<()> {
        self.selling_resource.set_inner(SellingResource::new(
            self.store.key(),
            self.admin.key(),
            self.resource_mint.key(),
            self.vault.key(),
            self.vault_owner.key(),
            bumps.vault_owner,
            max_supply,
        )?);

        // Move the whole supply into custody up front
        let cpi_ctx = CpiContext::new(
            self.token_program.to_account_info(),
            Transfer {
                from: self.resource_source.to_account_info(),
                to: self.vault.to_account_info(),
                authority: self.admin.to_account_info(),
            },
        );

        anchor_spl::token::transfer(cpi_ctx, max_supply)?;

        emit!(SellingResourceInitialized {
            selling_resource: self.selling_resource.key(),
            store: self.store.key(),
            resource: self.resource_mint.key(),
            max_supply,
        });

        Ok(())
    }
}
