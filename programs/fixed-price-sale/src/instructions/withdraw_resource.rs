use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount, Transfer};

use crate::{
    constants::VAULT_OWNER_SEED, errors::FixedPriceSaleError, Market, ResourceWithdrawn,
    SellingResource,
};

#[derive(Accounts)]
pub struct WithdrawResource<'info> {
    pub owner: Signer<'info>,

    #[account(
        has_one = selling_resource @ FixedPriceSaleError::PublicKeyMismatch
    )]
    pub market: Account<'info, Market>,

    #[account(
        mut,
        has_one = vault @ FixedPriceSaleError::PublicKeyMismatch
    )]
    pub selling_resource: Account<'info, SellingResource>,

    /// CHECK: PDA authority for vault
    #[account(
        seeds = [VAULT_OWNER_SEED, selling_resource.key().as_ref()],
        bump = selling_resource.vault_owner_bump
    )]
    pub vault_owner: UncheckedAccount<'info>,

    #[account(mut)]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = destination.mint == selling_resource.resource @ FixedPriceSaleError::PublicKeyMismatch
    )]
    pub destination: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> WithdrawResource<'info> {
    pub fn withdraw_resource(&mut self) -> Result<()> {
        let units = self
            .selling_resource
            .withdraw_remaining(&self.market, self.owner.key())?;

        if units > 0 {
            let selling_resource_key = self.selling_resource.key();

            let seeds: &[&[u8]] = &[
                VAULT_OWNER_SEED,
                selling_resource_key.as_ref(),
                &[self.selling_resource.vault_owner_bump],
            ];

            let signer = &[seeds];

            let cpi_ctx = CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.vault.to_account_info(),
                    to: self.destination.to_account_info(),
                    authority: self.vault_owner.to_account_info(),
                },
                signer,
            );

            anchor_spl::token::transfer(cpi_ctx, units)?;
        }

        emit!(ResourceWithdrawn {
            market: self.market.key(),
            selling_resource: self.selling_resource.key(),
            destination: self.destination.key(),
            units,
        });

        Ok(())
    }
}
