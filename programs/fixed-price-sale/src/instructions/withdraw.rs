use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount, Transfer};

use crate::{
    constants::TREASURY_SEED, errors::FixedPriceSaleError, Market, Treasury, TreasuryWithdrawn,
};

#[derive(Accounts)]
pub struct Withdraw<'info> {
    pub owner: Signer<'info>,

    #[account(
        has_one = treasury @ FixedPriceSaleError::PublicKeyMismatch
    )]
    pub market: Account<'info, Market>,

    #[account(
        mut,
        seeds = [TREASURY_SEED, market.key().as_ref()],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(
      mut,
      constraint = treasury_holder.key() == treasury.holder @ FixedPriceSaleError::PublicKeyMismatch
    )]
    pub treasury_holder: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = destination.mint == market.treasury_mint @ FixedPriceSaleError::PublicKeyMismatch
    )]
    pub destination: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> Withdraw<'info> {
    pub fn withdraw(&mut self) -> Result<()> {
        // Zero the balance before moving tokens
        let amount = self.treasury.withdraw(&self.market, self.owner.key())?;

        let market_key = self.market.key();

        let seeds: &[&[u8]] = &[
            TREASURY_SEED,
            market_key.as_ref(),
            &[self.treasury.bump],
        ];

        let signer = &[seeds];

        let cpi_ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            Transfer {
                from: self.treasury_holder.to_account_info(),
                to: self.destination.to_account_info(),
                authority: self.treasury.to_account_info(),
            },
            signer,
        );

        anchor_spl::token::transfer(cpi_ctx, amount)?;

        emit!(TreasuryWithdrawn {
            market: market_key,
            destination: self.destination.key(),
            amount,
        });

        Ok(())
    }
}
