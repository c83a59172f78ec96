use anchor_lang::prelude::*;

use crate::{
    constants::TREASURY_SEED, errors::FixedPriceSaleError, Market, MarketClosed, SellingResource,
    Treasury,
};

#[derive(Accounts)]
pub struct CloseMarket<'info> {
    pub closer: Signer<'info>,

    #[account(
        mut,
        has_one = selling_resource @ FixedPriceSaleError::PublicKeyMismatch,
        has_one = treasury @ FixedPriceSaleError::PublicKeyMismatch
    )]
    pub market: Account<'info, Market>,

    #[account(mut)]
    pub selling_resource: Account<'info, SellingResource>,

    #[account(
        seeds = [TREASURY_SEED, market.key().as_ref()],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,
}

impl<'info> CloseMarket<'info> {
    pub fn close_market(&mut self) -> Result<()> {
        // Eligibility is judged against ledger time only
        let current_time = Clock::get()?.unix_timestamp;

        if let Err(error) = self.market.close_at(self.closer.key(), current_time) {
            msg!(
                "close rejected: now={} start={} end={:?}",
                current_time,
                self.market.start_date,
                self.market.end_date
            );
            return Err(error);
        }

        self.selling_resource.release()?;

        emit!(MarketClosed {
            market: self.market.key(),
            closed_by: self.closer.key(),
            closed_at: current_time,
            unsold: self.selling_resource.remaining(),
            treasury_balance: self.treasury.balance,
        });

        Ok(())
    }
}
