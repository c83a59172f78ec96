use anchor_lang::prelude::*;

use crate::{errors::FixedPriceSaleError, EditMarketParams, Market, MarketEdited, SellingResource};

#[derive(Accounts)]
pub struct EditMarket<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        has_one = owner @ FixedPriceSaleError::Unauthorized,
        has_one = selling_resource @ FixedPriceSaleError::PublicKeyMismatch
    )]
    pub market: Account<'info, Market>,

    pub selling_resource: Account<'info, SellingResource>,
}

impl<'info> EditMarket<'info> {
    pub fn edit_market(&mut self, params: EditMarketParams) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        self.market
            .edit(params, self.selling_resource.remaining(), now)?;

        emit!(MarketEdited {
            market: self.market.key(),
            price: self.market.price,
            pieces_in_one_wallet: self.market.pieces_in_one_wallet,
            start_date: self.market.start_date,
            end_date: self.market.end_date,
        });

        Ok(())
    }
}
