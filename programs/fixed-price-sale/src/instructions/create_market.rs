use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{
    constants::TREASURY_SEED, errors::FixedPriceSaleError, Market, MarketAccounts,
    MarketCreated, MarketParams, SellingResource, Store, Treasury,
};

#[derive(Accounts)]
pub struct CreateMarket<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(has_one = admin @ FixedPriceSaleError::Unauthorized)]
    pub store: Account<'info, Store>,

    #[account(
        mut,
        has_one = store @ FixedPriceSaleError::PublicKeyMismatch
    )]
    pub selling_resource: Account<'info, SellingResource>,

    #[account(
        init,
        payer = admin,
        space = 8 + Market::INIT_SPACE,
    )]
    pub market: Account<'info, Market>,

    pub treasury_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = admin,
        space = 8 + Treasury::INIT_SPACE,
        seeds = [TREASURY_SEED, market.key().as_ref()],
        bump
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(
        init,
        payer = admin,
        associated_token::mint = treasury_mint,
        associated_token::authority = treasury
    )]
    pub treasury_holder: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> CreateMarket<'info> {
    pub fn create_market(
        &mut self,
        params: MarketParams,
        bumps: CreateMarketBumps,
    ) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        let market = Market::new(
            MarketAccounts {
                store: self.store.key(),
                selling_resource: self.selling_resource.key(),
                treasury_mint: self.treasury_mint.key(),
                treasury: self.treasury.key(),
                owner: self.admin.key(),
            },
            params,
            self.selling_resource.remaining(),
            now,
        )?;

        // Resource stays bound until this market is closed
        self.selling_resource.bind()?;

        self.market.set_inner(market);

        self.treasury.set_inner(Treasury::new(
            self.market.key(),
            self.treasury_mint.key(),
            self.treasury_holder.key(),
            bumps.treasury,
        ));

        emit!(MarketCreated {
            market: self.market.key(),
            store: self.market.store,
            selling_resource: self.market.selling_resource,
            treasury_mint: self.market.treasury_mint,
            price: self.market.price,
            pieces_in_one_wallet: self.market.pieces_in_one_wallet,
            start_date: self.market.start_date,
            end_date: self.market.end_date,
        });

        Ok(())
    }
}
