use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount, Transfer};

use crate::{
    constants::{TRADE_RECORD_SEED, TREASURY_SEED, VAULT_OWNER_SEED},
    errors::FixedPriceSaleError,
    Market, PurchaseSettled, SellingResource, TradeRecord, Treasury,
};

#[derive(Accounts)]
pub struct Buy<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        has_one = selling_resource @ FixedPriceSaleError::PublicKeyMismatch,
        has_one = treasury @ FixedPriceSaleError::PublicKeyMismatch
    )]
    pub market: Account<'info, Market>,

    #[account(
        mut,
        has_one = vault @ FixedPriceSaleError::PublicKeyMismatch
    )]
    pub selling_resource: Account<'info, SellingResource>,

    #[account(
        init_if_needed,
        payer = buyer,
        space = 8 + TradeRecord::INIT_SPACE,
        seeds = [TRADE_RECORD_SEED, market.key().as_ref(), buyer.key().as_ref()],
        bump
    )]
    pub trade_record: Account<'info, TradeRecord>,

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
        constraint = payment_account.mint == market.treasury_mint @ FixedPriceSaleError::PublicKeyMismatch,
        constraint = payment_account.owner == buyer.key() @ FixedPriceSaleError::Unauthorized
    )]
    pub payment_account: Account<'info, TokenAccount>,

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
    pub system_program: Program<'info, System>,
}

/// Settles one purchase against the ledger records.
///
/// Every check runs before the first write, so an error leaves the supply
/// counter, the wallet counter and the treasury exactly as they were.
/// Returns the amount owed to the treasury.
pub fn settle_purchase(
    market: &Market,
    selling_resource: &mut SellingResource,
    trade_record: &mut TradeRecord,
    treasury: &mut Treasury,
    units: u64,
    now: i64,
) -> Result<u64> {
    market.ensure_active(now)?;

    let amount = market.cost(units)?;
    let sold = selling_resource.check_reserve(units)?;
    let already_bought = trade_record.check_purchase(units, market.pieces_in_one_wallet)?;
    let balance = treasury.check_credit(amount)?;

    selling_resource.sold = sold;
    trade_record.already_bought = already_bought;
    treasury.balance = balance;

    Ok(amount)
}

impl<'info> Buy<'info> {
    pub fn buy(&mut self, units: u64, bumps: BuyBumps) -> Result<()> {
        let current_time = Clock::get()?.unix_timestamp;

        // First purchase by this wallet
        if self.trade_record.wallet == Pubkey::default() {
            self.trade_record.set_inner(TradeRecord {
                market: self.market.key(),
                wallet: self.buyer.key(),
                already_bought: 0,
                bump: bumps.trade_record,
            });
        }

        let amount = settle_purchase(
            &self.market,
            &mut self.selling_resource,
            &mut self.trade_record,
            &mut self.treasury,
            units,
            current_time,
        )?;

        // Collect payment
        if amount > 0 {
            let cpi_ctx = CpiContext::new(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.payment_account.to_account_info(),
                    to: self.treasury_holder.to_account_info(),
                    authority: self.buyer.to_account_info(),
                },
            );

            anchor_spl::token::transfer(cpi_ctx, amount)?;
        }

        // Release units from custody
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

        emit!(PurchaseSettled {
            market: self.market.key(),
            buyer: self.buyer.key(),
            units,
            amount,
            sold: self.selling_resource.sold,
            already_bought: self.trade_record.already_bought,
        });

        Ok(())
    }
}
