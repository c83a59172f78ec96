use anchor_lang::prelude::*;

use crate::{errors::FixedPriceSaleError, Market, MarketStatus, SellingResourceState};

/// Custodial record for the finite supply a store puts up for sale.
///
/// The units themselves sit in `vault`, a token account whose authority is
/// the `vault_owner` PDA. This record is the single source of truth for how
/// many of them are spoken for.
#[account]
#[derive(InitSpace)]
pub struct SellingResource {
    pub store: Pubkey,
    pub owner: Pubkey,
    pub resource: Pubkey,
    pub vault: Pubkey,
    pub vault_owner: Pubkey,
    pub vault_owner_bump: u8,
    pub max_supply: u64,
    pub sold: u64,
    pub state: SellingResourceState,
}

impl SellingResource {
    pub fn new(
        store: Pubkey,
        owner: Pubkey,
        resource: Pubkey,
        vault: Pubkey,
        vault_owner: Pubkey,
        vault_owner_bump: u8,
        max_supply: u64,
    ) -> Result<Self> {
        require!(max_supply > 0, FixedPriceSaleError::InvalidParameter);

        Ok(Self {
            store,
            owner,
            resource,
            vault,
            vault_owner,
            vault_owner_bump,
            max_supply,
            sold: 0,
            state: SellingResourceState::Created,
        })
    }

    pub fn remaining(&self) -> u64 {
        self.max_supply.saturating_sub(self.sold)
    }

    /// Fails unless `units` more can be sold without passing `max_supply`.
    pub fn check_reserve(&self, units: u64) -> Result<u64> {
        require!(units > 0, FixedPriceSaleError::InvalidParameter);

        let sold = self
            .sold
            .checked_add(units)
            .ok_or(FixedPriceSaleError::MathOverflow)?;

        require!(sold <= self.max_supply, FixedPriceSaleError::SupplyExhausted);

        Ok(sold)
    }

    pub fn reserve(&mut self, units: u64) -> Result<()> {
        self.sold = self.check_reserve(units)?;
        Ok(())
    }

    /// Binds the resource to a new market.
    pub fn bind(&mut self) -> Result<()> {
        match self.state {
            SellingResourceState::Created | SellingResourceState::Released => {}
            SellingResourceState::InUse => {
                return err!(FixedPriceSaleError::SellingResourceInUse)
            }
            SellingResourceState::Withdrawn => return err!(FixedPriceSaleError::SupplyExhausted),
        }
        require!(self.remaining() > 0, FixedPriceSaleError::SupplyExhausted);

        self.state = SellingResourceState::InUse;
        Ok(())
    }

    /// Unbinds the resource from the market that just closed.
    pub fn release(&mut self) -> Result<()> {
        require!(
            self.state == SellingResourceState::InUse,
            FixedPriceSaleError::SellingResourceNotInUse
        );

        self.state = SellingResourceState::Released;
        Ok(())
    }

    /// Marks the unsold units as returned to the owner of the closed `market`
    /// and reports how many there are.
    pub fn withdraw_remaining(&mut self, market: &Market, caller: Pubkey) -> Result<u64> {
        market.ensure_owner(caller)?;
        require!(
            market.status == MarketStatus::Closed,
            FixedPriceSaleError::MarketNotClosed
        );

        match self.state {
            SellingResourceState::Released => {}
            SellingResourceState::Withdrawn => return err!(FixedPriceSaleError::NothingToWithdraw),
            _ => return err!(FixedPriceSaleError::SellingResourceInUse),
        }

        self.state = SellingResourceState::Withdrawn;
        Ok(self.remaining())
    }
}
