use anchor_lang::prelude::*;

use crate::{errors::FixedPriceSaleError, Market, MarketStatus};

/// Escrow record for the proceeds of one market. The tokens live in
/// `holder`, whose authority is this account's PDA.
#[account]
#[derive(InitSpace)]
pub struct Treasury {
    pub market: Pubkey,
    pub treasury_mint: Pubkey,
    pub holder: Pubkey,
    pub balance: u64,
    pub withdrawn: u64,
    pub bump: u8,
}

impl Treasury {
    pub fn new(market: Pubkey, treasury_mint: Pubkey, holder: Pubkey, bump: u8) -> Self {
        Self {
            market,
            treasury_mint,
            holder,
            balance: 0,
            withdrawn: 0,
            bump,
        }
    }

    pub fn check_credit(&self, amount: u64) -> Result<u64> {
        self.balance
            .checked_add(amount)
            .ok_or_else(|| error!(FixedPriceSaleError::MathOverflow))
    }

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.balance = self.check_credit(amount)?;
        Ok(())
    }

    /// Zeroes the balance and returns the amount to pay out to `caller`.
    pub fn withdraw(&mut self, market: &Market, caller: Pubkey) -> Result<u64> {
        market.ensure_owner(caller)?;
        require!(
            market.status == MarketStatus::Closed,
            FixedPriceSaleError::MarketNotClosed
        );
        require!(self.balance > 0, FixedPriceSaleError::NothingToWithdraw);

        let amount = self.balance;
        self.withdrawn = self
            .withdrawn
            .checked_add(amount)
            .ok_or(FixedPriceSaleError::MathOverflow)?;
        self.balance = 0;

        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{assert_error, sample_market, NOW};

    fn treasury() -> Treasury {
        Treasury::new(
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            254,
        )
    }

    #[test]
    fn credit_accumulates() {
        let mut treasury = treasury();
        treasury.credit(3).unwrap();
        treasury.credit(4).unwrap();
        assert_eq!(treasury.balance, 7);
    }

    #[test]
    fn credit_overflow_keeps_balance() {
        let mut treasury = treasury();
        treasury.credit(u64::MAX).unwrap();
        assert_error(treasury.credit(1), FixedPriceSaleError::MathOverflow);
        assert_eq!(treasury.balance, u64::MAX);
    }

    #[test]
    fn withdraw_before_close_fails() {
        let owner = Pubkey::new_unique();
        let market = sample_market(owner, None);
        let mut treasury = treasury();
        treasury.credit(10).unwrap();

        assert_error(
            treasury.withdraw(&market, owner),
            FixedPriceSaleError::MarketNotClosed,
        );
        assert_eq!(treasury.balance, 10);
    }

    #[test]
    fn withdraw_rejects_non_owner() {
        let owner = Pubkey::new_unique();
        let mut market = sample_market(owner, None);
        market.close_at(owner, NOW + 2).unwrap();
        let mut treasury = treasury();
        treasury.credit(10).unwrap();

        assert_error(
            treasury.withdraw(&market, Pubkey::new_unique()),
            FixedPriceSaleError::Unauthorized,
        );
        assert_eq!(treasury.balance, 10);
        assert_eq!(treasury.withdrawn, 0);
    }

    #[test]
    fn withdraw_pays_out_once() {
        let owner = Pubkey::new_unique();
        let mut market = sample_market(owner, None);
        market.close_at(owner, NOW + 2).unwrap();
        let mut treasury = treasury();
        treasury.credit(10).unwrap();

        assert_eq!(treasury.withdraw(&market, owner).unwrap(), 10);
        assert_eq!(treasury.balance, 0);
        assert_eq!(treasury.withdrawn, 10);

        assert_error(
            treasury.withdraw(&market, owner),
            FixedPriceSaleError::NothingToWithdraw,
        );
        assert_eq!(treasury.withdrawn, 10);
    }
}
