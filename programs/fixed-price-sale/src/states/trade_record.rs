use anchor_lang::prelude::*;

use crate::errors::FixedPriceSaleError;

/// Units bought by one wallet from one market.
#[account]
#[derive(InitSpace)]
pub struct TradeRecord {
    pub market: Pubkey,
    pub wallet: Pubkey,
    pub already_bought: u64,
    pub bump: u8,
}

impl TradeRecord {
    pub fn check_purchase(&self, units: u64, pieces_in_one_wallet: u64) -> Result<u64> {
        let already_bought = self
            .already_bought
            .checked_add(units)
            .ok_or(FixedPriceSaleError::MathOverflow)?;

        require!(
            already_bought <= pieces_in_one_wallet,
            FixedPriceSaleError::WalletCapExceeded
        );

        Ok(already_bought)
    }

    pub fn record_purchase(&mut self, units: u64, pieces_in_one_wallet: u64) -> Result<()> {
        self.already_bought = self.check_purchase(units, pieces_in_one_wallet)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{assert_error, code_of, error_code};
    use proptest::prelude::*;

    fn record() -> TradeRecord {
        TradeRecord {
            market: Pubkey::new_unique(),
            wallet: Pubkey::new_unique(),
            already_bought: 0,
            bump: 253,
        }
    }

    #[test]
    fn purchases_accumulate_up_to_cap() {
        let mut record = record();
        record.record_purchase(1, 3).unwrap();
        record.record_purchase(2, 3).unwrap();
        assert_eq!(record.already_bought, 3);
    }

    #[test]
    fn purchase_over_cap_is_rejected() {
        let mut record = record();
        record.record_purchase(1, 1).unwrap();

        assert_error(record.record_purchase(1, 1), FixedPriceSaleError::WalletCapExceeded);
        assert_eq!(record.already_bought, 1);
    }

    proptest! {
        #[test]
        fn prop_wallet_never_exceeds_cap(
            cap in 1u64..20,
            requests in proptest::collection::vec(1u64..5, 0..50),
        ) {
            let mut record = record();

            for units in requests {
                let before = record.already_bought;
                let result = record.record_purchase(units, cap);

                if result.is_ok() {
                    prop_assert_eq!(record.already_bought, before + units);
                } else {
                    prop_assert_eq!(
                        error_code(&result),
                        Some(code_of(FixedPriceSaleError::WalletCapExceeded))
                    );
                    prop_assert_eq!(record.already_bought, before);
                }
                prop_assert!(record.already_bought <= cap);
            }
        }
    }
}
