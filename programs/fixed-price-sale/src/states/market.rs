use anchor_lang::prelude::*;

use crate::{errors::FixedPriceSaleError, validate_labels, ClosePolicy, MarketPhase, MarketStatus};

#[account]
#[derive(InitSpace)]
pub struct Market {
    pub store: Pubkey,
    pub selling_resource: Pubkey,
    pub treasury_mint: Pubkey,
    pub treasury: Pubkey,
    pub owner: Pubkey,
    #[max_len(40)]
    pub name: String,
    #[max_len(60)]
    pub description: String,
    pub mutable: bool,
    pub price: u64,
    pub pieces_in_one_wallet: u64,
    pub start_date: i64,
    pub end_date: Option<i64>,
    pub close_policy: ClosePolicy,
    pub status: MarketStatus,
    pub closed_at: Option<i64>,
}

/// Sale terms supplied when a market is created.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct MarketParams {
    pub name: String,
    pub description: String,
    pub mutable: bool,
    pub price: u64,
    pub pieces_in_one_wallet: u64,
    pub start_date: i64,
    pub end_date: Option<i64>,
    pub close_policy: ClosePolicy,
}

/// Partial update of a market that has not started yet. `None` keeps the
/// current value; `end_date: Some(None)` removes the end date.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct EditMarketParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub mutable: Option<bool>,
    pub price: Option<u64>,
    pub pieces_in_one_wallet: Option<u64>,
    pub start_date: Option<i64>,
    pub end_date: Option<Option<i64>>,
}

/// Account keys a market is bound to at creation.
pub struct MarketAccounts {
    pub store: Pubkey,
    pub selling_resource: Pubkey,
    pub treasury_mint: Pubkey,
    pub treasury: Pubkey,
    pub owner: Pubkey,
}

fn validate_schedule(start_date: i64, end_date: Option<i64>, now: i64) -> Result<()> {
    require!(start_date >= now, FixedPriceSaleError::StartDateIsInPast);

    if let Some(end_date) = end_date {
        require!(
            end_date > start_date,
            FixedPriceSaleError::EndDateIsEarlierThanStartDate
        );
    }

    Ok(())
}

fn validate_wallet_cap(pieces_in_one_wallet: u64, available: u64) -> Result<()> {
    require!(pieces_in_one_wallet > 0, FixedPriceSaleError::InvalidParameter);
    require!(
        pieces_in_one_wallet <= available,
        FixedPriceSaleError::PiecesInOneWalletIsTooMuch
    );
    Ok(())
}

impl Market {
    /// Builds a market from validated terms. `available` is the unsold supply
    /// of the resource being bound.
    pub fn new(
        accounts: MarketAccounts,
        params: MarketParams,
        available: u64,
        now: i64,
    ) -> Result<Self> {
        validate_labels(&params.name, &params.description)?;
        validate_wallet_cap(params.pieces_in_one_wallet, available)?;
        validate_schedule(params.start_date, params.end_date, now)?;

        Ok(Self {
            store: accounts.store,
            selling_resource: accounts.selling_resource,
            treasury_mint: accounts.treasury_mint,
            treasury: accounts.treasury,
            owner: accounts.owner,
            name: params.name,
            description: params.description,
            mutable: params.mutable,
            price: params.price,
            pieces_in_one_wallet: params.pieces_in_one_wallet,
            start_date: params.start_date,
            end_date: params.end_date,
            close_policy: params.close_policy,
            status: MarketStatus::Created,
            closed_at: None,
        })
    }

    pub fn phase(&self, now: i64) -> MarketPhase {
        if self.status == MarketStatus::Closed {
            return MarketPhase::Closed;
        }

        if now < self.start_date {
            return MarketPhase::Created;
        }

        match self.end_date {
            Some(end_date) if now >= end_date => MarketPhase::Ended,
            _ => MarketPhase::Active,
        }
    }

    pub fn ensure_active(&self, now: i64) -> Result<()> {
        match self.phase(now) {
            MarketPhase::Active => Ok(()),
            MarketPhase::Created => err!(FixedPriceSaleError::MarketNotStarted),
            MarketPhase::Ended => err!(FixedPriceSaleError::MarketEnded),
            MarketPhase::Closed => err!(FixedPriceSaleError::MarketClosed),
        }
    }

    pub fn ensure_owner(&self, caller: Pubkey) -> Result<()> {
        require_keys_eq!(caller, self.owner, FixedPriceSaleError::Unauthorized);
        Ok(())
    }

    /// Total price of `units` pieces.
    pub fn cost(&self, units: u64) -> Result<u64> {
        self.price
            .checked_mul(units)
            .ok_or_else(|| error!(FixedPriceSaleError::MathOverflow))
    }

    /// Applies an edit while the sale has not opened yet.
    pub fn edit(&mut self, params: EditMarketParams, available: u64, now: i64) -> Result<()> {
        match self.phase(now) {
            MarketPhase::Created => {}
            MarketPhase::Closed => return err!(FixedPriceSaleError::MarketClosed),
            MarketPhase::Active | MarketPhase::Ended => {
                return err!(FixedPriceSaleError::MarketAlreadyActive)
            }
        }
        require!(self.mutable, FixedPriceSaleError::MarketImmutable);

        let name = params.name.unwrap_or_else(|| self.name.clone());
        let description = params
            .description
            .unwrap_or_else(|| self.description.clone());
        let pieces_in_one_wallet = params
            .pieces_in_one_wallet
            .unwrap_or(self.pieces_in_one_wallet);
        let start_date = params.start_date.unwrap_or(self.start_date);
        let end_date = params.end_date.unwrap_or(self.end_date);

        validate_labels(&name, &description)?;
        validate_wallet_cap(pieces_in_one_wallet, available)?;
        validate_schedule(start_date, end_date, now)?;

        self.name = name;
        self.description = description;
        self.pieces_in_one_wallet = pieces_in_one_wallet;
        self.start_date = start_date;
        self.end_date = end_date;
        if let Some(price) = params.price {
            self.price = price;
        }
        if let Some(mutable) = params.mutable {
            self.mutable = mutable;
        }

        Ok(())
    }

    /// Closes the market at ledger time `now` on behalf of `caller`.
    ///
    /// A market with an end date cannot be closed before that date by anyone;
    /// an open-ended market can be closed any time after it started.
    pub fn close_at(&mut self, caller: Pubkey, now: i64) -> Result<()> {
        require!(
            self.status != MarketStatus::Closed,
            FixedPriceSaleError::AlreadyClosed
        );

        if self.close_policy == ClosePolicy::OwnerOnly {
            self.ensure_owner(caller)?;
        }

        match self.end_date {
            Some(end_date) => {
                require!(now >= end_date, FixedPriceSaleError::MarketDurationNotOver);
            }
            None => {
                require!(
                    now >= self.start_date,
                    FixedPriceSaleError::MarketNotStarted
                );
            }
        }

        self.status = MarketStatus::Closed;
        self.closed_at = Some(now);

        Ok(())
    }
}
