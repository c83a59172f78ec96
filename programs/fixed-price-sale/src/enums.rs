use anchor_lang::prelude::*;

/// Lifecycle status persisted on the market account.
///
/// Only the terminal transition is stored. Whether a market is currently
/// selling is derived from the clock, see [`MarketPhase`].
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum MarketStatus {
    Created,
    Closed,
}

/// Phase of a market as observed at a given ledger time.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MarketPhase {
    /// Start date not reached yet.
    Created,
    /// Accepting purchases.
    Active,
    /// End date reached; purchases rejected, close permitted.
    Ended,
    /// Closed and released to the owner.
    Closed,
}

/// Who may close a market once it is eligible.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum ClosePolicy {
    OwnerOnly,
    Anyone,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum SellingResourceState {
    /// Funded, never bound to a market.
    Created,
    /// Bound to a market that has not been closed.
    InUse,
    /// The bound market closed; remaining units can be rebound or withdrawn.
    Released,
    /// Remaining units were returned to the owner.
    Withdrawn,
}
