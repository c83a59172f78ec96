use anchor_lang::prelude::*;

// Variant order fixes the on-wire codes (6000 + index). Append only.
#[error_code]
pub enum FixedPriceSaleError {

    #[msg("Unauthorized access.")]
    Unauthorized,

    #[msg("Invalid parameter.")]
    InvalidParameter,

    #[msg("Name is too long.")]
    NameIsTooLong,

    #[msg("Description is too long.")]
    DescriptionIsTooLong,

    #[msg("Start date is in the past.")]
    StartDateIsInPast,

    #[msg("End date is earlier than start date.")]
    EndDateIsEarlierThanStartDate,

    #[msg("Pieces in one wallet exceed the available supply.")]
    PiecesInOneWalletIsTooMuch,

    #[msg("Public key mismatch.")]
    PublicKeyMismatch,

    #[msg("Selling resource is bound to another market.")]
    SellingResourceInUse,

    #[msg("Not enough supply left.")]
    SupplyExhausted,

    #[msg("Wallet purchase limit reached.")]
    WalletCapExceeded,

    #[msg("Market is not started.")]
    MarketNotStarted,

    #[msg("Market is ended.")]
    MarketEnded,

    #[msg("Market is closed.")]
    MarketClosed,

    #[msg("Market is already active.")]
    MarketAlreadyActive,

    #[msg("Market is immutable.")]
    MarketImmutable,

    #[msg("Market is already closed.")]
    AlreadyClosed,

    #[msg("Math overflow occurred.")]
    MathOverflow,

    #[msg("Market duration is not over.")]
    MarketDurationNotOver,

    #[msg("Market is not closed.")]
    MarketNotClosed,

    #[msg("Nothing to withdraw.")]
    NothingToWithdraw,

    #[msg("Selling resource is not bound to a market.")]
    SellingResourceNotInUse,
}
