use anchor_lang::prelude::*;

#[event]
pub struct StoreCreated {
    pub store: Pubkey,
    pub admin: Pubkey,
}

#[event]
pub struct SellingResourceInitialized {
    pub selling_resource: Pubkey,
    pub store: Pubkey,
    pub resource: Pubkey,
    pub max_supply: u64,
}

#[event]
pub struct MarketCreated {
    pub market: Pubkey,
    pub store: Pubkey,
    pub selling_resource: Pubkey,
    pub treasury_mint: Pubkey,
    pub price: u64,
    pub pieces_in_one_wallet: u64,
    pub start_date: i64,
    pub end_date: Option<i64>,
}

#[event]
pub struct MarketEdited {
    pub market: Pubkey,
    pub price: u64,
    pub pieces_in_one_wallet: u64,
    pub start_date: i64,
    pub end_date: Option<i64>,
}

#[event]
pub struct PurchaseSettled {
    pub market: Pubkey,
    pub buyer: Pubkey,
    pub units: u64,
    pub amount: u64,
    pub sold: u64,
    pub already_bought: u64,
}

#[event]
pub struct MarketClosed {
    pub market: Pubkey,
    pub closed_by: Pubkey,
    pub closed_at: i64,
    pub unsold: u64,
    pub treasury_balance: u64,
}

#[event]
pub struct TreasuryWithdrawn {
    pub market: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
}

#[event]
pub struct ResourceWithdrawn {
    pub market: Pubkey,
    pub selling_resource: Pubkey,
    pub destination: Pubkey,
    pub units: u64,
}
