use anchor_lang::prelude::*;

declare_id!("SaLEYbKqPzRTRqhSGb6LHUMKaUyXZ5iC4DsrFPJZsAZ");

pub mod constants;
pub mod enums;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod states;

pub use constants::*;
pub use enums::*;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use states::*;

#[program]
pub mod fixed_price_sale {
    use super::*;

    pub fn create_store(
        ctx: Context<CreateStore>,
        name: String,
        description: String,
    ) -> Result<()> {
        ctx.accounts.create_store(name, description)
    }

    pub fn init_selling_resource(
        ctx: Context<InitSellingResource>,
        max_supply: u64,
    ) -> Result<()> {
        ctx.accounts.init_selling_resource(max_supply, ctx.bumps)
    }

    pub fn create_market(
        ctx: Context<CreateMarket>,
        params: MarketParams,
    ) -> Result<()> {
        ctx.accounts.create_market(params, ctx.bumps)
    }

    pub fn edit_market(
        ctx: Context<EditMarket>,
        params: EditMarketParams,
    ) -> Result<()> {
        ctx.accounts.edit_market(params)
    }

    pub fn buy(
        ctx: Context<Buy>,
        units: u64,
    ) -> Result<()> {
        ctx.accounts.buy(units, ctx.bumps)
    }

    pub fn close_market(
        ctx: Context<CloseMarket>,
    ) -> Result<()> {
        ctx.accounts.close_market()
    }

    pub fn withdraw(
        ctx: Context<Withdraw>,
    ) -> Result<()> {
        ctx.accounts.withdraw()
    }

    pub fn withdraw_resource(
        ctx: Context<WithdrawResource>,
    ) -> Result<()> {
        ctx.accounts.withdraw_resource()
    }
}
