pub mod buy;
pub mod close_market;
pub mod create_market;
pub mod create_store;
pub mod edit_market;
pub mod init_selling_resource;
pub mod withdraw;
pub mod withdraw_resource;

pub use buy::*;
pub use close_market::*;
pub use create_market::*;
pub use create_store::*;
pub use edit_market::*;
pub use init_selling_resource::*;
pub use withdraw::*;
pub use withdraw_resource::*;
