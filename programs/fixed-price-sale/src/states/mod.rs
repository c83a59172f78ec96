pub mod market;
pub mod selling_resource;
pub mod store;
pub mod trade_record;
pub mod treasury;

pub use market::*;
pub use selling_resource::*;
pub use store::*;
pub use trade_record::*;
pub use treasury::*;
