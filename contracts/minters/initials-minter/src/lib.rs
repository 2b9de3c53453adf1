pub mod authorization;
pub mod contract;
pub mod error;
pub mod msg;
pub mod pricing;
pub mod state;
pub mod utils;

pub use crate::error::ContractError;
