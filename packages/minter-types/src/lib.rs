pub mod collection_details;
pub mod config;
pub mod msg;
pub mod token_details;
pub mod types;
pub mod utils;
