pub mod app;
pub mod stargate;
