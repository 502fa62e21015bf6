pub mod businesses;
pub mod config;
pub mod reviews;
