pub mod api;
pub mod client;
pub mod normalize;

pub use client::FacebookClient;
