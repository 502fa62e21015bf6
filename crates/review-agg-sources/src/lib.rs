pub mod error;
pub mod facebook;
pub mod factory;
pub mod google;
pub mod traits;

mod http;

pub use error::SourceError;
pub use facebook::FacebookClient;
pub use factory::{SourceFactory, SourceRegistry};
pub use google::GoogleClient;
pub use traits::{ProviderSnapshot, ReviewSource};
