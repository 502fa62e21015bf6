pub mod business;
pub mod filter;
pub mod platform;
pub mod review;

pub use business::BusinessSummary;
pub use filter::{ReviewFilter, SortOrder};
pub use platform::Platform;
pub use review::{Review, ReviewResponse};
