pub mod config;
pub mod credentials;
pub mod paths;

pub use config::{BusinessEntry, Config, FacebookConfig, FetchOptions, GoogleConfig};
pub use credentials::CredentialStore;
pub use paths::{PathManager, container_base_path};
