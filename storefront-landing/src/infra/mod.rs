pub mod api_client;
pub mod config;
pub mod constants;
pub mod services;
pub mod viewport;

pub use api_client::{ApiClient, ApiError, ApiResult};
pub use config::{ConfigError, LandingConfig};
pub use viewport::{ViewportSignal, ViewportWatch};
