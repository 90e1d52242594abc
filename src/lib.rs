pub mod config;
pub mod error;
pub mod logger;
pub mod proxy;

pub use config::Config;
pub use error::{MapsError, MapsResult};
