pub mod config;
pub mod error;
pub mod network;
pub mod system;

pub use error::PinError;
