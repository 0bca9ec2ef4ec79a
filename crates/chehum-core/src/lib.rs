//! Chehum Core — shared error type, configuration and the campaign record.

pub mod campaign;
pub mod config;
pub mod error;

pub use campaign::Campaign;
pub use config::ChehumConfig;
pub use error::{Error, Result};
