pub mod cli;
pub mod codec;
pub mod config;
pub mod dataset;
pub mod error;
pub mod image;

pub use config::Config;
pub use error::{Error, Result};
