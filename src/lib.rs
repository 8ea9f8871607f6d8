pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod forge;
pub mod pipeline;

pub use cli::Args;
pub use error::{Result, ScribeError};
