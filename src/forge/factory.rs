//! Factory for creating forge implementations based on configuration.

use crate::{
    error::Result,
    forge::{config::RemoteConfig, github::Github, manager::ForgeManager},
};

/// Factory for creating forge implementations.
pub struct ForgeFactory;

impl ForgeFactory {
    /// Create a ForgeManager backed by the GitHub REST API.
    pub fn create(config: &RemoteConfig) -> Result<ForgeManager> {
        let forge = Github::new(config.clone())?;
        Ok(ForgeManager::new(Box::new(forge)))
    }
}
