//! Manager that wraps forge implementations
use log::*;

use crate::{
    error::Result,
    forge::{
        config::RemoteConfig,
        request::{CompareRequest, CreateReleaseRequest, ForgeCommit, Release},
        traits::Forge,
    },
};

pub struct ForgeManager {
    forge: Box<dyn Forge>,
    remote_config: RemoteConfig,
}

impl ForgeManager {
    pub fn new(forge: Box<dyn Forge>) -> Self {
        let remote_config = forge.remote_config();
        Self {
            forge,
            remote_config,
        }
    }

    pub async fn compare_commits(
        &self,
        req: CompareRequest,
    ) -> Result<Vec<ForgeCommit>> {
        debug!("comparing commits: {}...{}", req.base, req.head);
        self.forge.compare_commits(req).await
    }

    pub async fn get_pull_request_title(&self, number: u64) -> Result<String> {
        debug!("getting title for pull request #{number}");
        self.forge.get_pull_request_title(number).await
    }

    /// Publish the release, or log it and return `None` in dry-run mode.
    pub async fn create_release(
        &self,
        req: CreateReleaseRequest,
    ) -> Result<Option<Release>> {
        if self.remote_config.dry_run {
            info!(
                "dry_run: would create release: name: {}, target: {}",
                req.name, req.target_commitish
            );
            info!("dry_run: release body:\n{}", req.body);
            return Ok(None);
        }

        self.forge.create_release(req).await.map(Some)
    }
}
