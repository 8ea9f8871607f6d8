//! Traits related to remote git forges
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::{
    error::Result,
    forge::{
        config::RemoteConfig,
        request::{CompareRequest, CreateReleaseRequest, ForgeCommit, Release},
    },
};

/// Remote operations the release pipeline needs from a hosting service.
/// Implementations are shared across pipeline tasks.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Forge: Send + Sync {
    fn remote_config(&self) -> RemoteConfig;
    async fn compare_commits(
        &self,
        req: CompareRequest,
    ) -> Result<Vec<ForgeCommit>>;
    async fn get_pull_request_title(&self, number: u64) -> Result<String>;
    async fn create_release(&self, req: CreateReleaseRequest)
    -> Result<Release>;
}
