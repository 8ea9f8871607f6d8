//! Implements the Forge trait for Github
use async_trait::async_trait;
use log::*;
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    forge::{
        config::{DEFAULT_PAGE_SIZE, RemoteConfig},
        request::{CompareRequest, CreateReleaseRequest, ForgeCommit, Release},
        traits::Forge,
    },
};

#[derive(Debug, Serialize)]
struct PageParams {
    pub per_page: u8,
    pub page: u32,
}

#[derive(Debug, Deserialize)]
struct CompareCommitDetail {
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct CompareCommit {
    pub sha: String,
    pub commit: CompareCommitDetail,
}

#[derive(Debug, Deserialize)]
struct CompareResult {
    #[serde(default)]
    pub total_commits: u64,
    #[serde(default)]
    pub commits: Vec<CompareCommit>,
}

#[derive(Debug, Deserialize)]
struct PullRequestResult {
    pub number: u64,
    pub title: Option<String>,
}

#[derive(Debug, Serialize)]
struct GithubReleaseBody {
    pub tag_name: String,
    pub name: String,
    pub target_commitish: String,
    pub body: String,
    pub draft: bool,
    pub prerelease: bool,
}

#[derive(Debug, Deserialize)]
struct GithubRelease {
    pub id: u64,
    pub tag_name: String,
    pub name: Option<String>,
    #[serde(default)]
    pub html_url: String,
}

/// GitHub forge implementation using Octocrab for authenticated REST calls
/// against the compare, pulls, and releases endpoints.
pub struct Github {
    config: RemoteConfig,
    base_uri: String,
    instance: Octocrab,
}

impl Github {
    /// Create GitHub client with personal access token authentication and API
    /// base URL configuration.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let base_uri = config.api_url.trim_end_matches('/').to_string();
        let builder = Octocrab::builder()
            .personal_token(config.token.clone())
            .base_uri(base_uri.clone())?;
        let instance = builder.build()?;

        Ok(Self {
            config,
            base_uri,
            instance,
        })
    }

    fn repo_endpoint(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/{}",
            self.base_uri, self.config.owner, self.config.repo, path
        )
    }
}

#[async_trait]
impl Forge for Github {
    fn remote_config(&self) -> RemoteConfig {
        self.config.clone()
    }

    async fn compare_commits(
        &self,
        req: CompareRequest,
    ) -> Result<Vec<ForgeCommit>> {
        let endpoint =
            self.repo_endpoint(&format!("compare/{}...{}", req.base, req.head));

        let mut commits: Vec<ForgeCommit> = vec![];
        let mut page = 1;

        loop {
            let params = PageParams {
                per_page: DEFAULT_PAGE_SIZE,
                page,
            };

            let result: CompareResult =
                self.instance.get(&endpoint, Some(&params)).await?;

            let page_len = result.commits.len();

            commits.extend(result.commits.into_iter().map(|c| ForgeCommit {
                sha: c.sha,
                message: c.commit.message,
            }));

            debug!(
                "compare page {page}: {page_len} commits, {} of {} collected",
                commits.len(),
                result.total_commits
            );

            if page_len == 0 || commits.len() as u64 >= result.total_commits {
                break;
            }

            page += 1;
        }

        Ok(commits)
    }

    async fn get_pull_request_title(&self, number: u64) -> Result<String> {
        let endpoint = self.repo_endpoint(&format!("pulls/{number}"));

        let pr: PullRequestResult =
            self.instance.get(&endpoint, None::<&()>).await?;

        debug!("fetched pull request #{}", pr.number);

        Ok(pr.title.unwrap_or_default())
    }

    async fn create_release(
        &self,
        req: CreateReleaseRequest,
    ) -> Result<Release> {
        let endpoint = self.repo_endpoint("releases");

        let body = serde_json::json!(GithubReleaseBody {
            tag_name: req.tag_name,
            name: req.name,
            target_commitish: req.target_commitish,
            body: req.body,
            draft: false,
            prerelease: false,
        });

        let release: GithubRelease =
            self.instance.post(endpoint, Some(&body)).await?;

        Ok(Release {
            id: release.id,
            name: release.name.unwrap_or_else(|| release.tag_name.clone()),
            tag_name: release.tag_name,
            html_url: release.html_url,
        })
    }
}
