//! Resolved, immutable settings for a single release run.
use clap::ValueEnum;
use derive_builder::Builder;
use regex::Regex;
use secrecy::SecretString;

use crate::{
    error::{Result, ScribeError},
    forge::config::{DEFAULT_API_URL, RemoteConfig},
    pipeline::tickets::TicketLinker,
};

/// Which compared ref the published release points at.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReleaseTarget {
    /// The start (base) ref of the comparison.
    #[default]
    Start,
    /// The end (head) ref of the comparison.
    End,
}

/// Everything a release run needs, validated once up front.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Settings {
    /// Ref the comparison starts from.
    pub start: String,
    /// Ref the comparison ends at.
    pub end: String,
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Access token used for every API call.
    pub token: SecretString,
    /// Links ticket ids to the issue tracker host.
    pub ticket_linker: TicketLinker,
    #[builder(default)]
    pub target: ReleaseTarget,
    #[builder(default = "DEFAULT_API_URL.to_string()")]
    pub api_url: String,
    #[builder(default)]
    pub dry_run: bool,
}

impl Settings {
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::default()
    }

    /// The ref the release is created against.
    pub fn target_commitish(&self) -> &str {
        match self.target {
            ReleaseTarget::Start => &self.start,
            ReleaseTarget::End => &self.end,
        }
    }

    pub fn remote_config(&self) -> RemoteConfig {
        RemoteConfig {
            api_url: self.api_url.trim_end_matches('/').to_string(),
            owner: self.owner.clone(),
            repo: self.repo.clone(),
            token: self.token.clone(),
            dry_run: self.dry_run,
        }
    }
}

impl From<SettingsBuilderError> for ScribeError {
    fn from(err: SettingsBuilderError) -> Self {
        Self::Other(color_eyre::Report::msg(format!("Builder error: {}", err)))
    }
}

/// Compile a ticket prefix alternation such as `ABC|XYZ` into a matcher for
/// full ticket ids like `ABC-123`.
pub fn compile_ticket_pattern(prefixes: &str) -> Result<Regex> {
    Regex::new(&format!(r"(?:{prefixes})-(?:\d+)"))
        .map_err(ScribeError::InvalidTicketPattern)
}

/// Reduce a tracker host to a bare host name: links are always built as
/// `https://<host>/browse/<ticket>`.
pub fn normalize_jira_host(host: &str) -> String {
    let host = host.trim();
    let host = host
        .strip_prefix("https://")
        .or_else(|| host.strip_prefix("http://"))
        .unwrap_or(host);
    host.trim_end_matches('/').to_string()
}
