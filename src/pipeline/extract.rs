//! Pulls merged pull request numbers out of commit messages.
use log::*;
use regex::Regex;
use tokio::sync::mpsc::Sender;

use crate::{
    error::{Result, ScribeError},
    forge::request::ForgeCommit,
};

const PULL_REQUEST_PATTERN: &str = r"Merge pull request #(?<number>\d+)";

/// Recognizes GitHub merge commit messages.
#[derive(Debug, Clone)]
pub struct PullRequestExtractor {
    re: Regex,
}

impl PullRequestExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            re: Regex::new(PULL_REQUEST_PATTERN)?,
        })
    }

    /// Number of the pull request merged by this commit, if any.
    pub fn parse_pull_request_number(
        &self,
        message: &str,
    ) -> Result<Option<u64>> {
        let Some(captures) = self.re.captures(message) else {
            return Ok(None);
        };

        let number = captures["number"].parse::<u64>().map_err(|err| {
            ScribeError::from(err).context("failed parsing pull request number")
        })?;

        Ok(Some(number))
    }
}

/// Send the pull request number of every merge commit, in commit order.
/// Dropping `tx` on return closes the channel for the title resolver.
pub async fn extract_pull_requests(
    commits: Vec<ForgeCommit>,
    tx: Sender<u64>,
) -> Result<()> {
    let extractor = PullRequestExtractor::new()?;

    for commit in commits.iter() {
        let Some(number) =
            extractor.parse_pull_request_number(&commit.message)?
        else {
            continue;
        };

        debug!("found pull request #{number} in commit {}", commit.sha);

        if tx.send(number).await.is_err() {
            debug!("title resolver stopped: halting extraction");
            break;
        }
    }

    Ok(())
}
