//! CLI argument parsing and settings resolution.
//!
//! Every required value can come from a flag or from its `SCRIBE_*`
//! environment variable; flags win when both are set.
use clap::Parser;
use secrecy::SecretString;
use url::Url;

use crate::{
    config::{
        ReleaseTarget, Settings, compile_ticket_pattern, normalize_jira_host,
    },
    error::{Result, ScribeError},
    forge::config::DEFAULT_API_URL,
    pipeline::tickets::TicketLinker,
};

/// Create a GitHub release listing the pull requests merged between two refs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, env = "SCRIBE_START")]
    /// Where to start the compare (commit, tag, or branch).
    pub start: Option<String>,

    #[arg(long, env = "SCRIBE_END")]
    /// Where to end the compare (commit, tag, or branch).
    pub end: Option<String>,

    #[arg(long, env = "SCRIBE_OWNER")]
    /// The repository owner.
    pub owner: Option<String>,

    #[arg(long, env = "SCRIBE_REPO")]
    /// The repository name.
    pub repo: Option<String>,

    #[arg(long, env = "SCRIBE_TOKEN", hide_env_values = true)]
    /// Access token.
    pub token: Option<String>,

    #[arg(long, env = "SCRIBE_JIRA")]
    /// Issue tracker host used for ticket links, e.g. acme.atlassian.net.
    pub jira: Option<String>,

    #[arg(long, env = "SCRIBE_REGEX")]
    /// Ticket prefix alternation, e.g. "ABC|XYZ".
    pub regex: Option<String>,

    #[arg(long, env = "SCRIBE_TARGET", value_enum, default_value_t = ReleaseTarget::Start)]
    /// Which compared ref the release is created against.
    pub target: ReleaseTarget,

    #[arg(long, env = "SCRIBE_API_URL", default_value = DEFAULT_API_URL)]
    /// GitHub API base URL. Set this for GitHub Enterprise.
    pub api_url: String,

    #[arg(long, visible_alias = "dry-run", default_value_t = false)]
    /// Print the release instead of creating it.
    pub dryrun: bool,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}

/// Record `name` as missing when `value` is absent or blank.
fn required(
    name: &'static str,
    value: Option<&str>,
    missing: &mut Vec<&'static str>,
) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => {
            missing.push(name);
            String::new()
        }
    }
}

impl Args {
    /// Validate arguments into [`Settings`]. Fails before any network access
    /// when a required value is missing or malformed.
    pub fn settings(&self) -> Result<Settings> {
        let mut missing = vec![];

        let start = required("start", self.start.as_deref(), &mut missing);
        let end = required("end", self.end.as_deref(), &mut missing);
        let owner = required("owner", self.owner.as_deref(), &mut missing);
        let repo = required("repo", self.repo.as_deref(), &mut missing);
        let token = required("token", self.token.as_deref(), &mut missing);
        let jira = required("jira", self.jira.as_deref(), &mut missing);
        let regex = required("regex", self.regex.as_deref(), &mut missing);

        if !missing.is_empty() {
            return Err(ScribeError::MissingConfig(missing));
        }

        let ticket_linker = TicketLinker::new(
            &compile_ticket_pattern(&regex)?,
            &normalize_jira_host(&jira),
        )?;
        let api_url = Url::parse(&self.api_url)?;

        let settings = Settings::builder()
            .start(start)
            .end(end)
            .owner(owner)
            .repo(repo)
            .token(SecretString::from(token))
            .ticket_linker(ticket_linker)
            .target(self.target)
            .api_url(api_url.as_str().trim_end_matches('/'))
            .dry_run(self.dryrun)
            .build()?;

        Ok(settings)
    }
}
