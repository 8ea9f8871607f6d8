//! Release generation and publication command implementation.
use chrono::Local;
use log::*;
use std::sync::Arc;

use crate::{
    cli,
    config::Settings,
    error::Result,
    forge::{
        factory::ForgeFactory,
        manager::ForgeManager,
        request::{CompareRequest, CreateReleaseRequest, Release},
    },
    pipeline::{
        self,
        release::{compose_body, release_name},
    },
};

/// Execute the release command: resolve settings, then generate and publish
/// the release. Settings are fully validated before the forge is created.
pub async fn execute(args: &cli::Args) -> Result<()> {
    let settings = args.settings()?;
    let forge = ForgeFactory::create(&settings.remote_config())?;

    run(&settings, Arc::new(forge)).await?;

    Ok(())
}

/// Generate the release for the configured refs and publish it. Returns the
/// created release, or `None` in dry-run mode.
pub async fn run(
    settings: &Settings,
    forge: Arc<ForgeManager>,
) -> Result<Option<Release>> {
    let req = generate_release(settings, Arc::clone(&forge)).await?;
    publish_release(forge.as_ref(), req).await
}

/// Build the release request: compare the refs, collect one line per merged
/// pull request, and name the release after the current local time.
pub async fn generate_release(
    settings: &Settings,
    forge: Arc<ForgeManager>,
) -> Result<CreateReleaseRequest> {
    info!(
        "comparing {}...{} in {}/{}",
        settings.start, settings.end, settings.owner, settings.repo
    );

    let commits = forge
        .compare_commits(CompareRequest {
            base: settings.start.clone(),
            head: settings.end.clone(),
        })
        .await
        .map_err(|err| err.context("failed comparing commits"))?;

    info!("found {} commits", commits.len());

    let linker = Arc::new(settings.ticket_linker.clone());

    let lines =
        pipeline::collect_release_lines(commits, forge, linker).await?;

    info!("found {} merged pull requests", lines.len());

    let name = release_name(&Local::now());

    Ok(CreateReleaseRequest {
        tag_name: name.clone(),
        name,
        target_commitish: settings.target_commitish().to_string(),
        body: compose_body(&lines),
    })
}

async fn publish_release(
    forge: &ForgeManager,
    req: CreateReleaseRequest,
) -> Result<Option<Release>> {
    let release = forge
        .create_release(req)
        .await
        .map_err(|err| err.context("failed creating release"))?;

    if let Some(release) = &release {
        info!("created release {}", release.name);
        debug!("release url: {}", release.html_url);
    }

    Ok(release)
}
