//! Two-stage pipeline from compared commits to release lines.
//!
//! The extractor task sends pull request numbers, in commit order, to the
//! title resolver task, which sends formatted lines back to the caller. Both
//! hand-offs are bounded to a single value, so each stage has at most one
//! item in flight and output order always matches commit order.

/// Pull request number extraction from commit messages.
pub mod extract;

/// Release name and body composition.
pub mod release;

/// Ticket id to markdown link rewriting.
pub mod tickets;

/// Pull request title resolution and line formatting.
pub mod titles;

use log::*;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::{
    error::Result,
    forge::{manager::ForgeManager, request::ForgeCommit},
    pipeline::tickets::TicketLinker,
};

/// Capacity of each hand-off channel.
pub const HANDOFF_CAPACITY: usize = 1;

/// Run extraction and title resolution concurrently and collect every
/// release line in commit order.
///
/// Nothing is returned unless both stages finish cleanly. When the title
/// resolver fails its error is reported, since the extractor only stops
/// because its receiver went away.
pub async fn collect_release_lines(
    commits: Vec<ForgeCommit>,
    forge: Arc<ForgeManager>,
    linker: Arc<TicketLinker>,
) -> Result<Vec<String>> {
    let (number_tx, number_rx) = mpsc::channel(HANDOFF_CAPACITY);
    let (line_tx, mut line_rx) = mpsc::channel(HANDOFF_CAPACITY);

    let extractor =
        tokio::spawn(extract::extract_pull_requests(commits, number_tx));
    let resolver = tokio::spawn(titles::resolve_titles(
        forge, linker, number_rx, line_tx,
    ));

    let mut lines = vec![];

    while let Some(line) = line_rx.recv().await {
        lines.push(line);
    }

    resolver.await??;
    extractor.await??;

    debug!("collected {} release lines", lines.len());

    Ok(lines)
}
