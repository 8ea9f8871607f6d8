//! Turns pull request numbers into formatted release lines.
use log::*;
use std::sync::Arc;
use tokio::sync::mpsc::{Receiver, Sender};

use crate::{
    error::Result, forge::manager::ForgeManager,
    pipeline::tickets::TicketLinker,
};

/// A single release body line.
pub fn format_line(title: &str, number: u64) -> String {
    format!("- {title} #{number}")
}

/// Fetch the title of each received pull request, one at a time and in the
/// order received, and send its linked, formatted line on `tx`.
pub async fn resolve_titles(
    forge: Arc<ForgeManager>,
    linker: Arc<TicketLinker>,
    mut rx: Receiver<u64>,
    tx: Sender<String>,
) -> Result<()> {
    while let Some(number) = rx.recv().await {
        let title = forge
            .get_pull_request_title(number)
            .await
            .map_err(|err| err.context("failed getting pull request"))?;

        let line = format_line(&linker.link(&title), number);
        debug!("release line: {line}");

        if tx.send(line).await.is_err() {
            debug!("release composer stopped: halting title resolution");
            break;
        }
    }

    Ok(())
}
