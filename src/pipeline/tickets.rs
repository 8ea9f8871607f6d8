//! Rewrites issue tracker ticket ids into markdown links.
use regex::{Captures, Regex};

use crate::error::{Result, ScribeError};

/// Links every ticket id in a title to its issue tracker page.
///
/// Text that is already a markdown link (`[text](url)`) is matched first and
/// left as is, so linking an already linked title changes nothing.
#[derive(Debug, Clone)]
pub struct TicketLinker {
    matcher: Regex,
    host: String,
}

impl TicketLinker {
    /// Fails with [`ScribeError::InvalidTicketPattern`] when the pattern
    /// cannot be combined with the link matcher, e.g. because it declares a
    /// `link` or `ticket` group of its own.
    pub fn new(ticket_pattern: &Regex, host: &str) -> Result<Self> {
        let matcher = Regex::new(&format!(
            r"(?<link>\[[^\]]*\]\([^)]*\))|(?<ticket>{})",
            ticket_pattern.as_str()
        ))
        .map_err(ScribeError::InvalidTicketPattern)?;

        Ok(Self {
            matcher,
            host: host.to_string(),
        })
    }

    /// Markdown link for a single ticket id.
    pub fn ticket_link(&self, ticket: &str) -> String {
        format!("[{ticket}](https://{}/browse/{ticket})", self.host)
    }

    pub fn link(&self, title: &str) -> String {
        self.matcher
            .replace_all(title, |caps: &Captures| match caps.name("ticket") {
                Some(ticket) => self.ticket_link(ticket.as_str()),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}
