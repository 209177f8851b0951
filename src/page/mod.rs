pub mod render;

pub use render::{HtmlRenderer, Renderer};

use log::debug;
use std::collections::HashMap;

use crate::error::{Result, SandboxError};

pub const CHAIN_OUTPUT: &str = "chain-output";
pub const KEY_INFO: &str = "key-info";
pub const SIG_OUTPUT: &str = "sig-output";
pub const MEMPOOL_LIST: &str = "mempool-list";
pub const BLOCK_LIST: &str = "block-list";
pub const GAS_OUTPUT: &str = "gas-output";
pub const GAS_MOOD: &str = "gas-mood";
pub const DATA_RESULT: &str = "data-result";
pub const SAFETY_SCORE: &str = "safety-score";
pub const PROGRESS_TEXT: &str = "progress-text";

pub const ALL_REGIONS: [&str; 10] = [
    CHAIN_OUTPUT,
    KEY_INFO,
    SIG_OUTPUT,
    MEMPOOL_LIST,
    BLOCK_LIST,
    GAS_OUTPUT,
    GAS_MOOD,
    DATA_RESULT,
    SAFETY_SCORE,
    PROGRESS_TEXT,
];

#[derive(Debug, Default)]
struct Region {
    content: String,
    committed_ticket: u64,
}

/// The host page: a fixed set of named output regions.
///
/// Regions are replaced wholesale. A region the page was not built with
/// stays missing; widgets writing to it become no-ops.
#[derive(Debug, Default)]
pub struct Page {
    regions: HashMap<String, Region>,
}

impl Page {
    pub fn with_regions<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            regions: ids
                .into_iter()
                .map(|id| (id.into(), Region::default()))
                .collect(),
        }
    }

    /// A page carrying every region the widgets know about.
    pub fn learning() -> Self {
        Self::with_regions(ALL_REGIONS)
    }

    pub fn has_region(&self, id: &str) -> bool {
        self.regions.contains_key(id)
    }

    pub fn region(&self, id: &str) -> Result<&str> {
        self.regions
            .get(id)
            .map(|r| r.content.as_str())
            .ok_or_else(|| SandboxError::MissingOutputTarget(id.to_string()))
    }

    /// Replace the whole content of `id`.
    pub fn replace(&mut self, id: &str, content: String) -> Result<()> {
        let region = self
            .regions
            .get_mut(id)
            .ok_or_else(|| SandboxError::MissingOutputTarget(id.to_string()))?;
        region.content = content;
        Ok(())
    }

    /// Replace `id` only if `ticket` is not older than the last committed one.
    /// Returns whether the content was applied.
    pub fn commit(&mut self, id: &str, ticket: u64, content: String) -> Result<bool> {
        let region = self
            .regions
            .get_mut(id)
            .ok_or_else(|| SandboxError::MissingOutputTarget(id.to_string()))?;
        if ticket < region.committed_ticket {
            debug!(
                "PAGE - dropped stale render for #{} (ticket {} < {})",
                id, ticket, region.committed_ticket
            );
            return Ok(false);
        }
        region.committed_ticket = ticket;
        region.content = content;
        Ok(true)
    }

    /// Like `replace`, but a missing region is a silent no-op.
    pub fn present(&mut self, id: &str, content: String) -> bool {
        match self.replace(id, content) {
            Ok(()) => true,
            Err(e) => {
                debug!("PAGE - skip render: {e}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CHAIN_OUTPUT, GAS_OUTPUT, Page};
    use crate::error::SandboxError;

    #[test]
    fn missing_region_is_reported() {
        let mut page = Page::with_regions([GAS_OUTPUT]);
        assert_eq!(
            page.replace(CHAIN_OUTPUT, "x".into()),
            Err(SandboxError::MissingOutputTarget(CHAIN_OUTPUT.into()))
        );
        assert!(!page.present(CHAIN_OUTPUT, "x".into()));
        assert!(page.present(GAS_OUTPUT, "ok".into()));
        assert_eq!(page.region(GAS_OUTPUT).unwrap(), "ok");
    }

    #[test]
    fn stale_ticket_is_dropped() {
        let mut page = Page::learning();
        assert!(page.commit(CHAIN_OUTPUT, 2, "second".into()).unwrap());
        assert!(!page.commit(CHAIN_OUTPUT, 1, "first".into()).unwrap());
        assert_eq!(page.region(CHAIN_OUTPUT).unwrap(), "second");
        assert!(page.commit(CHAIN_OUTPUT, 3, "third".into()).unwrap());
        assert_eq!(page.region(CHAIN_OUTPUT).unwrap(), "third");
    }

    #[test]
    fn learning_page_has_every_region() {
        let page = Page::learning();
        assert!(page.has_region(CHAIN_OUTPUT));
        assert_eq!(page.region(GAS_OUTPUT).unwrap(), "");
    }
}
