// cause-message-rs/src/builder.rs
// Composes cause selection, escaping and URL resolution into the message
// posted back to the code review.

use tracing::debug;

use crate::error::{CauseMessageError, Result};
use crate::escape::escape_quotes;
use crate::model::FailureCauseDisplayData;
use crate::selection::{select_cause, DownstreamSearch, SelectedCause};
use crate::url::absolute_build_url;

/// Builds the build-completed message for a display data tree.
///
/// The builder is a pure function of its inputs: it performs no lookups and
/// keeps no state beyond the configured downstream search mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct CauseMessageBuilder {
    search: DownstreamSearch,
}

impl CauseMessageBuilder {
    pub fn new(search: DownstreamSearch) -> Self {
        Self { search }
    }

    pub fn downstream_search(&self) -> DownstreamSearch {
        self.search
    }

    pub fn select_cause<'a>(&self, root: &'a FailureCauseDisplayData) -> Option<SelectedCause<'a>> {
        select_cause(root, self.search)
    }

    /// `"<escaped cause> ( <url> )"`
    pub fn format_message(cause_text: &str, absolute_build_url: &str) -> String {
        format!("{} ( {} )", escape_quotes(cause_text), absolute_build_url)
    }

    /// Message for `root`, or `None` when no node in the tree has a cause.
    pub fn get_build_completed_message(
        &self,
        root: &FailureCauseDisplayData,
        root_url: Option<&str>,
    ) -> Option<String> {
        match self.try_build_completed_message(root, root_url) {
            Ok(message) => Some(message),
            Err(err) => {
                debug!(build_url = %root.build_url, reason = %err, "No build completed message");
                None
            }
        }
    }

    pub fn try_build_completed_message(
        &self,
        root: &FailureCauseDisplayData,
        root_url: Option<&str>,
    ) -> Result<String> {
        let selected = self
            .select_cause(root)
            .ok_or(CauseMessageError::NoCauseFound)?;

        debug!(
            build_url = %selected.build_url,
            depth = selected.depth,
            "Selected failure cause for build completed message"
        );

        let url = absolute_build_url(root_url, selected.build_url);
        Ok(Self::format_message(selected.text, &url))
    }
}
