// cause-message-rs/src/extension.rs
// Host-facing entry point: gates on the integration flag, looks up the
// display data for a build and hands it to the message builder.

use tracing::{debug, instrument};

use crate::builder::CauseMessageBuilder;
use crate::config::CauseMessageConfig;
use crate::error::{CauseMessageError, Result};
use crate::host::{DisplayDataSource, RootUrlProvider};

/// Provides the build-completed message posted to Gerrit.
///
/// Typical usage:
///
/// ```ignore
/// let cfg = CauseMessageConfig::from_env();
/// let extension = GerritMessageProviderExtension::new(cfg.clone(), source, cfg);
///
/// if let Some(message) = extension.get_build_completed_message("job/123") {
///     // hand `message` to the review integration
/// }
/// ```
pub struct GerritMessageProviderExtension<S, U> {
    enabled: bool,
    source: S,
    root_url: U,
    builder: CauseMessageBuilder,
}

impl<S, U> GerritMessageProviderExtension<S, U>
where
    S: DisplayDataSource,
    U: RootUrlProvider,
{
    pub fn new(cfg: CauseMessageConfig, source: S, root_url: U) -> Self {
        Self {
            enabled: cfg.gerrit_trigger_enabled,
            source,
            root_url,
            builder: CauseMessageBuilder::new(cfg.downstream_search),
        }
    }

    pub fn is_gerrit_trigger_enabled(&self) -> bool {
        self.enabled
    }

    pub fn builder(&self) -> &CauseMessageBuilder {
        &self.builder
    }

    /// Message for a completed build, or `None` when there is nothing to say.
    pub fn get_build_completed_message(&self, build_id: &str) -> Option<String> {
        match self.resolve_build_completed_message(build_id) {
            Ok(message) => Some(message),
            Err(err) => {
                debug!(build_id, reason = %err, "Skipping build completed message");
                None
            }
        }
    }

    /// Same as [`Self::get_build_completed_message`] but keeps the reason a
    /// message was not produced.
    #[instrument(
        name = "build_completed_message",
        skip(self, build_id),
        fields(build_id = %build_id)
    )]
    pub fn resolve_build_completed_message(&self, build_id: &str) -> Result<String> {
        if !self.enabled {
            return Err(CauseMessageError::IntegrationDisabled);
        }

        let root = self
            .source
            .display_data(build_id)
            .ok_or_else(|| CauseMessageError::MissingDisplayData {
                build_id: build_id.to_string(),
            })?;

        let root_url = self.root_url.root_url();
        if root_url.is_none() {
            debug!("Root URL unresolved, message will carry the relative build path");
        }

        self.builder
            .try_build_completed_message(&root, root_url.as_deref())
    }
}
