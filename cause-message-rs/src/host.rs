// cause-message-rs/src/host.rs
// Capabilities supplied by the build host.
//
// The message builder never reaches into the host directly; the extension
// receives these collaborators at construction time.

use std::collections::HashMap;

use crate::error::Result;
use crate::model::FailureCauseDisplayData;

/// Supplies the host's absolute base URL, e.g. `http://some.jenkins.com`.
pub trait RootUrlProvider {
    fn root_url(&self) -> Option<String>;
}

/// Supplies the failure cause display data recorded for a build.
///
/// `None` means the build has no failure cause record at all.
pub trait DisplayDataSource {
    fn display_data(&self, build_id: &str) -> Option<FailureCauseDisplayData>;
}

/// Root URL fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct StaticRootUrl(Option<String>);

impl StaticRootUrl {
    pub fn new(root_url: impl Into<String>) -> Self {
        Self(Some(root_url.into()))
    }

    pub fn unresolved() -> Self {
        Self(None)
    }
}

impl RootUrlProvider for StaticRootUrl {
    fn root_url(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Display data held in memory, keyed by build id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDisplayDataSource {
    builds: HashMap<String, FailureCauseDisplayData>,
}

impl InMemoryDisplayDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a JSON object mapping build ids to display data trees.
    pub fn from_json(raw: &str) -> Result<Self> {
        let builds: HashMap<String, FailureCauseDisplayData> = serde_json::from_str(raw)?;
        Ok(Self { builds })
    }

    pub fn insert(&mut self, build_id: impl Into<String>, data: FailureCauseDisplayData) {
        self.builds.insert(build_id.into(), data);
    }

    pub fn len(&self) -> usize {
        self.builds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builds.is_empty()
    }
}

impl DisplayDataSource for InMemoryDisplayDataSource {
    fn display_data(&self, build_id: &str) -> Option<FailureCauseDisplayData> {
        self.builds.get(build_id).cloned()
    }
}

impl<T: RootUrlProvider + ?Sized> RootUrlProvider for &T {
    fn root_url(&self) -> Option<String> {
        (**self).root_url()
    }
}

impl<T: DisplayDataSource + ?Sized> DisplayDataSource for &T {
    fn display_data(&self, build_id: &str) -> Option<FailureCauseDisplayData> {
        (**self).display_data(build_id)
    }
}

impl<T: RootUrlProvider + ?Sized> RootUrlProvider for Box<T> {
    fn root_url(&self) -> Option<String> {
        (**self).root_url()
    }
}

impl<T: DisplayDataSource + ?Sized> DisplayDataSource for Box<T> {
    fn display_data(&self, build_id: &str) -> Option<FailureCauseDisplayData> {
        (**self).display_data(build_id)
    }
}
