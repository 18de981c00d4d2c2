// cause-message-rs/src/model.rs
// Failure cause display data handed over by the build host.

use serde::{Deserialize, Serialize};

/// A named, described reason attributed to a failed build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureCause {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl FailureCause {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            categories: Vec::new(),
        }
    }
}

/// A failure cause that was detected on a particular build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoundFailureCause {
    pub cause: FailureCause,
}

impl FoundFailureCause {
    pub fn new(cause: FailureCause) -> Self {
        Self { cause }
    }

    pub fn name(&self) -> &str {
        &self.cause.name
    }

    pub fn description(&self) -> &str {
        &self.cause.description
    }
}

impl From<FailureCause> for FoundFailureCause {
    fn from(cause: FailureCause) -> Self {
        Self::new(cause)
    }
}

/// Per-build view of failure causes.
///
/// Each node carries the causes found directly on its build plus one child
/// per downstream build, in the order those builds were triggered. The tree is
/// built fresh by the host for each notification and read once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureCauseDisplayData {
    pub parent_url: String,
    pub parent_name: String,
    /// Relative path of the build, e.g. `/jobs/build/123`.
    pub build_url: String,
    pub build_name: String,
    #[serde(default)]
    pub found_failure_causes: Vec<FoundFailureCause>,
    #[serde(default)]
    pub downstream_failure_causes: Vec<FailureCauseDisplayData>,
}

impl FailureCauseDisplayData {
    pub fn new(
        parent_url: impl Into<String>,
        parent_name: impl Into<String>,
        build_url: impl Into<String>,
        build_name: impl Into<String>,
    ) -> Self {
        Self {
            parent_url: parent_url.into(),
            parent_name: parent_name.into(),
            build_url: build_url.into(),
            build_name: build_name.into(),
            found_failure_causes: Vec::new(),
            downstream_failure_causes: Vec::new(),
        }
    }

    pub fn set_found_failure_causes(&mut self, causes: Vec<FoundFailureCause>) {
        self.found_failure_causes = causes;
    }

    pub fn add_found_failure_cause(&mut self, cause: FoundFailureCause) {
        self.found_failure_causes.push(cause);
    }

    pub fn add_downstream_failure_cause(&mut self, downstream: FailureCauseDisplayData) {
        self.downstream_failure_causes.push(downstream);
    }

    pub fn with_found_failure_cause(mut self, cause: FoundFailureCause) -> Self {
        self.add_found_failure_cause(cause);
        self
    }

    pub fn with_downstream(mut self, downstream: FailureCauseDisplayData) -> Self {
        self.add_downstream_failure_cause(downstream);
        self
    }

    pub fn has_found_causes(&self) -> bool {
        !self.found_failure_causes.is_empty()
    }
}
