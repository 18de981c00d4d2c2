//! # Cause Message - Failure Cause Notifications for Code Review
//!
//! Builds the message posted back to Gerrit when a build completes: the most
//! relevant failure cause found in the build's display data tree, with single
//! quotes escaped, followed by a link to the build the cause was found on.
//!
//! ```text
//! deep cause ( http://some.jenkins.com/jobs/build/789 )
//! ```
//!
//! Host lookups (display data per build, root URL, whether the Gerrit
//! trigger integration is enabled) are injected through the traits in
//! [`host`] and the [`CauseMessageConfig`]; message delivery stays with the
//! host.

pub mod builder;
pub mod config;
pub mod error;
pub mod escape;
pub mod extension;
pub mod host;
pub mod model;
pub mod selection;
pub mod url;

pub use builder::CauseMessageBuilder;
pub use config::CauseMessageConfig;
pub use error::{CauseMessageError, Result};
pub use escape::escape_quotes;
pub use extension::GerritMessageProviderExtension;
pub use host::{DisplayDataSource, InMemoryDisplayDataSource, RootUrlProvider, StaticRootUrl};
pub use model::{FailureCause, FailureCauseDisplayData, FoundFailureCause};
pub use selection::{select_cause, DownstreamSearch, SelectedCause};
pub use url::absolute_build_url;
