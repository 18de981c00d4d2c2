// cause-message-rs/src/selection.rs
// Picks the failure cause a build notification should report.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::FailureCauseDisplayData;

/// How downstream builds are searched when a node has no causes of its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DownstreamSearch {
    /// Follow only the first downstream build at each level.
    #[default]
    FirstChild,
    /// Visit every downstream build in trigger order, depth first.
    AllChildren,
}

impl FromStr for DownstreamSearch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first-child" | "first_child" | "first" => Ok(Self::FirstChild),
            "all-children" | "all_children" | "all" => Ok(Self::AllChildren),
            other => Err(format!("unknown downstream search mode: {other}")),
        }
    }
}

impl fmt::Display for DownstreamSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstChild => f.write_str("first-child"),
            Self::AllChildren => f.write_str("all-children"),
        }
    }
}

/// The cause chosen for a notification, borrowed from the display data tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedCause<'a> {
    /// Raw, unescaped cause description.
    pub text: &'a str,
    /// Relative URL of the build the cause was found on.
    pub build_url: &'a str,
    /// Number of downstream hops from the root (the root itself is 0).
    pub depth: usize,
}

/// Finds the first cause on the nearest node that has any.
///
/// A node's own causes always win over its downstream builds; only the first
/// cause of that node is used. Returns `None` when no reachable node carries
/// a cause.
pub fn select_cause(
    root: &FailureCauseDisplayData,
    search: DownstreamSearch,
) -> Option<SelectedCause<'_>> {
    // Explicit stack, children pushed in reverse so trigger order is kept.
    let mut pending: Vec<(&FailureCauseDisplayData, usize)> = vec![(root, 0)];

    while let Some((node, depth)) = pending.pop() {
        if let Some(found) = node.found_failure_causes.first() {
            return Some(SelectedCause {
                text: found.description(),
                build_url: &node.build_url,
                depth,
            });
        }

        match search {
            DownstreamSearch::FirstChild => {
                if let Some(child) = node.downstream_failure_causes.first() {
                    pending.push((child, depth + 1));
                }
            }
            DownstreamSearch::AllChildren => {
                pending.extend(
                    node.downstream_failure_causes
                        .iter()
                        .rev()
                        .map(|child| (child, depth + 1)),
                );
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FailureCause;

    fn node(build_url: &str) -> FailureCauseDisplayData {
        FailureCauseDisplayData::new("parentURL", "parentName", build_url, "buildName")
    }

    fn with_cause(build_url: &str, description: &str) -> FailureCauseDisplayData {
        node(build_url).with_found_failure_cause(FailureCause::new("testName", description).into())
    }

    #[test]
    fn root_cause_wins_over_downstream() {
        let root = with_cause("/jobs/build/123", "top")
            .with_downstream(with_cause("/jobs/build/456", "below"));

        let selected = select_cause(&root, DownstreamSearch::FirstChild).expect("cause");

        assert_eq!(selected.text, "top");
        assert_eq!(selected.build_url, "/jobs/build/123");
        assert_eq!(selected.depth, 0);
    }

    #[test]
    fn only_first_cause_of_a_node_is_used() {
        let root = with_cause("/jobs/build/123", "first")
            .with_found_failure_cause(FailureCause::new("other", "second").into());

        let selected = select_cause(&root, DownstreamSearch::FirstChild).expect("cause");

        assert_eq!(selected.text, "first");
    }

    #[test]
    fn deep_cause_reports_the_node_it_was_found_on() {
        let root = node("/jobs/build/123").with_downstream(
            node("/jobs/build/456").with_downstream(with_cause("/jobs/build/789", "deep cause")),
        );

        let selected = select_cause(&root, DownstreamSearch::FirstChild).expect("cause");

        assert_eq!(selected.text, "deep cause");
        assert_eq!(selected.build_url, "/jobs/build/789");
        assert_eq!(selected.depth, 2);
    }

    #[test]
    fn empty_tree_has_no_cause() {
        assert!(select_cause(&node("/jobs/build/123"), DownstreamSearch::FirstChild).is_none());
        assert!(select_cause(&node("/jobs/build/123"), DownstreamSearch::AllChildren).is_none());
    }

    #[test]
    fn first_child_search_ignores_later_siblings() {
        let root = node("/jobs/build/1")
            .with_downstream(node("/jobs/build/2"))
            .with_downstream(with_cause("/jobs/build/3", "sibling cause"));

        assert!(select_cause(&root, DownstreamSearch::FirstChild).is_none());
    }

    #[test]
    fn all_children_search_visits_siblings_in_trigger_order() {
        let root = node("/jobs/build/1")
            .with_downstream(
                node("/jobs/build/2").with_downstream(with_cause("/jobs/build/4", "nested")),
            )
            .with_downstream(with_cause("/jobs/build/3", "sibling"));

        let selected = select_cause(&root, DownstreamSearch::AllChildren).expect("cause");

        assert_eq!(selected.text, "nested");
        assert_eq!(selected.build_url, "/jobs/build/4");
    }

    #[test]
    fn long_chains_do_not_recurse() {
        let mut tail = with_cause("/jobs/build/bottom", "bottom");
        for i in 0..10_000 {
            tail = node(&format!("/jobs/build/{i}")).with_downstream(tail);
        }

        let selected = select_cause(&tail, DownstreamSearch::FirstChild).expect("cause");

        assert_eq!(selected.depth, 10_000);
        assert_eq!(selected.build_url, "/jobs/build/bottom");
        // Drop the chain iteratively so the test itself does not overflow.
        let mut next = Some(tail);
        while let Some(mut current) = next {
            next = current.downstream_failure_causes.pop();
        }
    }

    #[test]
    fn downstream_search_parses_config_values() {
        assert_eq!(
            "first-child".parse::<DownstreamSearch>(),
            Ok(DownstreamSearch::FirstChild)
        );
        assert_eq!(
            " ALL-CHILDREN ".parse::<DownstreamSearch>(),
            Ok(DownstreamSearch::AllChildren)
        );
        assert!("sideways".parse::<DownstreamSearch>().is_err());
        assert_eq!(DownstreamSearch::AllChildren.to_string(), "all-children");
    }
}
