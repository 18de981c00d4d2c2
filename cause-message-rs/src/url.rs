//! Joining the host root URL with a build's relative path.

/// Absolute link to a build.
///
/// A missing or blank root degrades to the relative path so a message can
/// still be produced. Exactly one `/` is kept at the boundary.
pub fn absolute_build_url(root_url: Option<&str>, build_url: &str) -> String {
    let root = match root_url.map(str::trim) {
        Some(root) if !root.is_empty() => root,
        _ => return build_url.to_string(),
    };

    match (root.ends_with('/'), build_url.starts_with('/')) {
        (true, true) => format!("{}{}", root, &build_url[1..]),
        (false, false) if !build_url.is_empty() => format!("{root}/{build_url}"),
        _ => format!("{root}{build_url}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_and_leading_slash_path_concatenate() {
        assert_eq!(
            absolute_build_url(Some("http://some.jenkins.com"), "/jobs/build/123"),
            "http://some.jenkins.com/jobs/build/123"
        );
    }

    #[test]
    fn boundary_slashes_are_normalized() {
        assert_eq!(
            absolute_build_url(Some("http://some.jenkins.com/"), "/jobs/build/123"),
            "http://some.jenkins.com/jobs/build/123"
        );
        assert_eq!(
            absolute_build_url(Some("http://some.jenkins.com/"), "jobs/build/123"),
            "http://some.jenkins.com/jobs/build/123"
        );
        assert_eq!(
            absolute_build_url(Some("http://some.jenkins.com"), "jobs/build/123"),
            "http://some.jenkins.com/jobs/build/123"
        );
    }

    #[test]
    fn missing_root_falls_back_to_relative_path() {
        assert_eq!(absolute_build_url(None, "/jobs/build/123"), "/jobs/build/123");
        assert_eq!(absolute_build_url(Some("  "), "/jobs/build/123"), "/jobs/build/123");
    }

    #[test]
    fn empty_path_yields_root() {
        assert_eq!(
            absolute_build_url(Some("http://some.jenkins.com"), ""),
            "http://some.jenkins.com"
        );
    }
}
