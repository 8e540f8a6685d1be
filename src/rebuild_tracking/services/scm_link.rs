/// Builds browser links into source hosting for a commit.
pub struct ScmLinks;

impl ScmLinks {
    const GITHUB_PREFIX: &'static str = "https://github.com";

    /// Link to the source tree of `commit`, under `context_path` when the
    /// build lives in a sub directory.
    ///
    /// GitHub uses `/tree/<commit>`; GitLab style hosts use `/-/tree/<commit>`.
    /// Returns `None` when the repository URL is empty.
    pub fn tree_url(scm_repo: &str, commit: &str, context_path: Option<&str>) -> Option<String> {
        let repo = scm_repo.trim();
        if repo.is_empty() {
            return None;
        }
        let repo = repo.strip_suffix(".git").unwrap_or(repo);
        let separator = if repo.starts_with(Self::GITHUB_PREFIX) {
            "/tree/"
        } else {
            "/-/tree/"
        };
        let context = match context_path.map(str::trim).filter(|p| !p.is_empty()) {
            Some(path) if path.starts_with('/') => path.to_string(),
            Some(path) => format!("/{}", path),
            None => String::new(),
        };
        Some(format!("{}{}{}{}", repo, separator, commit, context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_tree_url_strips_git_suffix() {
        assert_eq!(
            ScmLinks::tree_url("https://github.com/apache/commons-io.git", "abc123", None)
                .as_deref(),
            Some("https://github.com/apache/commons-io/tree/abc123")
        );
    }

    #[test]
    fn test_gitlab_tree_url_with_context_path() {
        assert_eq!(
            ScmLinks::tree_url("https://gitlab.com/acme/lib", "abc123", Some("/core"))
                .as_deref(),
            Some("https://gitlab.com/acme/lib/-/tree/abc123/core")
        );
        assert_eq!(
            ScmLinks::tree_url("https://gitlab.com/acme/lib", "abc123", Some("core"))
                .as_deref(),
            Some("https://gitlab.com/acme/lib/-/tree/abc123/core")
        );
    }

    #[test]
    fn test_empty_repo_has_no_link() {
        assert!(ScmLinks::tree_url("  ", "abc123", None).is_none());
    }
}
