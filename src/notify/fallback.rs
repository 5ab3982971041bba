//! Deterministic message built from commit data alone.

use crate::github::{Commit, Repository};

/// Build a message without any network access.
///
/// One commit yields its title; several yield the first title followed by
/// `(+N more)`. Never returns an empty string.
pub fn fallback_message(commits: &[Commit], repository: &Repository) -> String {
    let title = commits.first().map(Commit::title).unwrap_or("");

    if title.is_empty() {
        return format!("New changes pushed to {}", repository.name);
    }

    match commits.len() {
        1 => title.to_string(),
        n => format!("{} (+{} more)", title, n - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> Repository {
        Repository {
            name: "app".to_string(),
            full_name: "acme/app".to_string(),
            html_url: "https://github.com/acme/app".to_string(),
        }
    }

    #[test]
    fn test_single_commit_uses_title() {
        let commits = vec![Commit::new("Fix login bug\n\ndetails")];
        assert_eq!(fallback_message(&commits, &repo()), "Fix login bug");
    }

    #[test]
    fn test_multiple_commits_counts_the_rest() {
        let commits = vec![
            Commit::new("Add dark mode"),
            Commit::new("Tweak colors"),
            Commit::new("Fix contrast"),
        ];
        assert_eq!(fallback_message(&commits, &repo()), "Add dark mode (+2 more)");
    }

    #[test]
    fn test_two_commits() {
        let commits = vec![Commit::new("First\nbody"), Commit::new("Second")];
        assert_eq!(fallback_message(&commits, &repo()), "First (+1 more)");
    }

    #[test]
    fn test_no_commits_is_never_empty() {
        assert_eq!(fallback_message(&[], &repo()), "New changes pushed to app");
    }

    #[test]
    fn test_blank_title_is_never_empty() {
        let commits = vec![Commit::new("\n\nbody only")];
        assert_eq!(fallback_message(&commits, &repo()), "New changes pushed to app");
    }
}
