//! Update service for the fused fetch-edit-commit pass.
//!
//! The whole pass runs in memory against the freshly fetched revision, so
//! the window for a stale commit is a single network round-trip. Nothing is
//! written to the local filesystem.

use anyhow::{Context, Result};
use ferry_core::EditPlan;
use ferry_github::{CommitResult, GitHubApi};

use super::checkout::CheckoutService;

/// What an update pass did.
#[derive(Debug, Clone)]
pub enum UpdateOutcome {
    /// The edits left the content unchanged, so nothing was committed.
    NoChange {
        /// Branch that was inspected.
        branch: String,
    },

    /// Edited content was committed.
    Committed {
        /// The commit created on the remote.
        commit: CommitResult,

        /// Branch the commit landed on.
        branch: String,
    },
}

/// Service for update operations with an injected client.
pub struct UpdateService<'a, H>
where
    H: GitHubApi,
{
    github: &'a H,
}

impl<'a, H> UpdateService<'a, H>
where
    H: GitHubApi,
{
    /// Create a new update service.
    pub const fn new(github: &'a H) -> Self {
        Self { github }
    }

    /// Fetch `path`, apply `plan`, and commit the result when it differs.
    ///
    /// The freshly fetched revision marker conditions the commit, so a
    /// writer landing between the fetch and the commit still surfaces as a
    /// stale-revision error.
    ///
    /// # Errors
    /// Returns error if the fetch or the commit fails.
    pub async fn apply(
        &self,
        path: &str,
        plan: &EditPlan,
        message: &str,
        branch: Option<&str>,
    ) -> Result<UpdateOutcome> {
        let checked = CheckoutService::new(self.github).fetch(path, branch).await?;

        let edited = plan.apply(&checked.file.content);
        if edited == checked.file.content {
            return Ok(UpdateOutcome::NoChange {
                branch: checked.branch,
            });
        }

        let commit = self
            .github
            .put_file(path, &edited, message, &checked.file.sha, &checked.branch)
            .await
            .with_context(|| format!("Failed to check in {path}"))?;

        Ok(UpdateOutcome::Committed {
            commit,
            branch: checked.branch,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_mocks::MockRepoApi;
    use ferry_core::Replacement;

    fn replace_plan(find: &str, with: &str) -> EditPlan {
        EditPlan {
            replace: Some(Replacement {
                find: find.to_string(),
                with: with.to_string(),
            }),
            ..EditPlan::default()
        }
    }

    #[tokio::test]
    async fn test_replacement_is_committed() {
        let github = MockRepoApi::new().with_file("page.html", "cat", "abc123");
        let service = UpdateService::new(&github);

        let outcome = service
            .apply("page.html", &replace_plan("a", "b"), "swap", Some("main"))
            .await
            .unwrap();

        assert!(matches!(outcome, UpdateOutcome::Committed { .. }));
        assert_eq!(github.remote_content("page.html").as_deref(), Some("cbt"));
        assert_eq!(github.put_count(), 1);
    }

    #[tokio::test]
    async fn test_absent_find_target_commits_nothing() {
        let github = MockRepoApi::new().with_file("page.html", "cat", "abc123");
        let service = UpdateService::new(&github);

        let outcome = service
            .apply("page.html", &replace_plan("zebra", "lion"), "swap", Some("main"))
            .await
            .unwrap();

        assert!(matches!(outcome, UpdateOutcome::NoChange { ref branch } if branch == "main"));
        assert_eq!(github.put_count(), 0);
        assert_eq!(github.remote_content("page.html").as_deref(), Some("cat"));
    }

    #[tokio::test]
    async fn test_combined_edits_apply_in_order() {
        let github = MockRepoApi::new().with_file("greeting.txt", "hi", "abc123");
        let service = UpdateService::new(&github);
        let plan = EditPlan {
            replace: Some(Replacement {
                find: "h".to_string(),
                with: "H".to_string(),
            }),
            append: Some("!".to_string()),
            prepend: Some(">> ".to_string()),
        };

        service
            .apply("greeting.txt", &plan, "greet", Some("main"))
            .await
            .unwrap();

        assert_eq!(
            github.remote_content("greeting.txt").as_deref(),
            Some(">> Hi!")
        );
    }

    #[tokio::test]
    async fn test_commit_is_conditioned_on_fetched_marker() {
        let github = MockRepoApi::new().with_file("page.html", "hello", "abc123");
        let service = UpdateService::new(&github);

        service
            .apply("page.html", &replace_plan("hello", "goodbye"), "msg", Some("main"))
            .await
            .unwrap();

        assert_eq!(github.last_put().unwrap().sha, "abc123");
    }

    #[tokio::test]
    async fn test_branch_defaults_to_repository_default() {
        let github = MockRepoApi::new()
            .with_default_branch("trunk")
            .with_file("page.html", "hello", "abc123");
        let service = UpdateService::new(&github);

        let outcome = service
            .apply("page.html", &replace_plan("hello", "hi"), "msg", None)
            .await
            .unwrap();

        assert!(matches!(outcome, UpdateOutcome::Committed { ref branch, .. } if branch == "trunk"));
        assert_eq!(github.last_put().unwrap().branch, "trunk");
        assert_eq!(github.repo_info_calls(), 1);
    }

    #[tokio::test]
    async fn test_missing_file_fails() {
        let github = MockRepoApi::new();
        let service = UpdateService::new(&github);

        let err = service
            .apply("missing.html", &replace_plan("a", "b"), "msg", Some("main"))
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ferry_github::Error>(),
            Some(ferry_github::Error::NotFound(_))
        ));
        assert_eq!(github.put_count(), 0);
    }
}
