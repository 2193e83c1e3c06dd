//! forge::mock
//!
//! Mock forge implementation for deterministic testing.
//!
//! # Design
//!
//! The mock stores PRs in memory, reports a configurable repo info payload,
//! and records every operation so tests can verify how consumers drive the
//! `Forge` surface without any network.
//!
//! # Example
//!
//! ```
//! use gitdesk_forge::forge::mock::MockForge;
//! use gitdesk_forge::forge::{CreatePrRequest, Forge, PrState};
//!
//! # tokio_test::block_on(async {
//! let forge = MockForge::github("test-owner", "test-repo");
//!
//! let pr = forge.create_pr(CreatePrRequest {
//!     head: "feature".to_string(),
//!     base: "main".to_string(),
//!     title: "Add feature".to_string(),
//!     body: None,
//!     draft: false,
//! }).await.unwrap();
//!
//! assert_eq!(pr.number, 1);
//! assert_eq!(pr.state, PrState::Open);
//! # });
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::config::{ForgeProvider, RepoIdentity};
use super::traits::{
    CreatePrRequest, Forge, ForgeError, ForkInfo, PrState, PullRequest, RepoDetailedInfo,
    UpdatePrRequest,
};

/// Mock forge for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone)]
pub struct MockForge {
    provider: ForgeProvider,
    repo: RepoIdentity,
    base_branch: String,
    inner: Arc<Mutex<MockForgeInner>>,
}

#[derive(Debug)]
struct MockForgeInner {
    prs: HashMap<u64, PullRequest>,
    next_pr_number: u64,
    repo_info: RepoDetailedInfo,
    fail_on: Option<FailOn>,
    operations: Vec<MockOperation>,
}

/// Configuration for which operation should fail.
#[derive(Debug, Clone)]
pub enum FailOn {
    /// Fail repo_info with the given error.
    RepoInfo(ForgeError),
    /// Fail create_pr with the given error.
    CreatePr(ForgeError),
    /// Fail update_pr with the given error.
    UpdatePr(ForgeError),
    /// Fail get_pr with the given error.
    GetPr(ForgeError),
    /// Fail find_pr_by_head with the given error.
    FindPrByHead(ForgeError),
}

/// Recorded operation for test verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOperation {
    RepoInfo,
    CreatePr { head: String, base: String },
    UpdatePr { number: u64 },
    GetPr { number: u64 },
    FindPrByHead { head: String },
}

impl MockForge {
    /// Create a mock bound to a GitHub identity.
    pub fn github(owner: &str, name: &str) -> Self {
        Self::new(
            ForgeProvider::GitHub,
            RepoIdentity::new("github.com", owner, name),
        )
    }

    /// Create a mock bound to a GitLab identity.
    pub fn gitlab(owner: &str, name: &str) -> Self {
        Self::new(
            ForgeProvider::GitLab,
            RepoIdentity::new("gitlab.com", owner, name),
        )
    }

    /// Create a mock for an arbitrary provider and identity.
    pub fn new(provider: ForgeProvider, repo: RepoIdentity) -> Self {
        Self {
            provider,
            repo,
            base_branch: "main".to_string(),
            inner: Arc::new(Mutex::new(MockForgeInner {
                prs: HashMap::new(),
                next_pr_number: 1,
                repo_info: RepoDetailedInfo {
                    delete_branch_after_merge: None,
                    fork_info: ForkInfo {
                        is_fork: false,
                        parent: None,
                    },
                },
                fail_on: None,
                operations: Vec::new(),
            })),
        }
    }

    /// Configure the repo info returned by `repo_info`.
    pub fn with_repo_info(self, info: RepoDetailedInfo) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.repo_info = info;
        }
        self
    }

    /// Configure the mock to fail on a specific operation.
    pub fn fail_on(self, fail_on: FailOn) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.fail_on = Some(fail_on);
        }
        self
    }

    /// Get all recorded operations.
    pub fn operations(&self) -> Vec<MockOperation> {
        self.inner.lock().unwrap().operations.clone()
    }
}

#[async_trait]
impl Forge for MockForge {
    fn name(&self) -> &'static str {
        self.provider.name()
    }

    fn provider(&self) -> ForgeProvider {
        self.provider
    }

    fn repo(&self) -> &RepoIdentity {
        &self.repo
    }

    fn base_branch(&self) -> &str {
        &self.base_branch
    }

    async fn repo_info(&self) -> Result<RepoDetailedInfo, ForgeError> {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(MockOperation::RepoInfo);
        if let Some(FailOn::RepoInfo(err)) = &inner.fail_on {
            return Err(err.clone());
        }
        Ok(inner.repo_info.clone())
    }

    async fn create_pr(&self, request: CreatePrRequest) -> Result<PullRequest, ForgeError> {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(MockOperation::CreatePr {
            head: request.head.clone(),
            base: request.base.clone(),
        });
        if let Some(FailOn::CreatePr(err)) = &inner.fail_on {
            return Err(err.clone());
        }

        let number = inner.next_pr_number;
        inner.next_pr_number += 1;

        let pr = PullRequest {
            number,
            url: format!("https://{}/{}/pull/{}", self.repo.domain, self.repo.full_path(), number),
            state: PrState::Open,
            is_draft: request.draft,
            head: request.head,
            base: request.base,
            title: request.title,
            body: request.body,
        };
        inner.prs.insert(number, pr.clone());
        Ok(pr)
    }

    async fn update_pr(&self, request: UpdatePrRequest) -> Result<PullRequest, ForgeError> {
        let mut inner = self.inner.lock().unwrap();
        inner
            .operations
            .push(MockOperation::UpdatePr { number: request.number });
        if let Some(FailOn::UpdatePr(err)) = &inner.fail_on {
            return Err(err.clone());
        }

        let pr = inner
            .prs
            .get_mut(&request.number)
            .ok_or_else(|| ForgeError::NotFound(format!("PR #{}", request.number)))?;

        if let Some(title) = request.title {
            pr.title = title;
        }
        if let Some(body) = request.body {
            pr.body = Some(body);
        }
        if let Some(base) = request.base {
            pr.base = base;
        }
        Ok(pr.clone())
    }

    async fn get_pr(&self, number: u64) -> Result<PullRequest, ForgeError> {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(MockOperation::GetPr { number });
        if let Some(FailOn::GetPr(err)) = &inner.fail_on {
            return Err(err.clone());
        }

        inner
            .prs
            .get(&number)
            .cloned()
            .ok_or_else(|| ForgeError::NotFound(format!("PR #{}", number)))
    }

    async fn find_pr_by_head(&self, head: &str) -> Result<Option<PullRequest>, ForgeError> {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(MockOperation::FindPrByHead {
            head: head.to_string(),
        });
        if let Some(FailOn::FindPrByHead(err)) = &inner.fail_on {
            return Err(err.clone());
        }

        Ok(inner
            .prs
            .values()
            .find(|pr| pr.head == head && pr.state == PrState::Open)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forge::traits::ParentRepoInfo;

    #[tokio::test]
    async fn create_then_get_roundtrip() {
        let forge = MockForge::github("test-owner", "test-repo");

        let created = forge
            .create_pr(CreatePrRequest {
                head: "feature".into(),
                base: "main".into(),
                title: "Add feature".into(),
                body: None,
                draft: true,
            })
            .await
            .unwrap();
        assert_eq!(created.number, 1);
        assert!(created.is_draft);

        let fetched = forge.get_pr(1).await.unwrap();
        assert_eq!(fetched.title, "Add feature");
    }

    #[tokio::test]
    async fn update_pr_applies_title_body_and_base() {
        let forge = MockForge::github("test-owner", "test-repo");
        forge
            .create_pr(CreatePrRequest {
                head: "feature".into(),
                base: "main".into(),
                title: "Add feature".into(),
                body: Some("First draft".into()),
                draft: false,
            })
            .await
            .unwrap();

        let updated = forge
            .update_pr(UpdatePrRequest {
                number: 1,
                title: Some("Add feature, round two".into()),
                body: Some("Reworked".into()),
                base: Some("develop".into()),
            })
            .await
            .unwrap();

        assert_eq!(updated.title, "Add feature, round two");
        assert_eq!(updated.body.as_deref(), Some("Reworked"));
        assert_eq!(updated.base, "develop");

        let fetched = forge.get_pr(1).await.unwrap();
        assert_eq!(fetched.body.as_deref(), Some("Reworked"));
    }

    #[tokio::test]
    async fn find_pr_by_head_matches_open_prs_only() {
        let forge = MockForge::gitlab("group", "project");
        forge
            .create_pr(CreatePrRequest {
                head: "feature".into(),
                base: "main".into(),
                title: "Change".into(),
                body: None,
                draft: false,
            })
            .await
            .unwrap();

        assert!(forge.find_pr_by_head("feature").await.unwrap().is_some());
        assert!(forge.find_pr_by_head("other").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn configured_repo_info_is_returned() {
        let forge = MockForge::github("fork-owner", "forked-repo").with_repo_info(RepoDetailedInfo {
            delete_branch_after_merge: Some(true),
            fork_info: ForkInfo {
                is_fork: true,
                parent: Some(ParentRepoInfo {
                    owner: "upstream-owner".into(),
                    name: "original-repo".into(),
                    full_name: "upstream-owner/original-repo".into(),
                    clone_url: "https://github.com/upstream-owner/original-repo.git".into(),
                    default_branch: "main".into(),
                }),
            },
        });

        let info = forge.repo_info().await.unwrap();
        assert!(info.fork_info.is_fork);
        assert_eq!(info.fork_info.parent.unwrap().owner, "upstream-owner");
    }

    #[tokio::test]
    async fn fail_on_create_pr() {
        let forge =
            MockForge::github("o", "r").fail_on(FailOn::CreatePr(ForgeError::RateLimited));
        let result = forge
            .create_pr(CreatePrRequest {
                head: "feature".into(),
                base: "main".into(),
                title: "T".into(),
                body: None,
                draft: false,
            })
            .await;
        assert!(matches!(result, Err(ForgeError::RateLimited)));
    }

    #[tokio::test]
    async fn records_operations() {
        let forge = MockForge::github("o", "r");
        let _ = forge.repo_info().await;
        let _ = forge.find_pr_by_head("feature").await;

        assert_eq!(
            forge.operations(),
            vec![
                MockOperation::RepoInfo,
                MockOperation::FindPrByHead {
                    head: "feature".into()
                }
            ]
        );
    }
}
