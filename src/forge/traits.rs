//! forge::traits
//!
//! The `Forge` trait and its request/response types.
//!
//! # Design
//!
//! A forge instance is bound to one provider and one repository identity and
//! exposes a uniform capability surface: repository info (including fork
//! lineage) and pull request operations. Instances are cheap to construct;
//! the factory rebuilds one on every reconfiguration and the previous
//! instance simply drops.
//!
//! The trait is async because its operations involve network I/O inside the
//! adapters. Selection itself never performs I/O.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config::{ForgeProvider, RepoIdentity};

/// Errors from forge operations.
///
/// These map the common failure modes of the hosted APIs. The selection
/// layer cannot fail; these errors surface only from adapter operations.
#[derive(Debug, Clone, Error)]
pub enum ForgeError {
    /// Authentication is required but not available.
    #[error("authentication required")]
    AuthRequired,

    /// Authentication failed (invalid token, expired, insufficient permissions).
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// The requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded.
    #[error("rate limited")]
    RateLimited,

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Network or connection error.
    #[error("network error: {0}")]
    NetworkError(String),
}

/// Request to create a pull (or merge) request.
#[derive(Debug, Clone)]
pub struct CreatePrRequest {
    /// Head branch name (the branch with changes)
    pub head: String,
    /// Base branch name (the branch to merge into)
    pub base: String,
    /// PR title
    pub title: String,
    /// PR body/description
    pub body: Option<String>,
    /// Create as draft
    pub draft: bool,
}

/// Request to update a pull request.
#[derive(Debug, Clone, Default)]
pub struct UpdatePrRequest {
    /// PR number (merge request iid on GitLab)
    pub number: u64,
    /// New title (if changing)
    pub title: Option<String>,
    /// New body (if changing)
    pub body: Option<String>,
    /// New base branch (if changing)
    pub base: Option<String>,
}

/// Pull request information returned from the forge.
#[derive(Debug, Clone)]
pub struct PullRequest {
    /// PR number (merge request iid on GitLab)
    pub number: u64,
    /// Web URL for viewing
    pub url: String,
    /// PR state
    pub state: PrState,
    /// Whether the PR is a draft
    pub is_draft: bool,
    /// Head branch name
    pub head: String,
    /// Base branch name
    pub base: String,
    /// PR title
    pub title: String,
    /// PR body/description
    pub body: Option<String>,
}

/// PR state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrState {
    /// Open and awaiting review/merge
    Open,
    /// Closed without being merged
    Closed,
    /// Merged
    Merged,
}

impl std::fmt::Display for PrState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrState::Open => write!(f, "open"),
            PrState::Closed => write!(f, "closed"),
            PrState::Merged => write!(f, "merged"),
        }
    }
}

/// The immediate upstream of a fork, as reported by the forge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentRepoInfo {
    /// Parent owner login (or group path)
    pub owner: String,
    /// Parent repository name
    pub name: String,
    /// Full `owner/name` path
    pub full_name: String,
    /// HTTPS clone URL
    pub clone_url: String,
    /// Default branch of the parent
    pub default_branch: String,
}

/// A repository's fork relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForkInfo {
    /// Whether this repository is a fork of another repository
    pub is_fork: bool,
    /// The parent repository this was forked from (immediate upstream);
    /// present only when `is_fork` is true
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ParentRepoInfo>,
}

/// Detailed repository info, normalized across providers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoDetailedInfo {
    /// Whether the forge deletes the branch after merging a PR;
    /// `None` if unknown
    pub delete_branch_after_merge: Option<bool>,
    /// Fork information for this repository
    pub fork_info: ForkInfo,
}

/// The Forge trait: uniform capability surface over hosted Git platforms.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; instances are shared with UI
/// observers through `Arc<dyn Forge>`.
#[async_trait]
pub trait Forge: Send + Sync {
    /// Get the forge name (`"github"` or `"gitlab"`).
    fn name(&self) -> &'static str;

    /// Get the provider variant this instance is bound to.
    fn provider(&self) -> ForgeProvider;

    /// Get the repository identity this instance is bound to.
    fn repo(&self) -> &RepoIdentity;

    /// Get the base branch this instance targets.
    fn base_branch(&self) -> &str;

    /// Fetch detailed repository info, including fork lineage.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the repository doesn't exist or is not visible
    /// - `AuthFailed` if the session token is invalid
    async fn repo_info(&self) -> Result<RepoDetailedInfo, ForgeError>;

    /// Create a new pull request.
    ///
    /// # Errors
    ///
    /// - `AuthRequired` if no authentication is configured
    /// - `ApiError` with status 422 if validation fails (e.g. head missing)
    async fn create_pr(&self, request: CreatePrRequest) -> Result<PullRequest, ForgeError>;

    /// Update an existing pull request.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the PR doesn't exist
    async fn update_pr(&self, request: UpdatePrRequest) -> Result<PullRequest, ForgeError>;

    /// Get a pull request by number.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the PR doesn't exist
    async fn get_pr(&self, number: u64) -> Result<PullRequest, ForgeError>;

    /// Find an open pull request by head branch.
    ///
    /// Returns `None` when no matching PR exists; used to link an existing
    /// PR instead of creating a duplicate.
    async fn find_pr_by_head(&self, head: &str) -> Result<Option<PullRequest>, ForgeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pr_state_display() {
        assert_eq!(format!("{}", PrState::Open), "open");
        assert_eq!(format!("{}", PrState::Closed), "closed");
        assert_eq!(format!("{}", PrState::Merged), "merged");
    }

    #[test]
    fn update_pr_request_default() {
        let req = UpdatePrRequest::default();
        assert_eq!(req.number, 0);
        assert!(req.title.is_none());
        assert!(req.body.is_none());
        assert!(req.base.is_none());
    }

    #[test]
    fn forge_error_display() {
        assert_eq!(
            format!("{}", ForgeError::AuthRequired),
            "authentication required"
        );
        assert_eq!(
            format!("{}", ForgeError::NotFound("repo octo/hello".into())),
            "not found: repo octo/hello"
        );
        assert_eq!(format!("{}", ForgeError::RateLimited), "rate limited");
        assert_eq!(
            format!(
                "{}",
                ForgeError::ApiError {
                    status: 422,
                    message: "Validation failed".into()
                }
            ),
            "API error: 422 - Validation failed"
        );
    }

    #[test]
    fn fork_info_serializes_without_absent_parent() {
        let info = ForkInfo {
            is_fork: false,
            parent: None,
        };
        assert_eq!(
            serde_json::to_string(&info).unwrap(),
            "{\"is_fork\":false}"
        );
    }
}
