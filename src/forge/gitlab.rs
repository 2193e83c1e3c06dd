//! forge::gitlab
//!
//! GitLab forge adapter using the REST v4 API.
//!
//! # Design
//!
//! Mirrors the GitHub adapter: bound to one repository identity and one base
//! branch, with the injected [`GitLabClient`] session supplying the token.
//! GitLab merge requests are surfaced through the same `PullRequest` types;
//! the `number` field carries the merge request iid.
//!
//! Self-hosted instances need no special casing: the API base is always
//! `https://{domain}/api/v4`, which covers `gitlab.com` and custom domains
//! alike. Nested group paths (e.g. `group/subgroup`) are supported via the
//! URL-encoded project path.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};

use super::client::GitLabClient;
use super::config::{ForgeProvider, RepoIdentity};
use super::traits::{
    CreatePrRequest, Forge, ForgeError, ForkInfo, ParentRepoInfo, PrState, PullRequest,
    RepoDetailedInfo, UpdatePrRequest,
};

/// Title prefix GitLab uses to mark a merge request as draft.
const DRAFT_PREFIX: &str = "Draft: ";

/// GitLab forge adapter.
pub struct GitLabForge {
    /// HTTP client for making requests
    http: Client,
    /// Injected session (token state, reset hooks)
    session: Arc<GitLabClient>,
    /// Repository this instance is bound to
    repo: RepoIdentity,
    /// Base branch for MR operations
    base_branch: String,
    /// API base URL, `https://{domain}/api/v4`
    api_base: String,
}

impl std::fmt::Debug for GitLabForge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitLabForge")
            .field("repo", &self.repo)
            .field("base_branch", &self.base_branch)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl GitLabForge {
    /// Create an instance bound to `repo` and `base_branch`.
    pub fn new(session: Arc<GitLabClient>, repo: RepoIdentity, base_branch: String) -> Self {
        let api_base = format!("https://{}/api/v4", repo.domain);
        Self {
            http: Client::new(),
            session,
            repo,
            base_branch,
            api_base,
        }
    }

    /// Create an instance with an explicit API base URL.
    ///
    /// Used by tests to point the adapter at a local mock server.
    pub fn with_api_base(
        session: Arc<GitLabClient>,
        repo: RepoIdentity,
        base_branch: String,
        api_base: impl Into<String>,
    ) -> Self {
        Self {
            http: Client::new(),
            session,
            repo,
            base_branch,
            api_base: api_base.into(),
        }
    }

    /// Get the API base URL in use.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// URL-encoded project path (`owner%2Fname`, nested groups included).
    fn project_path(&self) -> String {
        format!("{}/{}", self.repo.owner, self.repo.name).replace('/', "%2F")
    }

    /// Build URL for a project endpoint.
    fn project_url(&self, path: &str) -> String {
        if path.is_empty() {
            format!("{}/projects/{}", self.api_base, self.project_path())
        } else {
            format!("{}/projects/{}/{}", self.api_base, self.project_path(), path)
        }
    }

    /// Build common headers for API requests.
    fn headers(&self) -> Result<HeaderMap, ForgeError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = self.session.token() {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| ForgeError::AuthFailed("token contains invalid bytes".into()))?;
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }

    /// Handle API response, mapping errors appropriately.
    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: Response,
    ) -> Result<T, ForgeError> {
        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(|e| ForgeError::ApiError {
                status: status.as_u16(),
                message: format!("Failed to parse response: {}", e),
            })
        } else {
            let message = match response.json::<GitLabErrorResponse>().await {
                Ok(err) => err.message(),
                Err(_) => "Unknown error".to_string(),
            };

            Err(match status {
                StatusCode::UNAUTHORIZED => {
                    ForgeError::AuthFailed("Invalid or expired token".into())
                }
                StatusCode::FORBIDDEN => {
                    ForgeError::AuthFailed(format!("Permission denied: {}", message))
                }
                StatusCode::NOT_FOUND => ForgeError::NotFound(message),
                StatusCode::TOO_MANY_REQUESTS => ForgeError::RateLimited,
                _ if status.is_server_error() => ForgeError::ApiError {
                    status: status.as_u16(),
                    message: format!("GitLab server error: {}", message),
                },
                _ => ForgeError::ApiError {
                    status: status.as_u16(),
                    message,
                },
            })
        }
    }
}

#[async_trait]
impl Forge for GitLabForge {
    fn name(&self) -> &'static str {
        "gitlab"
    }

    fn provider(&self) -> ForgeProvider {
        ForgeProvider::GitLab
    }

    fn repo(&self) -> &RepoIdentity {
        &self.repo
    }

    fn base_branch(&self) -> &str {
        &self.base_branch
    }

    async fn repo_info(&self) -> Result<RepoDetailedInfo, ForgeError> {
        let url = self.project_url("");

        let response = self
            .http
            .get(&url)
            .headers(self.headers()?)
            .send()
            .await
            .map_err(|e| ForgeError::NetworkError(e.to_string()))?;

        let project: GitLabProject = self.handle_response(response).await?;
        Ok(project.into())
    }

    async fn create_pr(&self, request: CreatePrRequest) -> Result<PullRequest, ForgeError> {
        if !self.session.authenticated() {
            return Err(ForgeError::AuthRequired);
        }

        let title = if request.draft {
            format!("{}{}", DRAFT_PREFIX, request.title)
        } else {
            request.title.clone()
        };

        let url = self.project_url("merge_requests");
        let body = CreateMrBody {
            source_branch: &request.head,
            target_branch: &request.base,
            title: &title,
            description: request.body.as_deref(),
        };

        let response = self
            .http
            .post(&url)
            .headers(self.headers()?)
            .json(&body)
            .send()
            .await
            .map_err(|e| ForgeError::NetworkError(e.to_string()))?;

        let mr: GitLabMergeRequest = self.handle_response(response).await?;
        Ok(mr.into())
    }

    async fn update_pr(&self, request: UpdatePrRequest) -> Result<PullRequest, ForgeError> {
        if !self.session.authenticated() {
            return Err(ForgeError::AuthRequired);
        }

        let url = self.project_url(&format!("merge_requests/{}", request.number));
        let body = UpdateMrBody {
            title: request.title.as_deref(),
            description: request.body.as_deref(),
            target_branch: request.base.as_deref(),
        };

        let response = self
            .http
            .put(&url)
            .headers(self.headers()?)
            .json(&body)
            .send()
            .await
            .map_err(|e| ForgeError::NetworkError(e.to_string()))?;

        let mr: GitLabMergeRequest = self.handle_response(response).await?;
        Ok(mr.into())
    }

    async fn get_pr(&self, number: u64) -> Result<PullRequest, ForgeError> {
        let url = self.project_url(&format!("merge_requests/{}", number));

        let response = self
            .http
            .get(&url)
            .headers(self.headers()?)
            .send()
            .await
            .map_err(|e| ForgeError::NetworkError(e.to_string()))?;

        let mr: GitLabMergeRequest = self.handle_response(response).await?;
        Ok(mr.into())
    }

    async fn find_pr_by_head(&self, head: &str) -> Result<Option<PullRequest>, ForgeError> {
        let url = self.project_url("merge_requests");

        let response = self
            .http
            .get(&url)
            .headers(self.headers()?)
            .query(&[("source_branch", head), ("state", "opened")])
            .send()
            .await
            .map_err(|e| ForgeError::NetworkError(e.to_string()))?;

        let mrs: Vec<GitLabMergeRequest> = self.handle_response(response).await?;
        Ok(mrs.into_iter().next().map(Into::into))
    }
}

// --------------------------------------------------------------------------
// API payload types
// --------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct CreateMrBody<'a> {
    source_branch: &'a str,
    target_branch: &'a str,
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct UpdateMrBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_branch: Option<&'a str>,
}

/// GitLab error payloads use either `message` or `error`, and `message` may
/// be a string or a structured object.
#[derive(Debug, Deserialize)]
struct GitLabErrorResponse {
    message: Option<serde_json::Value>,
    error: Option<String>,
}

impl GitLabErrorResponse {
    fn message(self) -> String {
        if let Some(message) = self.message {
            match message {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            }
        } else {
            self.error.unwrap_or_else(|| "Unknown error".to_string())
        }
    }
}

#[derive(Debug, Deserialize)]
struct GitLabMergeRequest {
    iid: u64,
    web_url: String,
    state: String,
    #[serde(default)]
    draft: bool,
    title: String,
    description: Option<String>,
    source_branch: String,
    target_branch: String,
}

impl From<GitLabMergeRequest> for PullRequest {
    fn from(mr: GitLabMergeRequest) -> Self {
        let state = match mr.state.as_str() {
            "merged" => PrState::Merged,
            "closed" => PrState::Closed,
            _ => PrState::Open,
        };

        PullRequest {
            number: mr.iid,
            url: mr.web_url,
            state,
            is_draft: mr.draft,
            head: mr.source_branch,
            base: mr.target_branch,
            title: mr.title,
            body: mr.description,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GitLabProject {
    remove_source_branch_after_merge: Option<bool>,
    forked_from_project: Option<GitLabForkParent>,
}

#[derive(Debug, Deserialize)]
struct GitLabForkParent {
    name: String,
    path: String,
    path_with_namespace: String,
    http_url_to_repo: String,
    default_branch: Option<String>,
}

impl From<GitLabProject> for RepoDetailedInfo {
    fn from(project: GitLabProject) -> Self {
        let parent = project.forked_from_project.map(|parent| {
            // Namespace path is everything before the final segment.
            let owner = parent
                .path_with_namespace
                .rsplit_once('/')
                .map(|(namespace, _)| namespace.to_string())
                .unwrap_or_default();
            ParentRepoInfo {
                owner,
                name: parent.path.clone(),
                full_name: parent.path_with_namespace,
                clone_url: parent.http_url_to_repo,
                default_branch: parent.default_branch.unwrap_or_else(|| "main".to_string()),
            }
        });

        RepoDetailedInfo {
            delete_branch_after_merge: project.remove_source_branch_after_merge,
            fork_info: ForkInfo {
                is_fork: parent.is_some(),
                parent,
            },
        }
    }
}
