//! forge::github
//!
//! GitHub forge adapter using the REST v3 API.
//!
//! # Design
//!
//! An instance is bound to one repository identity and one base branch; the
//! factory rebuilds it on every reconfiguration. The injected
//! [`GitHubClient`] session supplies the bearer token, so a token change
//! takes effect on the next request without rebuilding the instance.
//!
//! Requests to `github.com` go to `https://api.github.com`; any other
//! domain is treated as GitHub Enterprise and addressed as
//! `https://{domain}/api/v3`.
//!
//! # Rate Limiting
//!
//! GitHub has rate limits. This adapter returns `ForgeError::RateLimited`
//! when limits are hit; backoff and retry are the caller's responsibility.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};

use super::client::GitHubClient;
use super::config::{ForgeProvider, RepoIdentity};
use super::traits::{
    CreatePrRequest, Forge, ForgeError, ForkInfo, ParentRepoInfo, PrState, PullRequest,
    RepoDetailedInfo, UpdatePrRequest,
};

/// Public GitHub API base URL.
const DEFAULT_API_BASE: &str = "https://api.github.com";

/// User-Agent header value for API requests.
const USER_AGENT_VALUE: &str = "gitdesk";

/// GitHub forge adapter.
pub struct GitHubForge {
    /// HTTP client for making requests
    http: Client,
    /// Injected session (token state, reset hooks)
    session: Arc<GitHubClient>,
    /// Repository this instance is bound to
    repo: RepoIdentity,
    /// Base branch for PR operations
    base_branch: String,
    /// API base URL (derived from the domain; GHE uses `/api/v3`)
    api_base: String,
}

impl std::fmt::Debug for GitHubForge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubForge")
            .field("repo", &self.repo)
            .field("base_branch", &self.base_branch)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl GitHubForge {
    /// Create an instance bound to `repo` and `base_branch`.
    ///
    /// The API base is derived from the repository domain.
    pub fn new(session: Arc<GitHubClient>, repo: RepoIdentity, base_branch: String) -> Self {
        let api_base = if repo.domain.eq_ignore_ascii_case("github.com") {
            DEFAULT_API_BASE.to_string()
        } else {
            format!("https://{}/api/v3", repo.domain)
        };
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
        session: Arc<GitHubClient>,
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

    /// Build common headers for API requests.
    ///
    /// Anonymous requests are allowed (public repo metadata works without a
    /// token); the Authorization header is added only when the session has
    /// one.
    fn headers(&self) -> Result<HeaderMap, ForgeError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = self.session.token() {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| ForgeError::AuthFailed("token contains invalid bytes".into()))?;
            headers.insert(AUTHORIZATION, value);
        }
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );
        Ok(headers)
    }

    /// Build URL for a repository endpoint.
    fn repo_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/{}",
            self.api_base, self.repo.owner, self.repo.name, path
        )
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
            Self::handle_error_response(response, status).await
        }
    }

    /// Handle an error response from the API.
    async fn handle_error_response<T>(
        response: Response,
        status: StatusCode,
    ) -> Result<T, ForgeError> {
        let message = match response.json::<GitHubErrorResponse>().await {
            Ok(err) => err.message,
            Err(_) => "Unknown error".to_string(),
        };

        Err(match status {
            StatusCode::UNAUTHORIZED => ForgeError::AuthFailed("Invalid or expired token".into()),
            StatusCode::FORBIDDEN => ForgeError::AuthFailed(format!("Permission denied: {}", message)),
            StatusCode::NOT_FOUND => ForgeError::NotFound(message),
            StatusCode::TOO_MANY_REQUESTS => ForgeError::RateLimited,
            _ if status.is_server_error() => ForgeError::ApiError {
                status: status.as_u16(),
                message: format!("GitHub server error: {}", message),
            },
            _ => ForgeError::ApiError {
                status: status.as_u16(),
                message,
            },
        })
    }
}

#[async_trait]
impl Forge for GitHubForge {
    fn name(&self) -> &'static str {
        "github"
    }

    fn provider(&self) -> ForgeProvider {
        ForgeProvider::GitHub
    }

    fn repo(&self) -> &RepoIdentity {
        &self.repo
    }

    fn base_branch(&self) -> &str {
        &self.base_branch
    }

    async fn repo_info(&self) -> Result<RepoDetailedInfo, ForgeError> {
        let url = format!(
            "{}/repos/{}/{}",
            self.api_base, self.repo.owner, self.repo.name
        );

        let response = self
            .http
            .get(&url)
            .headers(self.headers()?)
            .send()
            .await
            .map_err(|e| ForgeError::NetworkError(e.to_string()))?;

        let repo: GitHubRepo = self.handle_response(response).await?;
        Ok(repo.into())
    }

    async fn create_pr(&self, request: CreatePrRequest) -> Result<PullRequest, ForgeError> {
        if !self.session.authenticated() {
            return Err(ForgeError::AuthRequired);
        }

        let url = self.repo_url("pulls");
        let body = CreatePrBody {
            head: &request.head,
            base: &request.base,
            title: &request.title,
            body: request.body.as_deref(),
            draft: request.draft,
        };

        let response = self
            .http
            .post(&url)
            .headers(self.headers()?)
            .json(&body)
            .send()
            .await
            .map_err(|e| ForgeError::NetworkError(e.to_string()))?;

        let pr: GitHubPullRequest = self.handle_response(response).await?;
        Ok(pr.into())
    }

    async fn update_pr(&self, request: UpdatePrRequest) -> Result<PullRequest, ForgeError> {
        if !self.session.authenticated() {
            return Err(ForgeError::AuthRequired);
        }

        let url = self.repo_url(&format!("pulls/{}", request.number));
        let body = UpdatePrBody {
            title: request.title.as_deref(),
            body: request.body.as_deref(),
            base: request.base.as_deref(),
        };

        let response = self
            .http
            .patch(&url)
            .headers(self.headers()?)
            .json(&body)
            .send()
            .await
            .map_err(|e| ForgeError::NetworkError(e.to_string()))?;

        let pr: GitHubPullRequest = self.handle_response(response).await?;
        Ok(pr.into())
    }

    async fn get_pr(&self, number: u64) -> Result<PullRequest, ForgeError> {
        let url = self.repo_url(&format!("pulls/{}", number));

        let response = self
            .http
            .get(&url)
            .headers(self.headers()?)
            .send()
            .await
            .map_err(|e| ForgeError::NetworkError(e.to_string()))?;

        let pr: GitHubPullRequest = self.handle_response(response).await?;
        Ok(pr.into())
    }

    async fn find_pr_by_head(&self, head: &str) -> Result<Option<PullRequest>, ForgeError> {
        let url = self.repo_url("pulls");

        let response = self
            .http
            .get(&url)
            .headers(self.headers()?)
            .query(&[
                ("head", format!("{}:{}", self.repo.owner, head)),
                ("state", "open".to_string()),
            ])
            .send()
            .await
            .map_err(|e| ForgeError::NetworkError(e.to_string()))?;

        let prs: Vec<GitHubPullRequest> = self.handle_response(response).await?;
        Ok(prs.into_iter().next().map(Into::into))
    }
}

// --------------------------------------------------------------------------
// API payload types
// --------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct CreatePrBody<'a> {
    head: &'a str,
    base: &'a str,
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<&'a str>,
    draft: bool,
}

#[derive(Debug, Serialize)]
struct UpdatePrBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    base: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct GitHubErrorResponse {
    message: String,
}

#[derive(Debug, Deserialize)]
struct GitHubPullRequest {
    number: u64,
    html_url: String,
    state: String,
    #[serde(default)]
    draft: bool,
    title: String,
    body: Option<String>,
    head: GitHubBranchRef,
    base: GitHubBranchRef,
    merged_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GitHubBranchRef {
    #[serde(rename = "ref")]
    branch: String,
}

impl From<GitHubPullRequest> for PullRequest {
    fn from(pr: GitHubPullRequest) -> Self {
        let state = if pr.merged_at.is_some() {
            PrState::Merged
        } else if pr.state == "closed" {
            PrState::Closed
        } else {
            PrState::Open
        };

        PullRequest {
            number: pr.number,
            url: pr.html_url,
            state,
            is_draft: pr.draft,
            head: pr.head.branch,
            base: pr.base.branch,
            title: pr.title,
            body: pr.body,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GitHubRepo {
    #[serde(default)]
    fork: bool,
    delete_branch_on_merge: Option<bool>,
    parent: Option<GitHubParentRepo>,
}

#[derive(Debug, Deserialize)]
struct GitHubParentRepo {
    name: String,
    full_name: String,
    clone_url: String,
    default_branch: String,
    owner: GitHubOwner,
}

#[derive(Debug, Deserialize)]
struct GitHubOwner {
    login: String,
}

impl From<GitHubRepo> for RepoDetailedInfo {
    fn from(repo: GitHubRepo) -> Self {
        RepoDetailedInfo {
            delete_branch_after_merge: repo.delete_branch_on_merge,
            fork_info: ForkInfo {
                is_fork: repo.fork,
                parent: repo.parent.map(|parent| ParentRepoInfo {
                    owner: parent.owner.login,
                    name: parent.name,
                    full_name: parent.full_name,
                    clone_url: parent.clone_url,
                    default_branch: parent.default_branch,
                }),
            },
        }
    }
}
